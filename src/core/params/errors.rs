use thiserror::Error;

use crate::core::data::colour::ColourError;
use crate::core::fractals::fractal_kinds::FractalMode;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("invalid argument: depth must be >= 0, got {0}")]
    NegativeDepth(i32),
    #[error("invalid argument: depth {depth} exceeds the {mode} mode limit of {max}")]
    DepthOutOfRange {
        depth: u32,
        mode: FractalMode,
        max: u32,
    },
    #[error("invalid argument: thickness must be a positive finite number, got {0}")]
    NonPositiveThickness(f64),
    #[error("invalid argument: animation speed must be at least 1 ms")]
    NonPositiveSpeed,
    #[error(transparent)]
    Colour(#[from] ColourError),
}
