use thiserror::Error;

use crate::controllers::export::format::ExportFormat;
use crate::core::actions::rasterize_scene::rasterize_scene::RasterizeError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid argument: {format} width {width} outside {min}..={max}")]
    WidthOutOfRange {
        format: ExportFormat,
        width: u32,
        min: u32,
        max: u32,
    },
    #[error("failed to rasterize scene: {0}")]
    Rasterize(#[from] RasterizeError),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}
