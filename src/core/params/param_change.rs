use crate::core::fractals::fractal_kinds::FractalMode;

/// A single field edit coming from the UI, a CLI flag or a params file.
///
/// Values arrive unvalidated; colours are the raw strings the user typed.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamChange {
    Mode(FractalMode),
    Depth(i32),
    Thickness(f64),
    Foreground(String),
    Background(String),
    ShowAllLevels(bool),
    Spacing(u32),
    Loop(bool),
    SpeedMs(u32),
}

/// What a committed change asks of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamEffect {
    /// The drawing changed; schedule a rebuild.
    Rebuild,
    /// The animation tick interval changed.
    Retime,
    /// Read lazily by the next animation boundary check.
    Silent,
}
