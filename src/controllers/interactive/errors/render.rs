use thiserror::Error;

/// A scene build that failed; the previous frame stays on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render {generation} failed: {message}")]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}
