use crate::controllers::export::errors::ExportError;
use crate::controllers::export::format::ExportFormat;
use crate::core::data::scene_rect::SceneRect;

/// Output size in pixels, aspect-locked to the scene bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSize {
    pub width: u32,
    pub height: u32,
}

/// Resolves the output size for `bounds`.
///
/// `width` defaults to the scene width. The height follows the scene aspect
/// ratio and is never less than one pixel.
pub fn export_size(
    bounds: &SceneRect,
    format: ExportFormat,
    width: Option<u32>,
) -> Result<ExportSize, ExportError> {
    let range = format.width_range();
    let width = width.unwrap_or_else(|| {
        bounds
            .width
            .max(1.0)
            .round()
            .clamp(f64::from(*range.start()), f64::from(*range.end())) as u32
    });

    if !range.contains(&width) {
        return Err(ExportError::WidthOutOfRange {
            format,
            width,
            min: *range.start(),
            max: *range.end(),
        });
    }

    let height = (f64::from(width) * bounds.aspect_ratio()).round().max(1.0) as u32;

    Ok(ExportSize { width, height })
}
