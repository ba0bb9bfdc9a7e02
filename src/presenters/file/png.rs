use std::path::Path;

use image::{ColorType, ImageFormat};

use crate::controllers::export::errors::ExportError;
use crate::controllers::export::format::ExportFormat;
use crate::controllers::export::size::ExportSize;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::rasterize_scene::rasterize_scene::rasterize_scene;
use crate::core::data::scene::Scene;

#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Png
    }

    fn present(&self, scene: &Scene, size: ExportSize, filepath: &Path) -> Result<(), ExportError> {
        let buffer = rasterize_scene(scene, size.width, size.height)?;

        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            buffer.width(),
            buffer.height(),
            ColorType::Rgb8,
            ImageFormat::Png,
        )?;

        Ok(())
    }
}
