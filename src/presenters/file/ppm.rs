use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::export::errors::ExportError;
use crate::controllers::export::format::ExportFormat;
use crate::controllers::export::size::ExportSize;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::rasterize_scene::rasterize_scene::rasterize_scene;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::scene::Scene;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Ppm
    }

    fn present(&self, scene: &Scene, size: ExportSize, filepath: &Path) -> Result<(), ExportError> {
        let buffer = rasterize_scene(scene, size.width, size.height)?;
        let mut file = BufWriter::new(File::create(filepath)?);

        write_ppm(&buffer, &mut file)?;
        file.flush()?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

fn write_ppm(buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}
