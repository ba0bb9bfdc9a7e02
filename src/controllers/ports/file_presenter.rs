use std::path::Path;

use crate::controllers::export::errors::ExportError;
use crate::controllers::export::format::ExportFormat;
use crate::controllers::export::size::ExportSize;
use crate::core::data::scene::Scene;

pub trait FilePresenterPort {
    fn format(&self) -> ExportFormat;

    fn present(&self, scene: &Scene, size: ExportSize, filepath: &Path) -> Result<(), ExportError>;
}

impl<P: FilePresenterPort + ?Sized> FilePresenterPort for Box<P> {
    fn format(&self) -> ExportFormat {
        (**self).format()
    }

    fn present(&self, scene: &Scene, size: ExportSize, filepath: &Path) -> Result<(), ExportError> {
        (**self).present(scene, size, filepath)
    }
}
