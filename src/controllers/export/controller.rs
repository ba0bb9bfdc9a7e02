use std::path::Path;

use tracing::info;

use crate::controllers::export::errors::ExportError;
use crate::controllers::export::size::{ExportSize, export_size};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::scene::Scene;

/// Writes built scenes to files through a format-specific presenter.
pub struct ExportController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> ExportController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Exports `scene` at `width` pixels wide, or the scene width when `None`.
    pub fn export(
        &self,
        scene: &Scene,
        width: Option<u32>,
        filepath: impl AsRef<Path>,
    ) -> Result<ExportSize, ExportError> {
        let format = self.presenter.format();
        let size = export_size(&scene.bounds, format, width)?;
        let filepath = filepath.as_ref();

        self.presenter.present(scene, size, filepath)?;

        info!(
            %format,
            width = size.width,
            height = size.height,
            path = %filepath.display(),
            "exported scene"
        );

        Ok(size)
    }
}
