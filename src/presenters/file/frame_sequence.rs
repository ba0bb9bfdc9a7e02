use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{info, warn};

use crate::controllers::export::{ExportController, ExportError};
use crate::controllers::interactive::{RenderEvent, ScenePresenterPort};
use crate::controllers::ports::file_presenter::FilePresenterPort;

struct SequenceState {
    written: Vec<PathBuf>,
    error: Option<ExportError>,
}

/// Writes every frame the interactive controller publishes to
/// `<dir>/frame_<nnnn>.<ext>`.
///
/// Stops writing after the first failure and keeps that error for the caller.
pub struct FrameSequencePresenter<P: FilePresenterPort> {
    exporter: ExportController<P>,
    directory: PathBuf,
    width: Option<u32>,
    state: Mutex<SequenceState>,
}

impl<P: FilePresenterPort> FrameSequencePresenter<P> {
    pub fn new(presenter: P, directory: impl AsRef<Path>, width: Option<u32>) -> Self {
        Self {
            exporter: ExportController::new(presenter),
            directory: directory.as_ref().to_path_buf(),
            width,
            state: Mutex::new(SequenceState {
                written: Vec::new(),
                error: None,
            }),
        }
    }

    #[must_use]
    pub fn frames_written(&self) -> usize {
        self.lock().written.len()
    }

    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.lock().error.is_some()
    }

    /// Paths written so far, plus the failure that stopped the sequence, if any.
    pub fn finish(&self) -> Result<Vec<PathBuf>, ExportError> {
        let mut state = self.lock();

        match state.error.take() {
            Some(err) => Err(err),
            None => Ok(std::mem::take(&mut state.written)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SequenceState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn frame_path(&self, index: usize) -> PathBuf {
        let extension = self.exporter.presenter().format().extension();
        self.directory.join(format!("frame_{index:04}.{extension}"))
    }
}

impl<P> ScenePresenterPort for FrameSequencePresenter<P>
where
    P: FilePresenterPort + Send + Sync,
{
    fn present(&self, event: RenderEvent) {
        match event {
            RenderEvent::Frame(frame) => {
                let mut state = self.lock();
                if state.error.is_some() {
                    return;
                }

                let path = self.frame_path(state.written.len());
                match self.exporter.export(&frame.scene, self.width, &path) {
                    Ok(_) => {
                        info!(generation = frame.generation, status = %frame.status, "frame written");
                        state.written.push(path);
                    }
                    Err(err) => {
                        warn!(%err, path = %path.display(), "frame export failed");
                        state.error = Some(err);
                    }
                }
            }
            RenderEvent::Status(status) => info!(%status, "status"),
            RenderEvent::Error(error) => warn!(%error, "render failed"),
        }
    }
}
