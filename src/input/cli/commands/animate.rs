use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Instant;

use tracing::info;

use crate::controllers::export::ExportFormat;
use crate::controllers::interactive::{
    ControlEvent, InteractiveController, ScenePresenterPort, run_event_loop,
};
use crate::input::cli::args::ParamArgs;
use crate::input::cli::commands::resolve::resolve_params;
use crate::input::cli::errors::CliError;
use crate::presenters::file::file_presenter_for;
use crate::presenters::file::frame_sequence::FrameSequencePresenter;

/// Plays the animation headless in real time, writing one file per frame.
pub fn run(
    args: &ParamArgs,
    format: ExportFormat,
    out_dir: &Path,
    width: Option<u32>,
    max_frames: Option<usize>,
) -> Result<Vec<PathBuf>, CliError> {
    let params = resolve_params(args)?;
    if params.loop_animation && max_frames.is_none() {
        return Err(CliError::UnboundedAnimation);
    }

    fs::create_dir_all(out_dir)?;

    let presenter = Arc::new(FrameSequencePresenter::new(
        file_presenter_for(format),
        out_dir,
        width,
    ));
    let mut controller = InteractiveController::new(
        params,
        Arc::clone(&presenter) as Arc<dyn ScenePresenterPort>,
    );

    let (sender, receiver) = mpsc::channel::<ControlEvent>();
    drop(sender);
    controller.handle(ControlEvent::Play, Instant::now())?;

    let watched = Arc::clone(&presenter);
    run_event_loop(&mut controller, &receiver, move |_| {
        watched.has_failed() || max_frames.is_some_and(|max| watched.frames_written() >= max)
    });

    let written = presenter.finish()?;
    info!(frames = written.len(), dir = %out_dir.display(), "animation exported");
    println!("{} frames written to {}", written.len(), out_dir.display());

    Ok(written)
}
