use std::path::PathBuf;

use tracing::info;

use crate::controllers::export::{ExportController, ExportFormat};
use crate::controllers::interactive::Status;
use crate::core::actions::build_scene::build_scene::build_scene;
use crate::input::cli::args::ParamArgs;
use crate::input::cli::commands::resolve::resolve_params;
use crate::input::cli::errors::CliError;
use crate::presenters::file::file_presenter_for;

pub fn run(
    args: &ParamArgs,
    format: ExportFormat,
    output: Option<PathBuf>,
    width: Option<u32>,
) -> Result<PathBuf, CliError> {
    let params = resolve_params(args)?;
    let output = output.unwrap_or_else(|| PathBuf::from(format!("cantor.{}", format.extension())));

    let scene = build_scene(&params, params.depth)?;
    let status = Status {
        depth: params.depth,
        item_count: scene.item_count,
        fps: None,
    };
    info!(%status, "scene built");

    let exporter = ExportController::new(file_presenter_for(format));
    let size = exporter.export(&scene, width, &output)?;

    println!(
        "{status} | {}x{} {} written to {}",
        size.width,
        size.height,
        format,
        output.display()
    );

    Ok(output)
}
