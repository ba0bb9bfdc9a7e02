use tracing::debug;

use crate::core::params::render_params::RenderParams;
use crate::input::cli::args::ParamArgs;
use crate::input::cli::errors::CliError;
use crate::storage::params_file::load_params;

/// Defaults, then the `--params` file, then each flag.
pub fn resolve_params(args: &ParamArgs) -> Result<RenderParams, CliError> {
    let mut params = match &args.params_file {
        Some(path) => {
            debug!(path = %path.display(), "loading params file");
            load_params(path)?
        }
        None => RenderParams::default(),
    };

    params.apply_all(args.changes())?;

    Ok(params)
}
