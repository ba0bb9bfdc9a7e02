use std::path::Path;

use tracing::info;

use crate::input::cli::args::ParamArgs;
use crate::input::cli::commands::resolve::resolve_params;
use crate::input::cli::errors::CliError;
use crate::storage::params_file::{params_to_json, save_params};

pub fn run(args: &ParamArgs, output: Option<&Path>) -> Result<(), CliError> {
    let params = resolve_params(args)?;

    match output {
        Some(path) => {
            save_params(&params, path)?;
            info!(path = %path.display(), "params saved");
        }
        None => print!("{}", params_to_json(&params)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::params_file::load_params;
    use tempfile::TempDir;

    #[test]
    fn saves_resolved_params() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("params.json");
        let args = ParamArgs {
            depth: Some(9),
            bg: Some("#123456".to_string()),
            ..ParamArgs::default()
        };

        run(&args, Some(&path)).unwrap();

        let params = load_params(&path).unwrap();
        assert_eq!(params.depth, 9);
        assert_eq!(params.bg.to_hex(), "#123456");
    }
}
