//! Command-line front end.

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use errors::CliError;

/// Runs the parsed command.
pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            params,
            format,
            output,
            width,
        } => {
            commands::render::run(&params, format.into(), output, width)?;
        }
        Command::Animate {
            params,
            format,
            out_dir,
            width,
            max_frames,
        } => {
            commands::animate::run(&params, format.into(), &out_dir, width, max_frames)?;
        }
        Command::Params { params, output } => {
            commands::params::run(&params, output.as_deref())?;
        }
    }

    Ok(())
}
