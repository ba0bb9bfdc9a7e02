use clap::Parser;
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;

use cantor_explorer::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if let Err(err) = cantor_explorer::input::cli::run(cli) {
        error!(%err, "command failed");
        std::process::exit(err.exit_code());
    }

    Ok(())
}
