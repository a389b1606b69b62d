#![deny(warnings)]

use std::process::ExitCode;

use clap::Parser;

use count_app::cli::{self, Cli};
use count_app::logging::init_logging;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    let logging_guard = init_logging(&config.logging)?;
    if let Some(guard) = logging_guard.as_ref() {
        eprintln!("Structured log: {}", guard.log_path.display());
    }
    cli::run(cli, config)
}
