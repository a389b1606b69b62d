use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use count_core::count::{
    CountTracker, card_layout, check_draw_count, parse_draw_count, simulate, simulate_seeded,
};
use count_core::recognition::LabelFeed;
use tracing::debug;

use crate::config::AppConfig;
use crate::display::{count_error, count_line, simulation_result, suggestion_line};
use crate::scan::{open_feed, run_scan};
use crate::session::SessionController;

/// Hi-Lo card counting aid.
#[derive(Debug, Parser)]
#[command(
    name = "cardcount",
    author,
    version,
    about = "Hi-Lo running count, betting suggestions and draw simulations"
)]
pub struct Cli {
    /// Path to a YAML configuration file.
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured tracing level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the Hi-Lo card layout.
    Layout,
    /// Count a sequence of card numbers (1-13) from a fresh count.
    Count {
        /// Card numbers in the order they were observed.
        #[arg(value_name = "CARD", required = true, allow_hyphen_values = true)]
        entries: Vec<String>,
    },
    /// Draw random cards from an infinite shoe and report their count.
    Simulate {
        /// Number of cards to draw.
        #[arg(value_name = "CARDS", allow_hyphen_values = true)]
        cards: String,

        /// Seed for reproducible draws (overrides simulation.seed).
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show card labels from a detector feed; they are not counted.
    Scan {
        /// File with one label per line; stdin when omitted.
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Interactive counting session on stdin (the default).
    Session,
}

impl Cli {
    /// Loads the configuration file (if any) and applies flag overrides.
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match self.config.as_ref() {
            Some(path) => AppConfig::from_path(path)?,
            None => AppConfig::default(),
        };
        if let Some(level) = self.log_level.as_ref() {
            config.logging.tracing_level = level.clone();
        }
        config.validate().context("applying command-line overrides")?;
        Ok(config)
    }
}

pub fn run(cli: Cli, config: AppConfig) -> Result<ExitCode> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let command = cli.command.unwrap_or(Command::Session);
    debug!(?command, "dispatching command");
    execute(command, &config, &mut out, &mut err)
}

/// Runs one command against the given writers. Interactive input is read
/// from stdin.
pub fn execute<W: Write, E: Write>(
    command: Command,
    config: &AppConfig,
    out: &mut W,
    err: &mut E,
) -> Result<ExitCode> {
    match command {
        Command::Layout => {
            writeln!(out, "{}", card_layout())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Count { entries } => {
            let mut tracker = CountTracker::new();
            let mut rejected = 0usize;
            for entry in &entries {
                match tracker.apply_entry(entry) {
                    Ok(count) => {
                        writeln!(out, "{}", count_line(count))?;
                        writeln!(out, "{}", suggestion_line(tracker.suggestion()))?;
                    }
                    Err(e) => {
                        rejected += 1;
                        writeln!(err, "{}", count_error(&e))?;
                    }
                }
            }
            Ok(if rejected == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Simulate { cards, seed, json } => {
            let outcome = parse_draw_count(&cards)
                .and_then(|n| check_draw_count(n, config.simulation.max_cards).map(|_| n))
                .and_then(|n| match seed.or(config.simulation.seed) {
                    Some(seed) => simulate_seeded(n, seed),
                    None => simulate(n),
                });
            match outcome {
                Ok(outcome) if json => {
                    writeln!(out, "{}", outcome.to_json()?)?;
                    Ok(ExitCode::SUCCESS)
                }
                Ok(outcome) => {
                    writeln!(
                        out,
                        "{}",
                        simulation_result(&outcome, config.simulation.max_display)
                    )?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    writeln!(err, "{}", count_error(&e))?;
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Scan { input } => {
            let summary = match input {
                Some(path) => run_scan(&mut open_feed(&path)?, out, err)?,
                None => {
                    let mut feed = LabelFeed::new(io::stdin().lock());
                    run_scan(&mut feed, out, err)?
                }
            };
            Ok(if summary.rejected == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Session => {
            let mut controller = SessionController::new(config.simulation.clone());
            controller.run(io::stdin().lock(), out, err)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
