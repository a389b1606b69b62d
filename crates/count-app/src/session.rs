use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use count_core::AppInfo;
use count_core::count::{
    CountError, CountTracker, SimulationOutcome, card_layout, check_draw_count, parse_draw_count,
    simulate_with,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::config::SimulationConfig;
use crate::display::{
    HELP, count_error, count_line, error_dialog, simulation_result, suggestion_line,
};
use crate::scan::{open_feed, run_scan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub final_count: i64,
    pub cards_seen: u64,
    pub rejected_entries: u64,
    pub simulations: u64,
}

/// Single writer over one running count. Every action of the counting
/// window (submit, simulate, scan, quit) goes through here.
pub struct SessionController {
    tracker: CountTracker,
    simulation: SimulationConfig,
    rng: StdRng,
    rejected_entries: u64,
    simulations: u64,
}

impl SessionController {
    pub fn new(simulation: SimulationConfig) -> Self {
        let rng = match simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            tracker: CountTracker::new(),
            simulation,
            rng,
            rejected_entries: 0,
            simulations: 0,
        }
    }

    pub fn tracker(&self) -> &CountTracker {
        &self.tracker
    }

    pub fn status_text(&self) -> String {
        format!(
            "{}\n{}",
            count_line(self.tracker.count()),
            suggestion_line(self.tracker.suggestion())
        )
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            final_count: self.tracker.count(),
            cards_seen: self.tracker.cards_seen(),
            rejected_entries: self.rejected_entries,
            simulations: self.simulations,
        }
    }

    pub fn submit_card(&mut self, entry: &str) -> Result<i64, CountError> {
        self.tracker
            .apply_entry(entry)
            .inspect_err(|_| self.rejected_entries += 1)
    }

    /// Runs a simulation on the session's RNG; `None` uses the configured
    /// default size. Sizes above `max_cards` are refused before any draw.
    /// The live count is left alone.
    pub fn simulate(&mut self, entry: Option<&str>) -> Result<SimulationOutcome, CountError> {
        let cards = match entry {
            Some(text) => parse_draw_count(text)?,
            None => self.simulation.default_cards,
        };
        check_draw_count(cards, self.simulation.max_cards)?;
        let outcome = simulate_with(&mut self.rng, cards)?;
        self.simulations += 1;
        Ok(outcome)
    }

    pub fn handle_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        err: &mut E,
    ) -> Result<Flow> {
        let trimmed = line.trim();
        let mut tokens = trimmed.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(Flow::Continue);
        };

        match command.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Flow::Quit),
            "help" | "?" => writeln!(out, "{HELP}")?,
            "layout" => writeln!(out, "{}", card_layout())?,
            "count" | "status" => writeln!(out, "{}", self.status_text())?,
            "sim" | "simulate" => match self.simulate(tokens.next()) {
                Ok(outcome) => {
                    writeln!(
                        out,
                        "{}",
                        simulation_result(&outcome, self.simulation.max_display)
                    )?;
                }
                Err(e) => writeln!(err, "{}", count_error(&e))?,
            },
            "scan" => {
                let path = trimmed[command.len()..].trim();
                if path.is_empty() {
                    writeln!(err, "{}", error_dialog("Missing Argument", "scan <FILE>"))?;
                } else {
                    let scanned = open_feed(Path::new(path))
                        .and_then(|mut feed| run_scan(&mut feed, out, err));
                    if let Err(e) = scanned {
                        writeln!(err, "{}", error_dialog("Scan Error", format!("{e:#}")))?;
                    }
                }
            }
            _ => match self.submit_card(trimmed) {
                Ok(_) => writeln!(out, "{}", self.status_text())?,
                Err(e) => writeln!(err, "{}", count_error(&e))?,
            },
        }
        Ok(Flow::Continue)
    }

    /// Prints the opening screen, then handles one command per input line
    /// until `quit` or end of input.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<SessionSummary> {
        writeln!(out, "{}", AppInfo::title())?;
        writeln!(out, "{}", card_layout())?;
        writeln!(out, "{}", self.status_text())?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let flow = self.handle_line(&line, out, err)?;
            out.flush()?;
            if flow == Flow::Quit {
                break;
            }
        }

        let summary = self.summary();
        info!(
            final_count = summary.final_count,
            cards_seen = summary.cards_seen,
            rejected_entries = summary.rejected_entries,
            simulations = summary.simulations,
            "session ended"
        );
        Ok(summary)
    }
}
