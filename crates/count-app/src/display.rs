//! Text the user sees. Each function renders one widget of the counting
//! window as a line (or block) of terminal output.

use count_core::count::{CountError, SimulationOutcome, Suggestion};

pub fn count_line(count: i64) -> String {
    format!("Count: {count}")
}

pub fn suggestion_line(suggestion: Suggestion) -> String {
    suggestion.to_string()
}

/// Two-line simulation summary. Draw lists longer than `max_display` are
/// truncated with a trailing marker; the total always covers every draw.
pub fn simulation_result(outcome: &SimulationOutcome, max_display: usize) -> String {
    let drawn = if outcome.cards() <= max_display {
        outcome.drawn_display()
    } else {
        let head = outcome.ranks[..max_display]
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{head}, ... ({} more)", outcome.cards() - max_display)
    };
    format!(
        "Simulation Result: Count after {} cards is {}\nCards Drawn: {drawn}",
        outcome.cards(),
        outcome.final_count
    )
}

pub fn error_dialog(title: &str, message: impl std::fmt::Display) -> String {
    format!("{title}: {message}")
}

pub fn count_error(err: &CountError) -> String {
    error_dialog(err.title(), err)
}

pub const HELP: &str = "\
Commands:
  <1-13>           enter an observed card
  sim [N]          simulate N random cards (separate from the live count)
  scan <FILE>      show detector labels from FILE, one per line
  layout           show the card layout
  count            show the current count and suggestion
  help             show this help
  quit             leave the session";
