use core::fmt;
use serde::Serialize;

const BET_BIG_AT: i64 = 5;
const MINIMUM_BET_AT: i64 = -5;

/// Betting posture derived from a running count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    BetBig,
    Neutral,
    MinimumBet,
}

impl Suggestion {
    pub const fn as_str(self) -> &'static str {
        match self {
            Suggestion::BetBig => "Bet Big!",
            Suggestion::Neutral => "Neutral. Play cautiously.",
            Suggestion::MinimumBet => "Minimum Bet.",
        }
    }
}

pub const fn suggest(count: i64) -> Suggestion {
    if count >= BET_BIG_AT {
        Suggestion::BetBig
    } else if count <= MINIMUM_BET_AT {
        Suggestion::MinimumBet
    } else {
        Suggestion::Neutral
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Suggestion: {}", self.as_str())
    }
}
