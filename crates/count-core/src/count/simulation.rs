use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::count::error::CountError;
use crate::model::rank::Rank;

/// Largest draw any simulation accepts, whatever the caller's own limit.
pub const MAX_DRAWS: i64 = 1_000_000;

/// Result of drawing from an infinite shoe. The total is independent of any
/// live session count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub final_count: i64,
    pub ranks: Vec<Rank>,
}

impl SimulationOutcome {
    pub fn cards(&self) -> usize {
        self.ranks.len()
    }

    /// Comma-separated rank numbers in draw order.
    pub fn drawn_display(&self) -> String {
        self.ranks
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn simulate(cards: i64) -> Result<SimulationOutcome, CountError> {
    simulate_with(&mut rand::thread_rng(), cards)
}

pub fn simulate_seeded(cards: i64, seed: u64) -> Result<SimulationOutcome, CountError> {
    let mut rng = StdRng::seed_from_u64(seed);
    simulate_with(&mut rng, cards)
}

/// Rejects draw counts outside `1..=limit`; `limit` is clamped to
/// `MAX_DRAWS`.
pub fn check_draw_count(cards: i64, limit: i64) -> Result<usize, CountError> {
    let limit = limit.min(MAX_DRAWS);
    let checked = if cards <= 0 {
        Err(CountError::InvalidCount { requested: cards })
    } else if cards > limit {
        Err(CountError::TooManyCards {
            requested: cards,
            limit,
        })
    } else {
        usize::try_from(cards).map_err(|_| CountError::TooManyCards {
            requested: cards,
            limit,
        })
    };
    checked.inspect_err(|err| warn!(cards, %err, "rejected simulation size"))
}

/// Draws `cards` ranks uniformly from 1..=13 with replacement.
pub fn simulate_with<R: Rng + ?Sized>(
    rng: &mut R,
    cards: i64,
) -> Result<SimulationOutcome, CountError> {
    let draws = check_draw_count(cards, MAX_DRAWS)?;

    let mut ranks = Vec::with_capacity(draws);
    let mut total = 0i64;
    for _ in 0..draws {
        let value = rng.gen_range(Rank::MIN..=Rank::MAX);
        let rank = Rank::try_from(value)?;
        total += i64::from(rank.weight());
        ranks.push(rank);
    }

    info!(cards = draws, final_count = total, "simulation finished");
    Ok(SimulationOutcome {
        final_count: total,
        ranks,
    })
}
