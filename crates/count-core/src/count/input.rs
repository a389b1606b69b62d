use crate::count::error::CountError;
use crate::model::rank::Rank;

/// Parses a typed card entry into a rank.
pub fn parse_rank(input: &str) -> Result<Rank, CountError> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| CountError::UnparsableRank {
            input: trimmed.to_string(),
        })?;
    Rank::try_from(value)
}

/// Parses a requested simulation size. Only syntax is checked here; the
/// sign is validated by the simulator.
pub fn parse_draw_count(input: &str) -> Result<i64, CountError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CountError::UnparsableCount {
            input: trimmed.to_string(),
        })
}
