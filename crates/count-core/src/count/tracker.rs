use tracing::{debug, warn};

use crate::count::error::CountError;
use crate::count::input::parse_rank;
use crate::count::suggestion::{Suggestion, suggest};
use crate::model::rank::Rank;

/// Running Hi-Lo count for one session. The caller owns it; `apply` is the
/// only way the count moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTracker {
    count: i64,
    cards_seen: u64,
}

impl CountTracker {
    pub const fn new() -> Self {
        Self {
            count: 0,
            cards_seen: 0,
        }
    }

    pub const fn count(&self) -> i64 {
        self.count
    }

    pub const fn cards_seen(&self) -> u64 {
        self.cards_seen
    }

    pub const fn suggestion(&self) -> Suggestion {
        suggest(self.count)
    }

    pub fn apply(&mut self, rank: Rank) -> i64 {
        self.count += i64::from(rank.weight());
        self.cards_seen += 1;
        debug!(
            rank = rank.value(),
            weight = rank.weight(),
            count = self.count,
            cards_seen = self.cards_seen,
            "applied observation"
        );
        self.count
    }

    /// Validates a raw rank number before applying it. A rejected value
    /// leaves the tracker untouched.
    pub fn apply_value(&mut self, value: i64) -> Result<i64, CountError> {
        let rank = Rank::try_from(value).inspect_err(|err| {
            warn!(value, %err, "rejected card entry");
        })?;
        Ok(self.apply(rank))
    }

    /// Same as `apply_value` for text typed by the user.
    pub fn apply_entry(&mut self, input: &str) -> Result<i64, CountError> {
        let rank = parse_rank(input).inspect_err(|err| {
            warn!(input, %err, "rejected card entry");
        })?;
        Ok(self.apply(rank))
    }

    pub fn apply_all<I>(&mut self, ranks: I) -> i64
    where
        I: IntoIterator<Item = Rank>,
    {
        for rank in ranks {
            self.apply(rank);
        }
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tracker_is_neutral() {
        let tracker = CountTracker::new();
        assert_eq!(tracker.count(), 0);
        assert_eq!(tracker.cards_seen(), 0);
        assert_eq!(tracker.suggestion(), Suggestion::Neutral);
    }

    #[test]
    fn scenario_reaches_minimum_bet() {
        let mut tracker = CountTracker::new();
        assert_eq!(tracker.apply_value(5), Ok(1));
        assert_eq!(tracker.suggestion(), Suggestion::Neutral);
        assert_eq!(tracker.apply_value(1), Ok(0));
        assert_eq!(tracker.suggestion(), Suggestion::Neutral);
        for _ in 0..5 {
            tracker.apply_value(10).unwrap();
        }
        assert_eq!(tracker.count(), -5);
        assert_eq!(tracker.suggestion(), Suggestion::MinimumBet);
        assert_eq!(tracker.cards_seen(), 7);
    }

    #[test]
    fn rejected_rank_leaves_count_unchanged() {
        let mut tracker = CountTracker::new();
        tracker.apply(Rank::Three);
        assert_eq!(
            tracker.apply_value(14),
            Err(CountError::InvalidRank { value: 14 })
        );
        assert_eq!(
            tracker.apply_value(0),
            Err(CountError::InvalidRank { value: 0 })
        );
        assert_eq!(tracker.count(), 1);
        assert_eq!(tracker.cards_seen(), 1);
    }

    #[test]
    fn typed_entries_are_validated() {
        let mut tracker = CountTracker::new();
        assert_eq!(tracker.apply_entry(" 6"), Ok(1));
        assert!(tracker.apply_entry("six").is_err());
        assert!(tracker.apply_entry("0").is_err());
        assert_eq!(tracker.count(), 1);
        assert_eq!(tracker.cards_seen(), 1);
    }

    #[test]
    fn order_does_not_change_total() {
        let orders = [
            [Rank::Two, Rank::Seven, Rank::Ace],
            [Rank::Ace, Rank::Two, Rank::Seven],
            [Rank::Seven, Rank::Ace, Rank::Two],
        ];
        for order in orders {
            let mut tracker = CountTracker::new();
            assert_eq!(tracker.apply_all(order), 0);
        }
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = CountTracker::new();
        let mut b = CountTracker::new();
        a.apply_all([Rank::Two; 5]);
        b.apply(Rank::King);
        assert_eq!(a.suggestion(), Suggestion::BetBig);
        assert_eq!(b.count(), -1);
    }
}
