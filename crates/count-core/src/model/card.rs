use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    fn rank_word(self) -> String {
        match self.rank.face_name() {
            Some(name) => name.to_ascii_lowercase(),
            None => self.rank.value().to_string(),
        }
    }
}

/// Renders the detector's class-name form, e.g. `king_of_spades`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_of_{}", self.rank_word(), self.suit)
    }
}
