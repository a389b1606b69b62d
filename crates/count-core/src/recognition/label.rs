use core::str::FromStr;

use crate::model::{Card, Rank, Suit};
use crate::recognition::RecognitionError;

fn rank_from_word(word: &str) -> Option<Rank> {
    match word.to_ascii_lowercase().as_str() {
        "ace" => Some(Rank::Ace),
        "jack" => Some(Rank::Jack),
        "queen" => Some(Rank::Queen),
        "king" => Some(Rank::King),
        digits => digits.parse::<u8>().ok().and_then(Rank::from_value),
    }
}

/// Parses a detector class name such as `queen_of_hearts` or `10_of_clubs`.
pub fn parse_label(label: &str) -> Result<Card, RecognitionError> {
    let trimmed = label.trim();
    let unknown = || RecognitionError::UnknownLabel(trimmed.to_string());
    let (rank, suit) = trimmed.split_once("_of_").ok_or_else(unknown)?;
    let rank = rank_from_word(rank).ok_or_else(unknown)?;
    let suit = Suit::from_name(suit).ok_or_else(unknown)?;
    Ok(Card::new(rank, suit))
}

impl FromStr for Card {
    type Err = RecognitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}
