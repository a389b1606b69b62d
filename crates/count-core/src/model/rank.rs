use core::fmt;
use serde::{Deserialize, Serialize};

use crate::count::CountError;

/// Card rank as entered by the user: Ace is 1, face cards are 11 through 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 13;

    pub const ORDERED: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Rank::Ace),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Hi-Lo weight: low cards +1, middle cards 0, tens and aces -1.
    pub const fn weight(self) -> i32 {
        match self {
            Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
            Rank::Seven | Rank::Eight | Rank::Nine => 0,
            Rank::Ace | Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => -1,
        }
    }

    /// Face-card name used in the layout legend, `None` for pip cards.
    pub const fn face_name(self) -> Option<&'static str> {
        match self {
            Rank::Ace => Some("Ace"),
            Rank::Jack => Some("Jack"),
            Rank::Queen => Some("Queen"),
            Rank::King => Some("King"),
            _ => None,
        }
    }
}

impl TryFrom<i64> for Rank {
    type Error = CountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Rank::from_value)
            .ok_or(CountError::InvalidRank { value })
    }
}

impl TryFrom<u8> for Rank {
    type Error = CountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::from_value(value).ok_or(CountError::InvalidRank {
            value: i64::from(value),
        })
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;
    use crate::count::CountError;

    #[test]
    fn from_value_maps() {
        assert_eq!(Rank::from_value(1), Some(Rank::Ace));
        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn ordered_matches_values() {
        for (idx, rank) in Rank::ORDERED.iter().enumerate() {
            assert_eq!(rank.value() as usize, idx + 1);
        }
    }

    #[test]
    fn display_is_numeric() {
        assert_eq!(Rank::Ace.to_string(), "1");
        assert_eq!(Rank::Queen.to_string(), "12");
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(Rank::try_from(13i64), Ok(Rank::King));
        assert_eq!(
            Rank::try_from(-1i64),
            Err(CountError::InvalidRank { value: -1 })
        );
        assert_eq!(
            Rank::try_from(300i64),
            Err(CountError::InvalidRank { value: 300 })
        );
    }

    #[test]
    fn serde_uses_numeric_value() {
        let json = serde_json::to_string(&Rank::Ten).unwrap();
        assert_eq!(json, "10");
        let parsed: Rank = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, Rank::Ace);
        assert!(serde_json::from_str::<Rank>("14").is_err());
    }
}
