pub mod card;
pub mod rank;
pub mod suit;

pub use card::Card;
pub use rank::Rank;
pub use suit::Suit;
