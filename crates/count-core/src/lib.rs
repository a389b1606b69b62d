#![deny(warnings)]
pub mod count;
pub mod model;
pub mod recognition;

pub use count::{CountError, CountTracker, SimulationOutcome, Suggestion};
pub use model::{Card, Rank, Suit};

pub struct AppInfo;

impl AppInfo {
    pub const fn title() -> &'static str {
        "Card Counting Program"
    }
}
