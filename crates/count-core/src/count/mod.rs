pub mod error;
pub mod input;
pub mod simulation;
pub mod suggestion;
pub mod tracker;
pub mod weights;

pub use error::CountError;
pub use input::{parse_draw_count, parse_rank};
pub use simulation::{
    MAX_DRAWS, SimulationOutcome, check_draw_count, simulate, simulate_seeded, simulate_with,
};
pub use suggestion::{Suggestion, suggest};
pub use tracker::CountTracker;
pub use weights::{card_layout, weight_of, weight_of_value};
