use thiserror::Error;

/// Rejected input for a single counting operation. Never leaves a tracker
/// in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("Invalid card number. Please enter a number between 1 and 13.")]
    InvalidRank { value: i64 },
    #[error("Invalid card number. Please enter a number between 1 and 13.")]
    UnparsableRank { input: String },
    #[error("Number of cards must be greater than 0.")]
    InvalidCount { requested: i64 },
    #[error("Number of cards must be greater than 0.")]
    UnparsableCount { input: String },
    #[error("Number of cards must be at most {limit}.")]
    TooManyCards { requested: i64, limit: i64 },
}

impl CountError {
    /// Title of the dialog the error is surfaced under.
    pub const fn title(&self) -> &'static str {
        "Invalid Input"
    }
}
