//! Boundary with the external card detector. Labels are parsed and shown to
//! the user; they never feed a running count.

pub mod feed;
pub mod label;

pub use feed::{CardRecognizer, Detection, LabelFeed};
pub use label::parse_label;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("unknown card label '{0}'")]
    UnknownLabel(String),
    #[error("failed to read recognition feed: {0}")]
    Io(#[from] std::io::Error),
}
