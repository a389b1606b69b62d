use core::fmt;
use std::io::BufRead;

use tracing::{debug, trace};

use crate::model::Card;
use crate::recognition::RecognitionError;
use crate::recognition::label::parse_label;

const NO_CARD_TEXT: &str = "No card detected";

/// Outcome of one recognition frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    Card(Card),
    NoCard,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detection::Card(card) => write!(f, "Card: {card}"),
            Detection::NoCard => write!(f, "Card: {NO_CARD_TEXT}"),
        }
    }
}

/// Opaque card-recognition capability: one call per frame, `Ok(None)` once
/// the source is exhausted.
pub trait CardRecognizer {
    fn recognize(&mut self) -> Result<Option<Detection>, RecognitionError>;
}

/// Replays detector output captured as text, one label per line.
pub struct LabelFeed<R> {
    reader: R,
    line: String,
    frame: u64,
}

impl<R: BufRead> LabelFeed<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            frame: 0,
        }
    }

    pub fn frames_read(&self) -> u64 {
        self.frame
    }
}

impl<R: BufRead> CardRecognizer for LabelFeed<R> {
    fn recognize(&mut self) -> Result<Option<Detection>, RecognitionError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        self.frame += 1;
        let label = self.line.trim();
        let detection = if label.is_empty()
            || label.eq_ignore_ascii_case("none")
            || label.eq_ignore_ascii_case(NO_CARD_TEXT)
        {
            Detection::NoCard
        } else {
            match parse_label(label) {
                Ok(card) => Detection::Card(card),
                Err(err) => {
                    debug!(frame = self.frame, %err, "unrecognised detector label");
                    return Err(err);
                }
            }
        };
        trace!(frame = self.frame, ?detection, "frame recognised");
        Ok(Some(detection))
    }
}
