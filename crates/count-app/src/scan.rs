use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use count_core::recognition::{CardRecognizer, Detection, LabelFeed, RecognitionError};
use tracing::info;

use crate::display::error_dialog;

/// Frame tallies for one scan. Recognised cards are shown, never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub frames: u64,
    pub cards: u64,
    pub empty: u64,
    pub rejected: u64,
}

pub fn open_feed(path: &Path) -> Result<LabelFeed<BufReader<File>>> {
    let file = File::open(path)
        .with_context(|| format!("opening recognition feed {}", path.display()))?;
    Ok(LabelFeed::new(BufReader::new(file)))
}

/// Pulls frames until the recognizer runs dry, printing one `Card: ...`
/// line per frame. Unknown labels are reported and skipped.
pub fn run_scan<C, W, E>(recognizer: &mut C, out: &mut W, err: &mut E) -> Result<ScanSummary>
where
    C: CardRecognizer + ?Sized,
    W: Write,
    E: Write,
{
    let mut summary = ScanSummary::default();
    loop {
        match recognizer.recognize() {
            Ok(Some(detection)) => {
                summary.frames += 1;
                match detection {
                    Detection::Card(_) => summary.cards += 1,
                    Detection::NoCard => summary.empty += 1,
                }
                writeln!(out, "{detection}")?;
            }
            Ok(None) => break,
            Err(RecognitionError::UnknownLabel(label)) => {
                summary.frames += 1;
                summary.rejected += 1;
                writeln!(
                    err,
                    "{}",
                    error_dialog("Recognition Error", format!("unknown card label '{label}'"))
                )?;
            }
            Err(other) => return Err(other).context("reading recognition feed"),
        }
    }
    info!(
        frames = summary.frames,
        cards = summary.cards,
        empty = summary.empty,
        rejected = summary.rejected,
        "scan finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prints_one_line_per_frame() {
        let mut feed = LabelFeed::new(Cursor::new("jack_of_clubs\nnone\njoker\n7_of_hearts\n"));
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run_scan(&mut feed, &mut out, &mut err).expect("scan");

        assert_eq!(
            summary,
            ScanSummary {
                frames: 4,
                cards: 2,
                empty: 1,
                rejected: 1
            }
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Card: jack_of_clubs\nCard: No card detected\nCard: 7_of_hearts\n"
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Recognition Error: unknown card label 'joker'\n"
        );
    }

    #[test]
    fn missing_feed_is_reported_with_path() {
        let err = open_feed(Path::new("does/not/exist.txt"))
            .err()
            .expect("missing file");
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
