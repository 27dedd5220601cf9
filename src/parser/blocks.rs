use chrono::NaiveDate;

use super::matchers::{is_terminator, match_date, match_helpful_votes};
use crate::error::ParseError;
use crate::review::{ReviewRecord, SOURCE_TAG};

/// Author name the publisher uses when replying to reviews.
pub const PUBLISHER_IDENTITY: &str = "ZOZO, Inc.";

/// One consumed review block: the line span from author to footer
/// (inclusive) and the record parsed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedBlock {
    pub start: usize,
    pub end: usize,
    pub record: ReviewRecord,
}

impl ScannedBlock {
    pub fn is_publisher_reply(&self) -> bool {
        self.record.author == PUBLISHER_IDENTITY
    }
}

/// Walk normalized lines once and cut them into review blocks.
///
/// A block starts with an author line directly followed by a date line and
/// ends at the next `役に立ちましたか？` footer. Lines that cannot start a
/// block are skipped one at a time. A header whose block never reaches a
/// footer is dropped and scanning resumes on the line after the author.
///
/// A date line that is well formed but not a real calendar date fails the
/// whole scan.
pub fn scan_spans(lines: &[&str]) -> Result<Vec<ScannedBlock>, ParseError> {
    let n = lines.len();
    let terminators: Vec<usize> = (0..n).filter(|&k| is_terminator(lines[k])).collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i + 2 < n {
        let author = lines[i];
        let Some((year, month, day)) = match_date(lines[i + 1]) else {
            // icon captions, section headings, "はい"/"いいえ" buttons
            i += 1;
            continue;
        };

        let Some(end) = next_terminator(&terminators, i + 2) else {
            // no footer before EOF: developer reply or truncated paste
            i += 1;
            continue;
        };

        let mut body = Vec::new();
        let mut helpful_votes = 0;
        for line in &lines[i + 2..end] {
            match match_helpful_votes(line) {
                Some(votes) => helpful_votes = votes,
                None => body.push(*line),
            }
        }

        // year 0 has no proleptic Gregorian counterpart in the source data
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .filter(|_| year >= 1)
            .ok_or(ParseError::InvalidDate {
                line: i + 1,
                year,
                month,
                day,
            })?;

        blocks.push(ScannedBlock {
            start: i,
            end,
            record: ReviewRecord {
                author: author.to_string(),
                date,
                year,
                helpful_votes,
                content: body.join("\n"),
                source: SOURCE_TAG,
            },
        });

        i = end + 1;
    }

    Ok(blocks)
}

/// Review records in input order. Publisher replies are consumed by the
/// scan but not returned.
pub fn scan_blocks(lines: &[&str]) -> Result<Vec<ReviewRecord>, ParseError> {
    Ok(scan_spans(lines)?
        .into_iter()
        .filter(|b| !b.is_publisher_reply())
        .map(|b| b.record)
        .collect())
}

/// First footer index at or after `from`.
fn next_terminator(terminators: &[usize], from: usize) -> Option<usize> {
    let idx = terminators.partition_point(|&t| t < from);
    terminators.get(idx).copied()
}
