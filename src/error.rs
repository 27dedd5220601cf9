use thiserror::Error;

/// Errors raised while turning normalized lines into review records.
///
/// "No match" outcomes (missing date line, missing terminator, missing
/// helpful-vote line) are not errors; the scanner recovers from them silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A date line had the right shape but is not a real calendar date.
    #[error("invalid calendar date {year}-{month:02}-{day:02} on line {line}")]
    InvalidDate {
        line: usize,
        year: i32,
        month: u32,
        day: u32,
    },
}
