use std::sync::LazyLock;

use regex::Regex;

// e.g. 2025年11月25日, also with full-width digits
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})年(\d{1,2})月(\d{1,2})日$").unwrap());
static HELPFUL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s*人のユーザーが、このレビューが役立ったと評価しました$").unwrap()
});

/// Footer line that closes every review block.
pub const BLOCK_TERMINATOR: &str = "役に立ちましたか？";

/// Match a whole-line `YYYY年M月D日` date. The triple is not checked against
/// the calendar here.
pub fn match_date(line: &str) -> Option<(i32, u32, u32)> {
    let caps = DATE_RE.captures(line)?;
    let year = parse_digits(&caps[1])?.try_into().ok()?;
    let month = parse_digits(&caps[2])?.try_into().ok()?;
    let day = parse_digits(&caps[3])?.try_into().ok()?;
    Some((year, month, day))
}

/// Match a whole-line helpful-vote footer and return the vote count.
pub fn match_helpful_votes(line: &str) -> Option<u64> {
    parse_digits(&HELPFUL_RE.captures(line)?[1])
}

/// Decimal value of a run of ASCII or full-width digits. Other scripts'
/// digits and overflow give `None`.
fn parse_digits(digits: &str) -> Option<u64> {
    digits.chars().try_fold(0u64, |acc, c| {
        let d = match c {
            '０'..='９' => c as u32 - '０' as u32,
            _ => c.to_digit(10)?,
        };
        acc.checked_mul(10)?.checked_add(u64::from(d))
    })
}

pub fn is_terminator(line: &str) -> bool {
    line == BLOCK_TERMINATOR
}
