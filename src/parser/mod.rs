pub mod blocks;
pub mod lines;
pub mod matchers;

use crate::error::ParseError;
use crate::review::ReviewRecord;

/// Two-step pipeline: raw text → normalized lines → review records.
pub fn extract_reviews(raw: &str) -> Result<Vec<ReviewRecord>, ParseError> {
    let lines = lines::normalize_lines(raw);
    blocks::scan_blocks(&lines)
}

/// Line-level counts for one input, used by `stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStats {
    pub lines: usize,
    pub date_lines: usize,
    pub helpful_lines: usize,
    pub terminators: usize,
}

pub fn line_stats(lines: &[&str]) -> LineStats {
    let mut stats = LineStats::default();
    for &line in lines {
        stats.lines += 1;
        if matchers::match_date(line).is_some() {
            stats.date_lines += 1;
        } else if matchers::match_helpful_votes(line).is_some() {
            stats.helpful_lines += 1;
        } else if matchers::is_terminator(line) {
            stats.terminators += 1;
        }
    }
    stats
}

/// Normalize once, then count lines and scan blocks over the same lines.
/// The blocks include publisher replies.
pub fn inspect(raw: &str) -> Result<(LineStats, Vec<blocks::ScannedBlock>), ParseError> {
    let lines = lines::normalize_lines(raw);
    let blocks = blocks::scan_spans(&lines)?;
    Ok((line_stats(&lines), blocks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_from_raw_text() {
        let raw = "\n  山田太郎\n\n2025年11月25日\nこのアプリは使いやすいです\n5人のユーザーが、このレビューが役立ったと評価しました\n役に立ちましたか？\n";
        let reviews = extract_reviews(raw).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].content, "このアプリは使いやすいです");
        assert_eq!(reviews[0].helpful_votes, 5);
    }

    #[test]
    fn fixture_stats() {
        let raw = std::fs::read_to_string("tests/fixtures/googleplay.txt").unwrap();
        let (s, blocks) = inspect(&raw).unwrap();
        assert_eq!(s.lines, 32);
        assert_eq!(s.date_lines, 5);
        assert_eq!(s.helpful_lines, 2);
        assert_eq!(s.terminators, 4);
        assert_eq!(blocks.len(), 4);
        assert!(blocks.len() <= s.date_lines);

        let emitted = blocks.iter().filter(|b| !b.is_publisher_reply()).count();
        assert_eq!(emitted, extract_reviews(&raw).unwrap().len());
    }

    #[test]
    fn stats_over_normalized_lines() {
        let s = line_stats(&["2025年1月1日", "役に立ちましたか？", "1人のユーザーが、このレビューが役立ったと評価しました", "本文"]);
        assert_eq!(
            s,
            LineStats {
                lines: 4,
                date_lines: 1,
                helpful_lines: 1,
                terminators: 1
            }
        );
    }

    #[test]
    fn inspect_reports_invalid_date() {
        let raw = "a\n2025年2月30日\n役に立ちましたか？\n";
        assert!(matches!(inspect(raw), Err(ParseError::InvalidDate { line: 1, .. })));
    }
}
