use chrono::NaiveDate;
use serde::Serialize;

/// Ingestion channel tag carried by every record from this extractor.
pub const SOURCE_TAG: &str = "google_play_android";

/// Column order of the tabular output.
pub const CSV_HEADER: [&str; 6] = ["author", "date", "year", "helpful_votes", "content", "source"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRecord {
    pub author: String,
    pub date: NaiveDate,
    pub year: i32,
    pub helpful_votes: u64,
    pub content: String,
    pub source: &'static str,
}

impl ReviewRecord {
    /// Fields as strings, in `CSV_HEADER` order. Dates render as `YYYY-MM-DD`.
    pub fn to_row(&self) -> [String; 6] {
        [
            self.author.clone(),
            self.date.format("%Y-%m-%d").to_string(),
            self.year.to_string(),
            self.helpful_votes.to_string(),
            self.content.clone(),
            self.source.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_matches_header_order() {
        let r = ReviewRecord {
            author: "山田太郎".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            year: 2025,
            helpful_votes: 3,
            content: "良い".into(),
            source: SOURCE_TAG,
        };
        assert_eq!(
            r.to_row(),
            ["山田太郎", "2025-01-05", "2025", "3", "良い", "google_play_android"].map(String::from)
        );
    }

    #[test]
    fn json_date_is_iso() {
        let r = ReviewRecord {
            author: "a".into(),
            date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            year: 2024,
            helpful_votes: 0,
            content: String::new(),
            source: SOURCE_TAG,
        };
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["date"], "2024-12-31");
        assert_eq!(v["source"], "google_play_android");
    }
}
