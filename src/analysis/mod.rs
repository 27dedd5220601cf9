//! Downstream analysis of extracted reviews: tokenizing, polarity scoring and
//! token frequencies for word clouds.
//!
//! A morphological analyzer or an image renderer plugs in through
//! [`Tokenizer`] and [`FrequencyRenderer`].

pub mod frequency;
pub mod lexicon;
pub mod script;
pub mod sentiment;

use std::collections::BTreeMap;

pub use frequency::{word_frequencies, FrequencyRenderer, JsonFrequencyRenderer};
pub use lexicon::Lexicon;
pub use script::ScriptTokenizer;
pub use sentiment::Sentiment;

use crate::review::ReviewRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub pos: PartOfSpeech,
}

impl Token {
    pub fn new(surface: impl Into<String>, pos: PartOfSpeech) -> Self {
        Token {
            surface: surface.into(),
            pos,
        }
    }
}

pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Per-review sentiment plus the texts grouped by label.
#[derive(Debug, Default)]
pub struct SentimentReport<'a> {
    pub labels: Vec<(i64, Sentiment)>,
    pub counts: BTreeMap<Sentiment, usize>,
    pub positive: Vec<&'a str>,
    pub negative: Vec<&'a str>,
}

pub fn classify_reviews<'a, T: Tokenizer + ?Sized>(
    reviews: &'a [ReviewRecord],
    tokenizer: &T,
    lexicon: &Lexicon,
) -> SentimentReport<'a> {
    let mut report = SentimentReport::default();
    for r in reviews {
        let tokens = tokenizer.tokenize(&r.content);
        let score = sentiment::sentiment_score(&tokens, lexicon);
        let label = Sentiment::from_score(score);
        *report.counts.entry(label).or_default() += 1;
        match label {
            Sentiment::Positive => report.positive.push(&r.content),
            Sentiment::Negative => report.negative.push(&r.content),
            Sentiment::Neutral => {}
        }
        report.labels.push((score, label));
    }
    report
}
