use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use super::{Lexicon, PartOfSpeech, Token, Tokenizer};

/// Word-cloud candidates: nouns, verbs and adjectives that are not stopwords
/// and are longer than one character.
pub fn content_words<'a>(tokens: &'a [Token], lexicon: &'a Lexicon) -> impl Iterator<Item = &'a str> + 'a {
    tokens
        .iter()
        .filter(|t| {
            matches!(
                t.pos,
                PartOfSpeech::Noun | PartOfSpeech::Verb | PartOfSpeech::Adjective
            )
        })
        .map(|t| t.surface.as_str())
        .filter(|s| !lexicon.is_stopword(s))
        .filter(|s| s.trim().chars().count() > 1)
}

pub fn word_frequencies<'t, T, I>(texts: I, tokenizer: &T, lexicon: &Lexicon) -> BTreeMap<String, usize>
where
    T: Tokenizer + ?Sized,
    I: IntoIterator<Item = &'t str>,
{
    let mut counts = BTreeMap::new();
    for text in texts {
        let tokens = tokenizer.tokenize(text);
        for word in content_words(&tokens, lexicon) {
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Most frequent first; ties broken by token order.
pub fn top_words(freqs: &BTreeMap<String, usize>, n: usize) -> Vec<(&str, usize)> {
    let mut sorted: Vec<(&str, usize)> = freqs.iter().map(|(w, c)| (w.as_str(), *c)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    sorted.truncate(n);
    sorted
}

/// Turns a frequency table into an artifact (image, data file, ...).
pub trait FrequencyRenderer {
    /// Render `freqs` under `name` and return where the artifact went.
    fn render(&self, name: &str, freqs: &BTreeMap<String, usize>) -> Result<PathBuf>;
}

#[derive(Serialize)]
struct WeightedWord<'a> {
    token: &'a str,
    count: usize,
}

/// Writes `<out_dir>/<name>.json`, a list of `{token, count}` sorted by count.
/// Feed it to any word-cloud renderer.
#[derive(Debug, Clone)]
pub struct JsonFrequencyRenderer {
    pub out_dir: PathBuf,
}

impl JsonFrequencyRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        JsonFrequencyRenderer {
            out_dir: out_dir.into(),
        }
    }
}

impl FrequencyRenderer for JsonFrequencyRenderer {
    fn render(&self, name: &str, freqs: &BTreeMap<String, usize>) -> Result<PathBuf> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("Failed to create directory: {}", self.out_dir.display()))?;
        let words: Vec<WeightedWord> = top_words(freqs, freqs.len())
            .into_iter()
            .map(|(token, count)| WeightedWord { token, count })
            .collect();
        let path = self.out_dir.join(format!("{}.json", name));
        let json = serde_json::to_string_pretty(&words)?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
