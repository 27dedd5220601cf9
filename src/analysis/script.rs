use std::sync::LazyLock;

use regex::Regex;

use super::{PartOfSpeech, Token, Tokenizer};

// Okurigana never starts with a particle. Adjective tails never contain な
// (keeps 起動しない as 起動 + しない).
static RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<adj>\p{Han}+(?:[\p{Hiragana}--[なはがをにもでとのて]][\p{Hiragana}--な]{0,3})?い)",
        r"|(?P<verb>\p{Han}+[\p{Hiragana}--[なはがをにもでとのてす]]?る)",
        r"|(?P<han>\p{Han}+)",
        r"|(?P<kana>[\p{Katakana}ー]+)",
        r"|(?P<latin>[\p{Latin}0-9]+)",
        r"|(?P<hira>\p{Hiragana}+)",
    ))
    .unwrap()
});

/// Splits Japanese text into same-script runs.
///
/// A kanji run keeps a short okurigana tail when it ends in `い` (adjective,
/// `使いやすい`) or `る` (verb, `助かる`). Other kanji, katakana and latin
/// runs come out as nouns, hiragana runs as `Other`. Punctuation and symbols
/// are dropped. Without a dictionary this is a heuristic: `使います` yields
/// `使い` tagged as an adjective.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptTokenizer;

impl ScriptTokenizer {
    pub fn new() -> Self {
        ScriptTokenizer
    }
}

impl Tokenizer for ScriptTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        RUN_RE
            .captures_iter(text)
            .map(|caps| {
                let pos = if caps.name("adj").is_some() {
                    PartOfSpeech::Adjective
                } else if caps.name("verb").is_some() {
                    PartOfSpeech::Verb
                } else if caps.name("hira").is_some() {
                    PartOfSpeech::Other
                } else {
                    PartOfSpeech::Noun
                };
                Token::new(&caps[0], pos)
            })
            .collect()
    }
}
