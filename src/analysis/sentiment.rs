use serde::Serialize;

use super::{Lexicon, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Sentiment {
    #[serde(rename = "pos")]
    Positive,
    #[serde(rename = "neg")]
    Negative,
    #[serde(rename = "neu")]
    Neutral,
}

impl Sentiment {
    pub fn from_score(score: i64) -> Self {
        if score >= 1 {
            Sentiment::Positive
        } else if score <= -1 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "pos",
            Sentiment::Negative => "neg",
            Sentiment::Neutral => "neu",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sum of token polarities. Every surface counts, including repeats.
pub fn sentiment_score(tokens: &[Token], lexicon: &Lexicon) -> i64 {
    tokens.iter().map(|t| lexicon.polarity(&t.surface)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PartOfSpeech;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(*w, PartOfSpeech::Other)).collect()
    }

    #[test]
    fn labels() {
        assert_eq!(Sentiment::from_score(3), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(1), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-1), Sentiment::Negative);
        assert_eq!(Sentiment::Neutral.to_string(), "neu");
    }

    #[test]
    fn scores() {
        let lex = Lexicon::default();
        assert_eq!(sentiment_score(&tokens(&["便利", "です"]), &lex), 1);
        assert_eq!(sentiment_score(&tokens(&["便利", "だけど", "バグ", "多い", "バグ"]), &lex), -1);
        assert_eq!(sentiment_score(&[], &lex), 0);
    }

    #[test]
    fn stopwords_do_not_affect_score() {
        let lex = Lexicon::default();
        assert_eq!(sentiment_score(&tokens(&["アプリ", "ZOZO"]), &lex), 0);
    }
}
