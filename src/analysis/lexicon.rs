use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const STOPWORDS: &[&str] = &[
    "アプリ", "WEAR", "wear", "ゾゾ", "ZOZOTOWN", "ZOZO",
    "です", "ます", "する", "いる", "ある", "こと",
    "これ", "それ", "ため", "よう", "とても", "なっ",
    "でき", "できない", "ない", "さん", "なる",
    "使う", "使っ", "使い", "思う", "思っ", "感じ",
    "方", "人", "自分", "今回", "最近", "もの", "ところ",
    "欲しい", "ほしい", "しまっ", "下さい", "ください", "しまう", "アイテム",
    "コーデ", "コーディネート", "ファッション", "服", "洋服",
];

const POSITIVE: &[&str] = &[
    "良い", "いい", "便利", "助かる", "最高", "好き",
    "使いやすい", "見やすい", "参考", "楽しい", "お気に入り",
    "ありがたい", "満足", "助かって", "役立つ", "オシャレ",
    "可愛い", "見やすく", "使いやすく", "楽しく",
    "かわいい", "カッコいい", "かっこいい", "おしゃれ", "分かりやすい",
];

const NEGATIVE: &[&str] = &[
    "悪い", "微妙", "最悪", "ダメ", "嫌い",
    "使いづらい", "使いにくい", "見づらい", "重い", "落ちる",
    "エラー", "バグ", "フリーズ", "開けない", "起動", "ログインできない",
    "改悪", "鬱陶しい", "邪魔", "イライラ", "困る", "不便",
    "うざい", "壊れて", "強制終了", "エラーメッセージ",
    "ブス", "ひどい", "わからない", "分かりにくい",
];

/// Fixed vocabularies for word clouds and polarity scoring.
///
/// Passed explicitly to the functions that need it; nothing reads a global.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub stopwords: HashSet<String>,
    #[serde(default)]
    pub positive: HashSet<String>,
    #[serde(default)]
    pub negative: HashSet<String>,
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            stopwords: to_set(STOPWORDS),
            positive: to_set(POSITIVE),
            negative: to_set(NEGATIVE),
        }
    }
}

impl Lexicon {
    /// Load vocabularies from a JSON object with `stopwords`, `positive` and
    /// `negative` string arrays. Missing keys are empty.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon: {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("Invalid lexicon JSON: {}", path.display()))
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// +1 for a positive word, -1 for a negative one, 0 if both or neither.
    pub fn polarity(&self, word: &str) -> i64 {
        i64::from(self.positive.contains(word)) - i64::from(self.negative.contains(word))
    }
}
