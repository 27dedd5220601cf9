use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

const DEFAULT_INPUT: &str = "data/googleplay.txt";
const DEFAULT_OUTPUT: &str = "data/googleplay.csv";

/// Settings from `reviews.toml` and `REVIEWS_*` env vars. CLI flags win.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub out_dir: PathBuf,
    pub lexicon: Option<PathBuf>,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("reviews").required(false))
                .add_source(Environment::with_prefix("REVIEWS")),
        )
    }

    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        builder
            .set_default("input", DEFAULT_INPUT)?
            .set_default("output", DEFAULT_OUTPUT)?
            .set_default("out_dir", ".")?
            .build()
            .context("Failed to load settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::from_builder(Config::builder()).unwrap();
        assert_eq!(s.input, PathBuf::from("data/googleplay.txt"));
        assert_eq!(s.output, PathBuf::from("data/googleplay.csv"));
        assert_eq!(s.out_dir, PathBuf::from("."));
        assert!(s.lexicon.is_none());
    }

    #[test]
    fn overrides() {
        let builder = Config::builder()
            .set_override("output", "out/reviews.csv")
            .unwrap()
            .set_override("lexicon", "lexicon.json")
            .unwrap();
        let s = Settings::from_builder(builder).unwrap();
        assert_eq!(s.output, PathBuf::from("out/reviews.csv"));
        assert_eq!(s.lexicon, Some(PathBuf::from("lexicon.json")));
        assert_eq!(s.input, PathBuf::from("data/googleplay.txt"));
    }
}
