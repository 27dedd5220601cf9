mod analysis;
mod error;
mod input;
mod output;
mod parser;
mod review;
mod settings;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use analysis::{FrequencyRenderer, JsonFrequencyRenderer, Lexicon, ScriptTokenizer};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "review_extractor", about = "Extract app-store reviews from copy-pasted listing text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse pasted review text into a CSV (or JSON) table
    Parse {
        /// Input text files, `-` for stdin (default: settings `input`)
        inputs: Vec<PathBuf>,
        /// Output file (default: settings `output`)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// Score review sentiment and write token frequencies for word clouds
    Analyze {
        inputs: Vec<PathBuf>,
        /// JSON vocabulary file replacing the built-in lexicon
        #[arg(short, long)]
        lexicon: Option<PathBuf>,
        /// Directory for the frequency files (default: settings `out_dir`)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Top tokens to print
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,
    },
    /// Show per-file line and review counts
    Stats { inputs: Vec<PathBuf> },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = settings::Settings::load()?;

    let result = match cli.command {
        Commands::Parse {
            inputs,
            output,
            format,
        } => {
            let inputs = or_default_input(inputs, &settings.input);
            let reviews = extract_with_progress(&inputs)?;
            println!("parsed reviews: {}", reviews.len());

            let output = output.unwrap_or(settings.output);
            output::write_records_to_path(&output, &reviews, format)?;
            info!(path = %output.display(), %format, "wrote reviews");
            Ok(())
        }
        Commands::Analyze {
            inputs,
            lexicon,
            out_dir,
            top,
        } => {
            let inputs = or_default_input(inputs, &settings.input);
            let reviews = extract_with_progress(&inputs)?;
            if reviews.is_empty() {
                println!("No reviews found.");
                return Ok(());
            }

            let lexicon = match lexicon.or(settings.lexicon) {
                Some(path) => Lexicon::from_json_file(&path)?,
                None => Lexicon::default(),
            };
            let tokenizer = ScriptTokenizer::new();
            let renderer = JsonFrequencyRenderer::new(out_dir.unwrap_or(settings.out_dir));

            let report = analysis::classify_reviews(&reviews, &tokenizer, &lexicon);
            let mean = report.labels.iter().map(|(score, _)| *score).sum::<i64>() as f64
                / report.labels.len() as f64;
            println!("sentiment (mean score {:.2})", mean);
            for (label, count) in &report.counts {
                println!("  {}: {}", label, count);
            }

            let all = analysis::word_frequencies(
                reviews.iter().map(|r| r.content.as_str()),
                &tokenizer,
                &lexicon,
            );
            println!("\n--- Top {} tokens ---", top);
            for (word, count) in analysis::frequency::top_words(&all, top) {
                println!("  {:>5}  {}", count, word);
            }

            let pos = analysis::word_frequencies(report.positive.iter().copied(), &tokenizer, &lexicon);
            let neg = analysis::word_frequencies(report.negative.iter().copied(), &tokenizer, &lexicon);
            for (name, freqs) in [("wordcloud_all", &all), ("wordcloud_pos", &pos), ("wordcloud_neg", &neg)] {
                if freqs.is_empty() {
                    warn!("{}: no usable tokens", name);
                    continue;
                }
                let path = renderer.render(name, freqs)?;
                info!("saved {}", path.display());
            }
            Ok(())
        }
        Commands::Stats { inputs } => {
            let inputs = or_default_input(inputs, &settings.input);
            println!(
                "{:<24} | {:>6} | {:>6} | {:>7} | {:>7} | {:>7} | {:>7} | {:>7}",
                "File", "Lines", "Dates", "Votes", "Footers", "Blocks", "Reviews", "Helpful"
            );
            println!("{}", "-".repeat(92));
            for path in &inputs {
                let text = input::read_input(path)?;
                let (stats, blocks) = parser::inspect(&text)
                    .with_context(|| format!("Failed to parse reviews in {}", path.display()))?;
                let reviews: Vec<_> = blocks.iter().filter(|b| !b.is_publisher_reply()).collect();
                let helpful: u64 = reviews.iter().map(|b| b.record.helpful_votes).sum();
                let name = path
                    .file_name()
                    .unwrap_or(path.as_os_str())
                    .to_string_lossy();
                println!(
                    "{:<24} | {:>6} | {:>6} | {:>7} | {:>7} | {:>7} | {:>7} | {:>7}",
                    name,
                    stats.lines,
                    stats.date_lines,
                    stats.helpful_lines,
                    stats.terminators,
                    blocks.len(),
                    reviews.len(),
                    helpful
                );
            }
            Ok(())
        }
    };

    info!(elapsed = ?t0.elapsed(), "done");

    result
}

fn or_default_input(inputs: Vec<PathBuf>, default: &Path) -> Vec<PathBuf> {
    if inputs.is_empty() {
        vec![default.to_path_buf()]
    } else {
        inputs
    }
}

/// Parse all inputs, with a progress bar when there is more than one.
fn extract_with_progress(inputs: &[PathBuf]) -> Result<Vec<review::ReviewRecord>> {
    if inputs.len() == 1 {
        return input::extract_file(&inputs[0]);
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );
    let reviews = input::extract_files(inputs, || pb.inc(1));
    pb.finish_and_clear();
    reviews
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_used_when_none_given() {
        let d = Path::new("data/googleplay.txt");
        assert_eq!(or_default_input(vec![], d), vec![d.to_path_buf()]);
        let given = vec![PathBuf::from("a.txt")];
        assert_eq!(or_default_input(given.clone(), d), given);
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["review_extractor", "parse", "a.txt", "b.txt", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Parse { inputs, format, output } => {
                assert_eq!(inputs.len(), 2);
                assert_eq!(format, OutputFormat::Json);
                assert!(output.is_none());
            }
            _ => panic!("expected parse"),
        }
    }
}
