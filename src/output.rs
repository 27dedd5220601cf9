use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::review::{ReviewRecord, CSV_HEADER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Quote a field only when it needs it; embedded quotes are doubled.
fn csv_escape(v: &str) -> String {
    if v.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", v.replace('"', "\"\""))
    } else {
        v.to_string()
    }
}

fn write_csv_row<W: Write, S: AsRef<str>>(w: &mut W, fields: &[S]) -> std::io::Result<()> {
    let row: Vec<String> = fields.iter().map(|f| csv_escape(f.as_ref())).collect();
    write!(w, "{}\r\n", row.join(","))
}

pub fn write_csv<W: Write>(w: &mut W, reviews: &[ReviewRecord]) -> Result<()> {
    write_csv_row(w, &CSV_HEADER)?;
    for r in reviews {
        write_csv_row(w, &r.to_row())?;
    }
    Ok(())
}

pub fn write_json<W: Write>(w: &mut W, reviews: &[ReviewRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, reviews)?;
    writeln!(w)?;
    Ok(())
}

/// Write records to `path`, creating its parent directory first.
pub fn write_records_to_path(path: &Path, reviews: &[ReviewRecord], format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut w = BufWriter::new(file);
    match format {
        OutputFormat::Csv => write_csv(&mut w, reviews)?,
        OutputFormat::Json => write_json(&mut w, reviews)?,
    }
    w.flush()?;
    Ok(())
}
