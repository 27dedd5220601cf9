use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::parser;
use crate::review::ReviewRecord;

/// Read a pasted review listing as UTF-8. `-` reads stdin.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

pub fn extract_file(path: &Path) -> Result<Vec<ReviewRecord>> {
    let text = read_input(path)?;
    parser::extract_reviews(&text).with_context(|| format!("Failed to parse reviews in {}", path.display()))
}

/// Extract every input in parallel. Results keep input order; the first
/// failing input aborts the whole run.
pub fn extract_files(paths: &[PathBuf], on_done: impl Fn() + Sync) -> Result<Vec<ReviewRecord>> {
    let per_file: Vec<Result<Vec<ReviewRecord>>> = paths
        .par_iter()
        .map(|p| {
            let r = extract_file(p);
            on_done();
            r
        })
        .collect();

    let mut reviews = Vec::new();
    for r in per_file {
        reviews.extend(r?);
    }
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    const ONE_REVIEW: &str = "山田太郎\n2025年11月25日\n良い\n役に立ちましたか？\n";

    #[test]
    fn read_missing_file() {
        let err = read_input(Path::new("/nonexistent/googleplay.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn extract_fixture_file() {
        let reviews = extract_file(Path::new("tests/fixtures/googleplay.txt")).unwrap();
        assert_eq!(reviews.len(), 3);
    }

    #[test]
    fn invalid_date_error_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.txt");
        fs::write(&path, "山田太郎\n2025年13月01日\n本文\n役に立ちましたか？\n").unwrap();
        let err = extract_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("bad.txt"));
        assert!(format!("{:#}", err).contains("invalid calendar date"));
    }

    #[test]
    fn many_files_keep_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for (i, author) in ["一", "二", "三", "四"].iter().enumerate() {
            let path = temp_dir.path().join(format!("{}.txt", i));
            fs::write(&path, ONE_REVIEW.replace("山田太郎", author)).unwrap();
            paths.push(path);
        }
        let done = AtomicUsize::new(0);
        let reviews = extract_files(&paths, || {
            done.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();
        let authors: Vec<&str> = reviews.iter().map(|r| r.author.as_str()).collect();
        assert_eq!(authors, vec!["一", "二", "三", "四"]);
        assert_eq!(done.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn one_bad_file_fails_run() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.txt");
        fs::write(&good, ONE_REVIEW).unwrap();
        let missing = temp_dir.path().join("missing.txt");
        assert!(extract_files(&[good, missing], || {}).is_err());
    }
}
