use std::{collections::HashSet, path::PathBuf};

use serde::Serialize;

/// A file or directory that contributed nothing because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedPath {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Outcome of extracting keys from a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Extracted { path: PathBuf, keys: HashSet<String> },
    Skipped(SkippedPath),
}

impl FileOutcome {
    /// Keys found in the file; empty for a skipped file.
    pub fn into_keys(self) -> HashSet<String> {
        match self {
            FileOutcome::Extracted { keys, .. } => keys,
            FileOutcome::Skipped(_) => HashSet::new(),
        }
    }
}

/// Aggregated result of one extraction run.
///
/// Built once per `process` call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    #[serde(serialize_with = "serialize_sorted")]
    keys: HashSet<String>,
    scanned_files: Vec<PathBuf>,
    skipped: Vec<SkippedPath>,
}

fn serialize_sorted<S: serde::Serializer>(
    keys: &HashSet<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut sorted: Vec<&String> = keys.iter().collect();
    sorted.sort();
    serializer.collect_seq(sorted)
}

impl ExtractionResult {
    pub fn new(
        keys: HashSet<String>,
        scanned_files: Vec<PathBuf>,
        skipped: Vec<SkippedPath>,
    ) -> Self {
        Self {
            keys,
            scanned_files,
            skipped,
        }
    }

    /// Merge per-file outcomes into a result.
    ///
    /// `scanned_files` keeps the finder's order; `finder_skipped` (unwalkable
    /// directories) come before unreadable files in `skipped`.
    pub fn from_outcomes(
        scanned_files: Vec<PathBuf>,
        outcomes: Vec<FileOutcome>,
        finder_skipped: Vec<SkippedPath>,
    ) -> Self {
        let mut keys = HashSet::new();
        let mut skipped = finder_skipped;

        for outcome in outcomes {
            match outcome {
                FileOutcome::Extracted { keys: file_keys, .. } => keys.extend(file_keys),
                FileOutcome::Skipped(s) => skipped.push(s),
            }
        }

        Self::new(keys, scanned_files, skipped)
    }

    pub fn keys(&self) -> &HashSet<String> {
        &self.keys
    }

    /// Keys in lexicographic order, for stable output.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn scanned_files(&self) -> &[PathBuf] {
        &self.scanned_files
    }

    pub fn skipped(&self) -> &[SkippedPath] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.scanned_files.is_empty()
    }
}
