//! Source file discovery.
//!
//! A [`FileFinder`] walks a root directory and returns the files a project type
//! cares about. Unreadable directories are recorded and skipped; they never abort
//! the walk.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::WalkDir;

use super::result::SkippedPath;
use crate::config::{Config, TEST_FILE_PATTERNS};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Files found under a root, plus whatever could not be walked.
#[derive(Debug, Default)]
pub struct FinderOutput {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedPath>,
}

pub trait FileFinder {
    /// Walk `root` and collect matching files in discovery order.
    fn scan(&self, root: &Path) -> FinderOutput;

    fn find_files_to_process(&self, root: &Path) -> Vec<PathBuf> {
        self.scan(root).files
    }
}

/// Finder for JavaScript/TypeScript sources.
#[derive(Debug, Clone)]
pub struct SourceFileFinder {
    extensions: Vec<String>,
    includes: Vec<String>,
    ignores: Vec<String>,
    ignore_test_files: bool,
}

pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

impl Default for SourceFileFinder {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            includes: Vec::new(),
            ignores: Vec::new(),
            ignore_test_files: false,
        }
    }
}

impl SourceFileFinder {
    pub fn from_config(config: &Config) -> Self {
        Self {
            extensions: config.extensions.clone(),
            includes: config.includes.clone(),
            ignores: config.ignores.clone(),
            ignore_test_files: config.ignore_test_files,
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }

    pub fn with_ignores(mut self, ignores: Vec<String>) -> Self {
        self.ignores = ignores;
        self
    }

    pub fn ignore_test_files(mut self, ignore: bool) -> Self {
        self.ignore_test_files = ignore;
        self
    }

    fn is_scannable_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Resolve `includes` into concrete directories under `root`.
    fn dirs_to_scan(&self, root: &Path, skipped: &mut Vec<SkippedPath>) -> Vec<PathBuf> {
        if self.includes.is_empty() {
            return vec![root.to_path_buf()];
        }

        let mut paths = Vec::new();
        for inc in &self.includes {
            if is_glob_pattern(inc) {
                let full_pattern = root.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => {
                        for entry in entries {
                            match entry {
                                Ok(path) if path.is_dir() => paths.push(path),
                                Ok(_) => {}
                                Err(e) => skipped
                                    .push(SkippedPath::new(e.path(), e.error().to_string())),
                            }
                        }
                    }
                    Err(e) => skipped.push(SkippedPath::new(
                        full_pattern,
                        format!("Invalid include pattern: {}", e),
                    )),
                }
            } else {
                let path = root.join(inc);
                if path.exists() {
                    paths.push(path);
                } else {
                    skipped.push(SkippedPath::new(path, "Include path does not exist"));
                }
            }
        }
        paths
    }
}

impl FileFinder for SourceFileFinder {
    fn scan(&self, root: &Path) -> FinderOutput {
        let mut output = FinderOutput::default();
        let mut seen: HashSet<PathBuf> = HashSet::new();

        // Separate ignore patterns into literal paths and glob patterns
        let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
        let mut glob_patterns: Vec<Pattern> = Vec::new();

        for p in &self.ignores {
            if is_glob_pattern(p) {
                // Config validation rejects bad patterns; a finder built by hand
                // just ignores them.
                if let Ok(pattern) = Pattern::new(p) {
                    glob_patterns.push(pattern);
                }
            } else {
                literal_ignore_paths.push(root.join(p));
            }
        }

        if self.ignore_test_files {
            glob_patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        for dir in self.dirs_to_scan(root, &mut output.skipped) {
            for entry in WalkDir::new(dir).sort_by_file_name() {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                        output.skipped.push(SkippedPath::new(path, e.to_string()));
                        continue;
                    }
                };
                let path = entry.path();

                if literal_ignore_paths
                    .iter()
                    .any(|ignore_path| path.starts_with(ignore_path))
                {
                    continue;
                }

                // Globs are relative to the root; the full path is tried too so
                // absolute patterns still apply.
                let relative = path.strip_prefix(root).unwrap_or(path);
                if glob_patterns
                    .iter()
                    .any(|p| p.matches_path(relative) || p.matches_path(path))
                {
                    continue;
                }

                if path.is_file() && self.is_scannable_file(path) {
                    let identity = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
                    if seen.insert(identity) {
                        output.files.push(path.to_path_buf());
                    }
                }
            }
        }

        output
    }
}
