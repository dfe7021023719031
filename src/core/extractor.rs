//! Translation key extraction.
//!
//! Extraction is pattern based: source text is flattened to one line and
//! scanned for calls to known translate functions whose first argument is a
//! single quoted string literal. Identifiers, concatenations and template
//! literals are never resolved.

use std::{
    collections::HashSet,
    path::Path,
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;

use super::{
    loader::{normalize_to_single_line, read_content},
    result::{FileOutcome, SkippedPath},
};

/// Call names recognized when none are configured.
pub const DEFAULT_CALL_NAMES: &[&str] = &["t", "i18next.t"];

static DEFAULT_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| build_call_regex(DEFAULT_CALL_NAMES).unwrap());

/// Reject call names that could never appear as a call expression.
pub fn validate_call_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("call name must not be empty");
    }
    if name.chars().any(char::is_whitespace) {
        bail!("call name must not contain whitespace: \"{}\"", name);
    }
    if name.starts_with('.') || name.ends_with('.') || name.contains("..") {
        bail!("call name has an empty segment: \"{}\"", name);
    }
    Ok(())
}

/// Build one regex matching `<name>( '<key>'` for any of `names`.
///
/// Capture group 1 holds single-quoted keys, group 2 double-quoted keys.
fn build_call_regex<S: AsRef<str>>(names: &[S]) -> Result<Regex> {
    if names.is_empty() {
        bail!("at least one call name is required");
    }

    let mut alternatives = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        validate_call_name(name)?;
        alternatives.push(regex::escape(name));
    }
    // Longest first so `i18next.t` wins over a shorter overlapping name.
    alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let pattern = format!(
        r#"(?:^|[^\w$.])(?:{})\s*\(\s*(?:'([^']+)'|"([^"]+)")"#,
        alternatives.join("|")
    );
    Regex::new(&pattern).with_context(|| format!("Failed to compile call pattern: {}", pattern))
}

pub trait KeyExtractor {
    /// Keys referenced in already loaded source text.
    fn extract_keys_from_text(&self, text: &str) -> HashSet<String>;

    /// Load a file and extract its keys, keeping the reason when it cannot be read.
    fn extract_outcome(&self, path: &Path) -> FileOutcome {
        match read_content(path) {
            Ok(content) => FileOutcome::Extracted {
                path: path.to_path_buf(),
                keys: self.extract_keys_from_text(&content),
            },
            Err(e) => FileOutcome::Skipped(SkippedPath::new(path, format!("{:#}", e))),
        }
    }

    /// Keys referenced by a file; an unreadable file yields an empty set.
    fn extract_keys_from_file(&self, path: &Path) -> HashSet<String> {
        self.extract_outcome(path).into_keys()
    }
}

/// Extractor for the i18next `t('key')` calling convention.
#[derive(Debug, Clone)]
pub struct I18nextKeyExtractor {
    call_regex: Regex,
}

impl Default for I18nextKeyExtractor {
    fn default() -> Self {
        Self {
            call_regex: DEFAULT_CALL_REGEX.clone(),
        }
    }
}

impl I18nextKeyExtractor {
    /// Extractor recognizing exactly `call_names` (e.g. `t`, `i18n.t`).
    pub fn with_call_names<S: AsRef<str>>(call_names: &[S]) -> Result<Self> {
        Ok(Self {
            call_regex: build_call_regex(call_names)?,
        })
    }
}

impl KeyExtractor for I18nextKeyExtractor {
    fn extract_keys_from_text(&self, text: &str) -> HashSet<String> {
        let line = normalize_to_single_line(text);
        self.call_regex
            .captures_iter(&line)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
