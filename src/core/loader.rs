//! Content loading and single-line normalization.
//!
//! Paths handed to the loader may be percent-encoded (e.g. `my%20file.ts`) when
//! they were serialized as URIs by an earlier step. They are decoded before the
//! filesystem is touched.

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, anyhow};
use percent_encoding::percent_decode_str;
use regex::Regex;

static LINE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());
static WHITESPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Decode percent-encoded segments of a path.
///
/// `+` is left untouched; it is a legal file name character.
pub fn decode_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let decoded = percent_decode_str(&raw)
        .decode_utf8()
        .map_err(|e| anyhow!("Path is not valid UTF-8 after decoding: {}", e))?;

    Ok(match decoded {
        // Nothing was decoded: keep the original (possibly non-UTF-8) path.
        Cow::Borrowed(_) => path.to_path_buf(),
        Cow::Owned(s) => PathBuf::from(s),
    })
}

/// Read a file as UTF-8 text after decoding its path.
pub fn read_content(path: &Path) -> Result<String> {
    let decoded = decode_path(path)?;
    fs::read_to_string(&decoded)
        .with_context(|| format!("Failed to read file: {}", decoded.display()))
}

/// Read a file, degrading every failure to an empty string.
pub fn try_read_content(path: &Path) -> String {
    read_content(path).unwrap_or_default()
}

/// Flatten text into a single line: line breaks become spaces, then every
/// whitespace run collapses into one space.
pub fn normalize_to_single_line(text: &str) -> String {
    let flattened = LINE_BREAK_REGEX.replace_all(text, " ");
    WHITESPACE_RUN_REGEX
        .replace_all(&flattened, " ")
        .into_owned()
}
