use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{config::Config, core::SkippedPath};

// ============================================================
// Parameter Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExtractKeysParams {
    /// Absolute path to the directory to scan
    pub project_root_path: String,
    /// Project type identifier, e.g. "i18next/i18next" (default: from config)
    pub project_type: Option<String>,
    /// Maximum number of keys to return (default: 100, max: 500)
    pub limit: Option<u32>,
    /// Number of keys to skip (default: 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetConfigParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
}

// ============================================================
// Result Types
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

/// A path that could not be read during extraction.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkippedItem {
    pub path: String,
    pub reason: String,
}

impl From<&SkippedPath> for SkippedItem {
    fn from(s: &SkippedPath) -> Self {
        Self {
            path: s.path.to_string_lossy().to_string(),
            reason: s.reason.clone(),
        }
    }
}

/// Result of extract_keys operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractKeysResult {
    pub project_type: String,
    pub total_key_count: usize,
    pub scanned_file_count: usize,
    pub skipped: Vec<SkippedItem>,
    /// Sorted keys for the requested page
    pub keys: Vec<String>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTypesResult {
    pub project_types: Vec<String>,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub project_type: String,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub extensions: Vec<String>,
    pub call_names: Vec<String>,
    pub ignore_test_files: bool,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            project_type: c.project_type,
            includes: c.includes,
            ignores: c.ignores,
            extensions: c.extensions,
            call_names: c.call_names,
            ignore_test_files: c.ignore_test_files,
        }
    }
}
