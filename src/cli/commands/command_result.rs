use super::super::{args::OutputFormat, exit_status::ExitStatus};
use crate::core::ExtractionResult;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Types(TypesSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub project_type: String,
    pub format: OutputFormat,
    /// True if a `.keysweeprc.json` was found, false if using defaults.
    pub config_from_file: bool,
    pub result: ExtractionResult,
}

#[derive(Debug)]
pub struct TypesSummary {
    pub project_types: Vec<&'static str>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running keysweep commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of files or directories that could not be read.
    pub skipped_count: usize,
    /// If true, exit code 1 should be returned when `skipped_count > 0`.
    pub fail_on_skipped: bool,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.fail_on_skipped && self.skipped_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
