use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed (skipped files are tolerated)
/// - `Failure` (1): `--strict` was given and some paths could not be read
/// - `Error` (2): Command failed (unknown project type, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
