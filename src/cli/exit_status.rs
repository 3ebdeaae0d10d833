use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Scan completed and the catalog was saved (also used by
///   the missing `--dir` usage path).
/// - `Error` (1): The run failed (bad marker, config error, save failure).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed due to an internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
