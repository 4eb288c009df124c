use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed
/// - `Failure` (1): Command refused to act (e.g. `init` over an existing file)
/// - `Error` (2): Command failed (missing root path, malformed YAML, I/O error, etc.)
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
