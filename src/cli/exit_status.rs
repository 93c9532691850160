use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): The command completed
/// - `Failure` (1): `init` found an existing config file and left it alone
/// - `Error` (2): The command failed (missing input, missing column, unwritable output, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command completed.
    Success,
    /// `init` found an existing `.citylistrc.json`.
    Failure,
    /// The command failed.
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
