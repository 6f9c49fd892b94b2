use std::process::ExitCode;

/// What the process reports back after a scan.
///
/// - `Success` (0): every file scanned, nothing flagged
/// - `Failure` (1): the scan finished but produced warnings
/// - `Error` (2): the run never completed (bad config, usage error)
///
/// A file that could not be opened does not raise `Error`: it scans as
/// empty and only its own summary reflects that, so a batch with one bad
/// path can still exit 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Collapse the warning total of a finished scan into an exit status.
    pub fn from_warning_count(warnings: usize) -> Self {
        if warnings > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
