//! Async `javac` invocation with timeout.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Ways a metadata probe can fail.
///
/// None of these reach the caller of [`detect`](crate::detect); they are
/// logged and the affected fields stay `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProbeError {
    /// The process did not finish within the configured timeout.
    Timeout,

    /// The executable exists but could not be run due to permissions.
    PermissionDenied,

    /// Any other failure to spawn or wait for the process.
    Io,

    /// The process exited unsuccessfully (code is `None` if killed by a signal).
    ExitStatus(Option<i32>),

    /// Output was not valid UTF-8.
    InvalidOutput,

    /// Output did not contain the expected information.
    ParseFailed,
}

impl ProbeError {
    /// Human-readable description of the error.
    pub(crate) fn description(&self) -> &'static str {
        match self {
            Self::Timeout => "Probe timed out",
            Self::PermissionDenied => "Permission denied",
            Self::Io => "I/O error while running probe",
            Self::ExitStatus(_) => "Probe exited with failure status",
            Self::InvalidOutput => "Probe output was not valid UTF-8",
            Self::ParseFailed => "Failed to parse probe output",
        }
    }
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExitStatus(Some(code)) => write!(f, "{} (code {})", self.description(), code),
            _ => f.write_str(self.description()),
        }
    }
}

/// Run `javac` with `args` and capture its combined output.
///
/// Old compilers print their version on stderr and newer ones on stdout, so
/// stdout and stderr are concatenated in that order. The child is killed if
/// the timeout expires.
///
/// # Returns
///
/// `Ok(String)` with the combined output, or a `ProbeError`:
/// - `Timeout` if the command takes longer than `limit`
/// - `PermissionDenied` if the executable cannot be run due to permissions
/// - `Io` for other spawn or wait failures
/// - `ExitStatus` for non-zero exit codes
/// - `InvalidOutput` if the output is not valid UTF-8
pub(crate) async fn run_javac(
    javac: &Path,
    args: &[&str],
    limit: Duration,
) -> Result<String, ProbeError> {
    let mut command = Command::new(javac);
    command
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = timeout(limit, command.output())
        .await
        .map_err(|_| ProbeError::Timeout)?
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                ProbeError::PermissionDenied
            } else {
                ProbeError::Io
            }
        })?;

    if !output.status.success() {
        return Err(ProbeError::ExitStatus(output.status.code()));
    }

    let mut combined = output.stdout;
    combined.extend_from_slice(&output.stderr);

    String::from_utf8(combined).map_err(|_| ProbeError::InvalidOutput)
}
