//! Print submission via the local CUPS spooler
//!
//! Shells out to `lp` to hand the composed label to a named queue. The
//! job is submitted with no options and no wait for completion - the
//! spooler owns the job from there, exactly like the register-side
//! workflow expects.

use std::path::Path;
use std::process::Command;

/// Common installation paths for lp
#[cfg(windows)]
const LP_PATHS: &[&str] = &["lp"];

#[cfg(not(windows))]
const LP_PATHS: &[&str] = &["lp", "/usr/bin/lp", "/usr/local/bin/lp", "/opt/homebrew/bin/lp"];

/// Errors that can occur while submitting a print job
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("lp not found - is CUPS installed?")]
    SpoolerNotFound,

    #[error("Failed to run lp: {0}")]
    Spawn(std::io::Error),

    #[error("Print submission to queue '{queue}' failed: {message}")]
    Rejected { queue: String, message: String },
}

/// Find the lp executable, checking common installation paths.
///
/// Only spawnability is probed; lp has no version flag and its usage
/// text exits non-zero on some CUPS builds.
fn find_lp() -> Option<&'static str> {
    LP_PATHS
        .iter()
        .find(|&path| Command::new(path).arg("--help").output().is_ok())
        .map(|v| v as _)
}

/// Check if the print spooler is available (for `check-tools`)
pub fn is_spooler_available() -> bool {
    find_lp().is_some()
}

/// Dispatches composed labels to a named print queue.
pub struct PrintDispatcher {
    queue: String,
    job_title: String,
}

impl PrintDispatcher {
    /// Create a dispatcher for the given queue.
    pub fn new(queue: impl Into<String>, job_title: impl Into<String>) -> Self {
        Self {
            queue: queue.into(),
            job_title: job_title.into(),
        }
    }

    /// The queue this dispatcher submits to.
    pub fn queue(&self) -> &str {
        &self.queue
    }

    /// Submit `file` to the queue and return without waiting for the
    /// job to print.
    pub fn submit(&self, file: &Path) -> Result<(), PrintError> {
        let lp = find_lp().ok_or(PrintError::SpoolerNotFound)?;

        let output = Command::new(lp)
            .arg("-d")
            .arg(&self.queue)
            .arg("-t")
            .arg(&self.job_title)
            .arg(file)
            .output()
            .map_err(PrintError::Spawn)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PrintError::Rejected {
                queue: self.queue.clone(),
                message: stderr.trim().to_string(),
            });
        }

        // lp reports "request id is <queue>-<n>" on success
        let stdout = String::from_utf8_lossy(&output.stdout);
        tracing::info!("Submitted {:?} to {}: {}", file, self.queue, stdout.trim());
        Ok(())
    }
}
