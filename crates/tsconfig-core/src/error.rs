//! Error taxonomy for the scaffolding flow

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Fatal conditions a scaffolding run can hit.
///
/// Every variant terminates the run; nothing is retried and no config file is
/// written once one of these surfaces. A declined overwrite is not an error
/// (see [`crate::scaffold::ScaffoldOutcome::Aborted`]).
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No package.json in the working directory.
    #[error("package.json not found at {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// package.json exists but is not valid JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Neither a `packageManager` pin nor a known lockfile identified a manager.
    #[error("could not detect a supported package manager (npm, pnpm, yarn)")]
    UnsupportedPackageManager,

    /// The package manager exited with a non-zero status.
    #[error("`{command}` failed: {status}")]
    InstallFailed { command: String, status: ExitStatus },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}
