//! Unified script execution interface and shared types.
//!
//! Defines [`ScriptExecutor`], the trait that each runtime executor
//! implements, along with [`ScriptOutput`] and [`ScriptError`].

use std::fmt;

/// Captured output from a script execution.
#[derive(Debug, Clone)]
pub struct ScriptOutput {
    /// Complete stdout captured from the process.
    pub stdout: String,
    /// Complete stderr captured from the process. Never shown on the page.
    pub stderr: String,
    /// Process exit code (`None` if killed by a signal).
    pub exit_code: Option<i32>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Errors that can occur before a script produces output.
#[derive(Debug)]
pub enum ScriptError {
    /// The submitted `type` does not name a known runtime. No process is
    /// spawned.
    UnsupportedType(String),
    /// The interpreter could not be spawned or waited on.
    IoError(std::io::Error),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType(kind) => write!(f, "Unknown script type: {kind}"),
            Self::IoError(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::UnsupportedType(_) => None,
        }
    }
}

/// Trait implemented by each script runtime executor.
///
/// An executor receives a file path, launches its interpreter on it, and
/// waits for the process to exit. There is no timeout.
pub trait ScriptExecutor: Send + Sync {
    /// Execute the script at `script_path`.
    fn execute(
        &self,
        script_path: &str,
    ) -> impl std::future::Future<Output = Result<ScriptOutput, ScriptError>> + Send;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
