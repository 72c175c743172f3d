//! Python script executor.
//!
//! Runs `<interpreter> <script>` and captures the output.

use tokio::process::Command;

use super::executor::{ScriptError, ScriptExecutor, ScriptOutput};
use super::subprocess;

/// Interpreter used when none is configured.
pub const DEFAULT_PYTHON_BIN: &str = "python";

/// Executor for Python scripts.
#[derive(Debug, Clone)]
pub struct PythonExecutor {
    /// Program name or path of the Python interpreter.
    interpreter: String,
}

impl PythonExecutor {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Build the launch command: the script path is the sole argument.
    pub fn command(&self, script_path: &str) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(script_path);
        cmd
    }
}

impl Default for PythonExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON_BIN)
    }
}

impl ScriptExecutor for PythonExecutor {
    async fn execute(&self, script_path: &str) -> Result<ScriptOutput, ScriptError> {
        let mut cmd = self.command(script_path);
        subprocess::run_command(&mut cmd).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
