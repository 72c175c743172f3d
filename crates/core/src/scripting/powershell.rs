//! PowerShell script executor.
//!
//! Runs `<interpreter> -ExecutionPolicy Bypass -File <script>` so that
//! unsigned local scripts are allowed to run.

use tokio::process::Command;

use super::executor::{ScriptError, ScriptExecutor, ScriptOutput};
use super::subprocess;

/// Interpreter used when none is configured.
pub const DEFAULT_POWERSHELL_BIN: &str = "powershell";

/// Executor for PowerShell scripts.
#[derive(Debug, Clone)]
pub struct PowerShellExecutor {
    /// Program name or path of the PowerShell host (`powershell`, `pwsh`, ...).
    interpreter: String,
}

impl PowerShellExecutor {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Build the launch command with the execution policy bypassed.
    pub fn command(&self, script_path: &str) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.args(["-ExecutionPolicy", "Bypass", "-File", script_path]);
        cmd
    }
}

impl Default for PowerShellExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_POWERSHELL_BIN)
    }
}

impl ScriptExecutor for PowerShellExecutor {
    async fn execute(&self, script_path: &str) -> Result<ScriptOutput, ScriptError> {
        let mut cmd = self.command(script_path);
        subprocess::run_command(&mut cmd).await
    }
}
