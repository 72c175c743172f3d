//! Central script orchestrator service.
//!
//! Resolves the submitted runtime type, dispatches to the matching executor,
//! and turns the outcome into the text shown on the page. Held in
//! [`AppState`](crate::state::AppState) as an `Arc<ScriptOrchestrator>`.

use console_core::script_types::ScriptType;
use console_core::scripting::executor::{ScriptError, ScriptExecutor, ScriptOutput};
use console_core::scripting::powershell::PowerShellExecutor;
use console_core::scripting::python::PythonExecutor;

use crate::config::ServerConfig;

/// Shown in place of stdout when a script prints nothing.
pub const NO_OUTPUT_PLACEHOLDER: &str = "No output";

/// Outcome of one run, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// `false` when the script could not be launched at all.
    pub succeeded: bool,
    /// Message rendered below the buttons.
    pub display_text: String,
}

impl ExecutionResult {
    /// A run that reached process exit. The exit code does not matter here.
    pub fn completed(path: &str, output: &ScriptOutput) -> Self {
        let stdout = output.stdout.trim();
        let body = if stdout.is_empty() {
            NO_OUTPUT_PLACEHOLDER
        } else {
            stdout
        };
        Self {
            succeeded: true,
            display_text: format!("{path} executed successfully.\n\n{body}"),
        }
    }

    /// A run that never produced a process, or whose process could not be
    /// waited on.
    pub fn failed(path: &str, err: &ScriptError) -> Self {
        Self {
            succeeded: false,
            display_text: format!("Error running {path}: {err}"),
        }
    }
}

/// Dispatches script runs to the Python and PowerShell executors.
///
/// Stateless apart from the interpreter names; safe to share across
/// concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ScriptOrchestrator {
    python_executor: PythonExecutor,
    powershell_executor: PowerShellExecutor,
}

impl ScriptOrchestrator {
    pub fn new(python_executor: PythonExecutor, powershell_executor: PowerShellExecutor) -> Self {
        Self {
            python_executor,
            powershell_executor,
        }
    }

    /// Build an orchestrator using the interpreters named in `config`.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            PythonExecutor::new(config.python_bin.clone()),
            PowerShellExecutor::new(config.powershell_bin.clone()),
        )
    }

    /// Run the script at `path` as the runtime named by `script_type`.
    ///
    /// Never fails: launch errors and unknown types are folded into the
    /// returned message. The call waits for the child to exit.
    pub async fn run_script(&self, path: &str, script_type: &str) -> ExecutionResult {
        match self.dispatch(path, script_type).await {
            Ok(output) => {
                tracing::debug!(
                    path,
                    exit_code = ?output.exit_code,
                    duration_ms = output.duration_ms,
                    stderr = %output.stderr.trim(),
                    "Script finished"
                );
                if output.exit_code != Some(0) {
                    tracing::warn!(
                        path,
                        exit_code = ?output.exit_code,
                        "Script exited with failure status"
                    );
                }
                ExecutionResult::completed(path, &output)
            }
            Err(err) => {
                tracing::warn!(path, script_type, error = %err, "Script could not be run");
                ExecutionResult::failed(path, &err)
            }
        }
    }

    async fn dispatch(&self, path: &str, script_type: &str) -> Result<ScriptOutput, ScriptError> {
        match script_type.parse::<ScriptType>()? {
            ScriptType::Python => self.python_executor.execute(path).await,
            ScriptType::PowerShell => self.powershell_executor.execute(path).await,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
