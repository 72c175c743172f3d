//! Script runtime types.
//!
//! The `type` field of a catalog entry is kept as a raw string and only
//! resolved to a [`ScriptType`] when the script is about to run, so an
//! unknown value surfaces as a per-request error rather than at startup.

use std::fmt;
use std::str::FromStr;

use crate::scripting::executor::ScriptError;

/// Python runtime (executed via the configured python interpreter).
pub const SCRIPT_TYPE_PYTHON: &str = "python";

/// PowerShell runtime (executed with `-ExecutionPolicy Bypass -File`).
pub const SCRIPT_TYPE_POWERSHELL: &str = "powershell";

/// The closed set of runtimes a catalog entry may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptType {
    Python,
    PowerShell,
}

impl ScriptType {
    /// The identifier used in configuration and form submissions.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => SCRIPT_TYPE_PYTHON,
            Self::PowerShell => SCRIPT_TYPE_POWERSHELL,
        }
    }
}

impl FromStr for ScriptType {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SCRIPT_TYPE_PYTHON => Ok(Self::Python),
            SCRIPT_TYPE_POWERSHELL => Ok(Self::PowerShell),
            other => Err(ScriptError::UnsupportedType(other.to_string())),
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
