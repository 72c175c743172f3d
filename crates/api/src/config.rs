use std::net::IpAddr;
use std::path::{Path, PathBuf};

use console_core::catalog::{Catalog, DEFAULT_TAB_KEY, GROUPS_KEY, SCRIPTS_KEY};
use console_core::error::ConfigError;
use console_core::scripting::powershell::DEFAULT_POWERSHELL_BIN;
use console_core::scripting::python::DEFAULT_PYTHON_BIN;

/// Server configuration loaded from environment variables.
///
/// The script catalog settings are required; everything else has a default
/// suitable for a dashboard bound to the local machine.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: IpAddr,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Verbose logging (default: `false`).
    pub debug: bool,
    /// Interpreter for `python` entries (default: `python`).
    pub python_bin: String,
    /// Interpreter for `powershell` entries (default: `powershell`).
    pub powershell_bin: String,
    /// Scripts, tab order, and default tab.
    pub catalog: Catalog,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var          | Default      |
    /// |------------------|--------------|
    /// | `SCRIPTS_JSON`   | required     |
    /// | `GROUPS`         | required     |
    /// | `ACTIVE_TAB`     | required     |
    /// | `HOST`           | `127.0.0.1`  |
    /// | `PORT`           | `5000`       |
    /// | `DEBUG`          | `false`      |
    /// | `PYTHON_BIN`     | `python`     |
    /// | `POWERSHELL_BIN` | `powershell` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog = Catalog::from_settings(
            lookup(SCRIPTS_KEY).as_deref(),
            lookup(GROUPS_KEY).as_deref(),
            lookup(DEFAULT_TAB_KEY).as_deref(),
        )?;

        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|e| ConfigError::Malformed {
                key: "HOST",
                reason: e.to_string(),
            })?,
            None => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Malformed {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => 5000,
        };

        let debug = lookup("DEBUG").is_some_and(|v| is_truthy(&v));

        let python_bin = lookup("PYTHON_BIN")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PYTHON_BIN.into());
        let powershell_bin = lookup("POWERSHELL_BIN")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_POWERSHELL_BIN.into());

        Ok(Self {
            host,
            port,
            debug,
            python_bin,
            powershell_bin,
            catalog,
        })
    }
}

/// Load a `.env` file into the process environment, letting its values
/// replace variables that are already set.
///
/// With no explicit path, `.env` is searched for from the current directory
/// upwards. Returns the file that was loaded, or `None` when there was none.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(p) => dotenvy::from_path_override(p).ok().map(|()| p.to_path_buf()),
        None => dotenvy::dotenv_override().ok(),
    }
}

/// Interpret a flag value the way shell-style config files usually do.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "t" | "yes" | "y" | "on"
    )
}
