use std::sync::Arc;

use crate::config::ServerConfig;
use crate::scripting::orchestrator::ScriptOrchestrator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the script catalog.
    pub config: Arc<ServerConfig>,
    /// Runs submitted scripts.
    pub orchestrator: Arc<ScriptOrchestrator>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let orchestrator = ScriptOrchestrator::from_config(&config);
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
        }
    }
}
