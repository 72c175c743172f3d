//! Handlers for the script dashboard page.
//!
//! Both endpoints answer with the full HTML page. A script run never turns
//! into an HTTP error: its outcome, good or bad, becomes the page message.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::page::render_page;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Form body submitted by a script button.
#[derive(Debug, Deserialize)]
pub struct RunScriptForm {
    /// Script path as configured.
    pub path: String,
    /// Runtime identifier (`python` or `powershell`).
    #[serde(rename = "type")]
    pub script_type: String,
    /// Tab to re-render after the run.
    pub tab: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
///
/// Render the scripts of the requested (or default) tab. When `tab` is
/// repeated, the first value wins.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Html<String> {
    let requested = params
        .into_iter()
        .find(|(key, _)| key == "tab")
        .map(|(_, value)| value);
    let catalog = &state.config.catalog;
    let active_tab = catalog.resolve_tab(requested.as_deref());
    Html(render_page(catalog, active_tab, None))
}

/// POST /run
///
/// Run the submitted script, wait for it, and render the submitted tab with
/// the outcome.
pub async fn run_script(
    State(state): State<AppState>,
    Form(form): Form<RunScriptForm>,
) -> Html<String> {
    tracing::info!(path = %form.path, script_type = %form.script_type, "Button clicked");

    let result = state
        .orchestrator
        .run_script(&form.path, &form.script_type)
        .await;

    let catalog = &state.config.catalog;
    let active_tab = catalog.resolve_tab(form.tab.as_deref());
    Html(render_page(catalog, active_tab, Some(&result.display_text)))
}
