//! Route definitions for the script dashboard.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes mounted at the root.
///
/// ```text
/// GET    /?tab=<group>              -> index
/// POST   /run                       -> run_script
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/run", post(dashboard::run_script))
}
