#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use console_api::config::ServerConfig;
use console_api::router::build_app_router;
use console_api::state::AppState;
use console_core::catalog::{Catalog, ScriptEntry};

/// Build a catalog entry.
pub fn entry(label: &str, path: &str, kind: &str, group: &str) -> ScriptEntry {
    ScriptEntry {
        label: label.to_string(),
        path: path.to_string(),
        kind: kind.to_string(),
        group: group.to_string(),
    }
}

/// Build a test `ServerConfig` around the given scripts.
///
/// Groups are `ops` then `daily_tasks`, the default tab is `ops`, and `sh`
/// stands in for the Python interpreter so tests do not need Python
/// installed.
pub fn test_config(scripts: Vec<ScriptEntry>) -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        debug: false,
        python_bin: "sh".to_string(),
        powershell_bin: "no-such-powershell-host-4821".to_string(),
        catalog: Catalog {
            scripts,
            groups: vec!["ops".to_string(), "daily_tasks".to_string()],
            default_tab: "ops".to_string(),
        },
    }
}

/// Build the full application router, mirroring `main.rs`.
pub fn build_test_app(scripts: Vec<ScriptEntry>) -> Router {
    build_app_router(AppState::new(test_config(scripts)))
}

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a urlencoded form POST to `uri`.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract the labels of the script buttons on a rendered page, in order.
pub fn button_labels(html: &str) -> Vec<String> {
    html.split("<button type=\"submit\">")
        .skip(1)
        .filter_map(|rest| rest.split("</button>").next())
        .map(str::to_string)
        .collect()
}

/// Extract the display text of the tab marked active, if any.
pub fn active_tab(html: &str) -> Option<String> {
    let rest = html.split("class=\"tab active\">").nth(1)?;
    rest.split("</a>").next().map(str::to_string)
}
