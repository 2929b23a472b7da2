//! Dashboard route handler.
//!
//! Serves the embedded vis.js network frontend.

use axum::response::{Html, IntoResponse};

const DASHBOARD_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the graph visualization page.
pub async fn index() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}
