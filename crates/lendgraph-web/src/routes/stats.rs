//! Stats route handler.

use axum::{extract::State, http::StatusCode, Json};

use lendgraph_core::GraphStats;

use crate::routes::error_response;
use crate::state::AppState;

/// GET /api/stats - Summary counts and totals.
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<GraphStats>, (StatusCode, String)> {
    let stats = lendgraph_graph::queries::stats::fetch_stats(&state.graph)
        .await
        .map_err(error_response)?;

    Ok(Json(stats))
}
