//! Full-graph route handler.

use axum::{extract::State, http::StatusCode, Json};

use lendgraph_core::VizGraph;

use crate::routes::error_response;
use crate::state::AppState;

/// GET /api/graph - All nodes and edges in vis.js Network format.
pub async fn get_graph(
    State(state): State<AppState>,
) -> Result<Json<VizGraph>, (StatusCode, String)> {
    let graph = lendgraph_graph::queries::graph::fetch_viz_graph(&state.graph)
        .await
        .map_err(error_response)?;

    Ok(Json(graph))
}
