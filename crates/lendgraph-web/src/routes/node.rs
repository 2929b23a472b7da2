//! Node detail route handler.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use lendgraph_core::{Label, NodeDetail};

use crate::routes::error_response;
use crate::state::AppState;

/// GET /api/node/{label}/{name} - One node and its immediate neighbors.
pub async fn get_node(
    State(state): State<AppState>,
    Path((label, name)): Path<(String, String)>,
) -> Result<Json<NodeDetail>, (StatusCode, String)> {
    let label: Label = label.parse().map_err(error_response)?;

    let detail = lendgraph_graph::queries::detail::fetch_node_detail(&state.graph, label, &name)
        .await
        .map_err(error_response)?;

    Ok(Json(detail))
}
