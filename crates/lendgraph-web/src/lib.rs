//! LendGraph Web Server
//!
//! Axum-based web server for the visualization frontend and REST API.

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use lendgraph_graph::GraphClient;
use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/graph", get(routes::graph::get_graph))
        .route("/node/{label}/{name}", get(routes::node::get_node))
        .route("/stats", get(routes::stats::get_stats))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(graph: GraphClient, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(graph);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
