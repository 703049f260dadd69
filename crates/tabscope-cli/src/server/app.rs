//! Axum application setup.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use super::state::AppState;
use crate::web::static_handler;

/// Slack on top of the file limit for multipart framing and other fields.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/", get(handlers::index))
        .route("/upload", post(handlers::upload))
        .route("/static/*path", get(static_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
