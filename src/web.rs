use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api::{self, AppState};

/// Compose the full application: API routes behind a permissive CORS policy.
/// The CORS layer also answers preflight requests for the mutating routes.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(state).layer(cors)
}

/// Bind the listener and serve the API.
pub async fn run(state: AppState) -> anyhow::Result<()> {
    let port = state.config.server.port;
    let app = app(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Beach Safety API running at http://localhost:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}
