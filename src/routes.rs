use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::handlers;

/// Create folder browser routes
pub fn browser_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Directory tree
        .route("/api/tree", get(handlers::get_tree))
        // File content, as a catch-all segment list or a single encoded suffix
        .route("/api/files/{*path}", get(handlers::get_file))
        .route("/files/{*path}", get(handlers::get_file))
        // Index page
        .route("/", get(handlers::index))
        .route("/index.html", get(handlers::index))
        .fallback(handlers::not_found)
}

/// Complete application with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    browser_routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
