//! Axum router configuration with middleware.
//!
//! API routes live under `/api/v1/`; the embedded chat page is served at
//! `/`. Middleware: permissive CORS, request tracing.

use axum::Router;
use axum::response::Html;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/personas", get(handlers::persona::list_personas))
        .route("/chat", post(handlers::chat::send_message))
        .route("/sessions/{id}", get(handlers::session::get_session))
        .route("/sessions/{id}/clear", post(handlers::session::clear_session))
        .route("/sessions/{id}/persona", put(handlers::session::set_persona));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/", get(index_page))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / -- the embedded single-page chat UI.
async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// GET /health -- simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
