use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod products;

/// Application routes with state bound; middleware is layered on in `main`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/products", products::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    let body = serde_json::json!({ "error": "Not Found", "path": uri.path() });
    (StatusCode::NOT_FOUND, Json(body))
}
