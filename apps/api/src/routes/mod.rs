use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::resume::handlers;
use crate::state::AppState;

/// GET /test
/// Returns a JSON greeting, used as a liveness probe.
async fn test_handler() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test_handler))
        .route(
            "/resume/experience",
            get(handlers::get_experience).post(handlers::post_experience),
        )
        .route(
            "/resume/education",
            get(handlers::get_education).post(handlers::post_education),
        )
        .route(
            "/resume/skill",
            get(handlers::get_skill).post(handlers::post_skill),
        )
        .with_state(state)
}
