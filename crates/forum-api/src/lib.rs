pub mod error;
pub mod questions;
pub mod service;
pub mod state;
pub mod validation;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use service::QuestionService;
pub use state::{AppState, AppStateInner};

/// Build the HTTP surface over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::add_question),
        )
        .route("/questions/", get(questions::list_questions))
        .route("/questions/{question_id}", get(questions::get_question_details))
        .route("/questions/{question_id}/reply", post(questions::create_reply))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
