use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use forum_types::api::{
    PostQuestionReplyBody, PostReplyResponse, QuestionDetails, QuestionsResponse,
};

use crate::error::ApiError;
use crate::state::AppState;

// Every handler runs its service call on the blocking pool: the store is
// synchronous SQLite behind a mutex.

/// POST /questions
pub async fn add_question(
    State(state): State<AppState>,
    payload: Result<Json<PostQuestionReplyBody>, JsonRejection>,
) -> Result<Json<QuestionDetails>, ApiError> {
    let Json(body) = payload?;

    let question =
        tokio::task::spawn_blocking(move || state.questions.add_question(&body)).await??;

    Ok(Json(question))
}

/// POST /questions/{question_id}/reply
pub async fn create_reply(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PostQuestionReplyBody>, JsonRejection>,
) -> Result<Json<PostReplyResponse>, ApiError> {
    let Path(question_id) = path?;
    let Json(body) = payload?;

    let reply = tokio::task::spawn_blocking(move || {
        state.questions.create_reply(question_id, &body)
    })
    .await??;

    Ok(Json(reply))
}

/// GET /questions
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionDetails>>, ApiError> {
    let questions = tokio::task::spawn_blocking(move || state.questions.list_questions()).await??;
    Ok(Json(questions))
}

/// GET /questions/{question_id}
pub async fn get_question_details(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let Path(question_id) = path?;

    let details = tokio::task::spawn_blocking(move || {
        state.questions.question_details(question_id)
    })
    .await??;

    Ok(Json(details))
}
