use std::fmt;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::error;

use forum_types::api::ErrorResponse;

const UNKNOWN_DESCRIPTION: &str = "Unknown exception occurred while processing the request.";

/// Stable error codes returned in the `errorCode` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Unknown,
    ReplySaveFailed,
    ReplyQuestionNotFound,
    QuestionSaveFailed,
    QuestionListFailed,
    DetailsQuestionNotFound,
    DetailsReadFailed,
    EmptyAuthor,
    EmptyMessage,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "ERROR000",
            Self::ReplySaveFailed => "ERROR001",
            Self::ReplyQuestionNotFound => "ERROR002",
            Self::QuestionSaveFailed => "ERROR003",
            // Historical code, kept for client compatibility.
            Self::QuestionListFailed => "ERROR0034",
            Self::DetailsQuestionNotFound => "ERROR006",
            Self::DetailsReadFailed => "ERROR007",
            Self::EmptyAuthor => "ERROR008",
            Self::EmptyMessage => "ERROR009",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Author,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Author => f.write_str("Author"),
            Self::Message => f.write_str("Message"),
        }
    }
}

/// The operation that was looking for a question when it turned out missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Reply,
    Details,
}

/// The store operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SaveQuestion,
    CheckQuestion,
    SaveReply,
    ListQuestions,
    ReadDetails,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::SaveQuestion => "Exception occurred while saving Question to Database.",
            Self::CheckQuestion => "Exception occurred while looking up question for reply.",
            Self::SaveReply => "Exception occurred while saving reply to Database.",
            Self::ListQuestions => "Exception occurred while reading Questions from Database.",
            Self::ReadDetails => "Exception occurred while reading question details.",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input. {0} cannot be empty or null.")]
    Validation(Field),

    #[error("Question Not Found.")]
    NotFound(Lookup),

    #[error("{operation}")]
    Persistence {
        operation: Operation,
        #[source]
        source: anyhow::Error,
    },

    /// Anything that was not anticipated by the service. Carries the
    /// original failure text.
    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    pub fn persistence(operation: Operation, source: anyhow::Error) -> Self {
        Self::Persistence { operation, source }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(Field::Author) => ErrorCode::EmptyAuthor,
            Self::Validation(Field::Message) => ErrorCode::EmptyMessage,
            Self::NotFound(Lookup::Reply) => ErrorCode::ReplyQuestionNotFound,
            Self::NotFound(Lookup::Details) => ErrorCode::DetailsQuestionNotFound,
            Self::Persistence { operation, .. } => match operation {
                Operation::SaveQuestion => ErrorCode::QuestionSaveFailed,
                Operation::CheckQuestion | Operation::SaveReply => ErrorCode::ReplySaveFailed,
                Operation::ListQuestions => ErrorCode::QuestionListFailed,
                Operation::ReadDetails => ErrorCode::DetailsReadFailed,
            },
            Self::Unknown(_) => ErrorCode::Unknown,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence { operation, .. } => match operation {
                Operation::SaveQuestion | Operation::ListQuestions => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                // Reply and detail store failures share the not-found status
                // with their lookups; clients tell them apart by error code.
                Operation::CheckQuestion | Operation::SaveReply | Operation::ReadDetails => {
                    StatusCode::NOT_FOUND
                }
            },
            Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The uniform JSON error body for this failure.
    pub fn body(&self) -> ErrorResponse {
        let message = self.to_string();
        let description = match self {
            Self::Persistence { source, .. } => format!("{source:#}"),
            Self::Unknown(_) => UNKNOWN_DESCRIPTION.to_string(),
            _ => message.clone(),
        };

        ErrorResponse {
            error_code: self.code().as_str().to_string(),
            message,
            description,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();

        match &self {
            Self::Persistence { source, .. } => {
                error!(code = %self.code(), "{}: {:#}", body.message, source);
            }
            _ => error!(code = %self.code(), "{}", body.message),
        }

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Unknown(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Unknown(rejection.body_text())
    }
}

/// A blocking store task that panicked or was cancelled.
impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        if !err.is_panic() {
            return Self::Unknown(err.to_string());
        }

        let payload = err.into_panic();
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Store task panicked".to_string());
        Self::Unknown(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_carry_field_specific_codes() {
        let author = ApiError::Validation(Field::Author);
        assert_eq!(author.code().as_str(), "ERROR008");
        assert_eq!(author.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(author.to_string(), "Invalid input. Author cannot be empty or null.");

        let message = ApiError::Validation(Field::Message);
        assert_eq!(message.code().as_str(), "ERROR009");
    }

    #[test]
    fn not_found_codes_depend_on_lookup_site() {
        assert_eq!(ApiError::NotFound(Lookup::Reply).code().as_str(), "ERROR002");
        assert_eq!(ApiError::NotFound(Lookup::Details).code().as_str(), "ERROR006");
        assert_eq!(ApiError::NotFound(Lookup::Details).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn typed_body_without_cause_repeats_message_as_description() {
        let body = ApiError::NotFound(Lookup::Details).body();
        assert_eq!(body.message, "Question Not Found.");
        assert_eq!(body.description, body.message);
    }

    #[test]
    fn persistence_body_surfaces_cause_in_description() {
        let err = ApiError::persistence(
            Operation::SaveQuestion,
            anyhow::anyhow!("sample exception"),
        );
        let body = err.body();

        assert_eq!(body.error_code, "ERROR003");
        assert!(body.message.contains("saving Question"));
        assert_eq!(body.description, "sample exception");
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn persistence_status_and_code_per_operation() {
        let cases = [
            (Operation::SaveQuestion, StatusCode::UNPROCESSABLE_ENTITY, "ERROR003"),
            (Operation::ListQuestions, StatusCode::UNPROCESSABLE_ENTITY, "ERROR0034"),
            (Operation::CheckQuestion, StatusCode::NOT_FOUND, "ERROR001"),
            (Operation::SaveReply, StatusCode::NOT_FOUND, "ERROR001"),
            (Operation::ReadDetails, StatusCode::NOT_FOUND, "ERROR007"),
        ];

        for (operation, status, code) in cases {
            let err = ApiError::persistence(operation, anyhow::anyhow!("x"));
            assert_eq!(err.status(), status, "{operation:?}");
            assert_eq!(err.code().to_string(), code, "{operation:?}");
        }
    }

    #[test]
    fn reply_store_failures_share_code_but_not_message() {
        let check = ApiError::persistence(Operation::CheckQuestion, anyhow::anyhow!("x"));
        let save = ApiError::persistence(Operation::SaveReply, anyhow::anyhow!("x"));

        assert_eq!(check.code(), ErrorCode::ReplySaveFailed);
        assert_eq!(save.code(), ErrorCode::ReplySaveFailed);
        assert_ne!(check.to_string(), save.to_string());
    }

    #[test]
    fn unknown_body_echoes_message_with_generic_description() {
        let err = ApiError::Unknown("Unknown Exception.".into());
        let body = err.body();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error_code, "ERROR000");
        assert_eq!(body.message, "Unknown Exception.");
        assert_eq!(body.description, UNKNOWN_DESCRIPTION);
    }

    #[tokio::test]
    async fn panicking_task_becomes_unknown_with_panic_text() {
        let err = tokio::task::spawn_blocking(|| panic!("disk on fire"))
            .await
            .unwrap_err();

        match ApiError::from(err) {
            ApiError::Unknown(message) => assert_eq!(message, "disk on fire"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
