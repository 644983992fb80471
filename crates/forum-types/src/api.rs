use serde::{Deserialize, Serialize};

// -- Requests --

/// Body of both "add question" and "create reply". Missing fields are kept as
/// `None` so the validator can report them instead of the JSON extractor.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PostQuestionReplyBody {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// -- Questions --

/// A top-level question with its reply count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDetails {
    pub id: i64,
    pub author: String,
    pub message: String,
    pub replies: u64,
}

/// A question with its replies expanded one level deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub id: i64,
    pub author: String,
    pub message: String,
    pub replies: Vec<ReplyDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyDetails {
    pub id: i64,
    pub author: String,
    pub message: String,
}

// -- Replies --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostReplyResponse {
    pub id: i64,
    pub question_id: i64,
    pub author: String,
    pub message: String,
}

// -- Errors --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
    pub description: String,
}
