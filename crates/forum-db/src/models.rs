//! Database row types — these map directly to SQLite rows.
//! Distinct from forum-types API models to keep the DB layer independent.

/// A stored question or reply. `parent_question_id` is `None` for a
/// top-level question and the question's id for a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    pub id: i64,
    pub author: String,
    pub message: String,
    pub parent_question_id: Option<i64>,
}

/// A row that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewQuestionRow {
    pub author: String,
    pub message: String,
    pub parent_question_id: Option<i64>,
}

impl NewQuestionRow {
    pub fn question(author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            message: message.into(),
            parent_question_id: None,
        }
    }

    pub fn reply(question_id: i64, author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            message: message.into(),
            parent_question_id: Some(question_id),
        }
    }
}
