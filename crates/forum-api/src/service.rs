use std::sync::Arc;

use tracing::{debug, info};

use forum_db::{NewQuestionRow, QuestionStore};
use forum_types::api::{
    PostQuestionReplyBody, PostReplyResponse, QuestionDetails, QuestionsResponse, ReplyDetails,
};

use crate::error::{ApiError, Lookup, Operation};
use crate::validation::validate;

/// Validates requests, drives the store and shapes the responses for the
/// four question endpoints.
#[derive(Clone)]
pub struct QuestionService {
    store: Arc<dyn QuestionStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub fn add_question(&self, body: &PostQuestionReplyBody) -> Result<QuestionDetails, ApiError> {
        let (author, message) = validate(body.author.as_deref(), body.message.as_deref())?;

        let row = self
            .store
            .save(NewQuestionRow::question(author, message))
            .map_err(|e| ApiError::persistence(Operation::SaveQuestion, e))?;

        info!(id = row.id, "Question added");
        Ok(QuestionDetails {
            id: row.id,
            author: row.author,
            message: row.message,
            replies: 0,
        })
    }

    pub fn create_reply(
        &self,
        question_id: i64,
        body: &PostQuestionReplyBody,
    ) -> Result<PostReplyResponse, ApiError> {
        let (author, message) = validate(body.author.as_deref(), body.message.as_deref())?;

        self.store
            .find_by_id(question_id)
            .map_err(|e| ApiError::persistence(Operation::CheckQuestion, e))?
            .ok_or(ApiError::NotFound(Lookup::Reply))?;

        let row = self
            .store
            .save(NewQuestionRow::reply(question_id, author, message))
            .map_err(|e| ApiError::persistence(Operation::SaveReply, e))?;

        info!(id = row.id, question_id, "Reply added");
        Ok(PostReplyResponse {
            id: row.id,
            question_id,
            author: row.author,
            message: row.message,
        })
    }

    /// Top-level questions with their reply counts, in store order.
    pub fn list_questions(&self) -> Result<Vec<QuestionDetails>, ApiError> {
        let rows = self
            .store
            .find_top_level()
            .map_err(|e| ApiError::persistence(Operation::ListQuestions, e))?;

        let questions = rows
            .into_iter()
            .map(|row| -> Result<QuestionDetails, ApiError> {
                let replies = self
                    .store
                    .count_replies_of(row.id)
                    .map_err(|e| ApiError::persistence(Operation::ListQuestions, e))?;
                Ok(QuestionDetails {
                    id: row.id,
                    author: row.author,
                    message: row.message,
                    replies,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = questions.len(), "Listed questions");
        Ok(questions)
    }

    pub fn question_details(&self, question_id: i64) -> Result<QuestionsResponse, ApiError> {
        let question = self
            .store
            .find_by_id(question_id)
            .map_err(|e| ApiError::persistence(Operation::ReadDetails, e))?
            .ok_or(ApiError::NotFound(Lookup::Details))?;

        let replies = self
            .store
            .find_replies_of(question.id)
            .map_err(|e| ApiError::persistence(Operation::ReadDetails, e))?
            .into_iter()
            .map(|reply| ReplyDetails {
                id: reply.id,
                author: reply.author,
                message: reply.message,
            })
            .collect();

        Ok(QuestionsResponse {
            id: question.id,
            author: question.author,
            message: question.message,
            replies,
        })
    }
}
