use anyhow::Result;

use crate::models::{NewQuestionRow, QuestionRow};

/// Storage operations the question service depends on.
///
/// Implementations are synchronous; async callers should run them on a
/// blocking thread.
pub trait QuestionStore: Send + Sync {
    /// Persist a new row and return it with its assigned id.
    fn save(&self, row: NewQuestionRow) -> Result<QuestionRow>;

    /// Fetch a single row. Absence is `Ok(None)`, not an error.
    fn find_by_id(&self, id: i64) -> Result<Option<QuestionRow>>;

    /// All rows without a parent.
    fn find_top_level(&self) -> Result<Vec<QuestionRow>>;

    /// All rows whose parent is `id`.
    fn find_replies_of(&self, id: i64) -> Result<Vec<QuestionRow>>;

    /// Number of replies to `id`; `Database` overrides this with `COUNT(*)`.
    fn count_replies_of(&self, id: i64) -> Result<u64> {
        Ok(self.find_replies_of(id)?.len() as u64)
    }
}
