use crate::Database;
use crate::models::{NewQuestionRow, QuestionRow};
use crate::store::QuestionStore;
use anyhow::Result;
use rusqlite::{Connection, Row};
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT id, author, message, parent_question_id FROM questions";

impl QuestionStore for Database {
    fn save(&self, row: NewQuestionRow) -> Result<QuestionRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO questions (author, message, parent_question_id) VALUES (?1, ?2, ?3)",
                rusqlite::params![row.author, row.message, row.parent_question_id],
            )?;
            let id = conn.last_insert_rowid();
            debug!(id, parent = ?row.parent_question_id, "Row saved");

            Ok(QuestionRow {
                id,
                author: row.author,
                message: row.message,
                parent_question_id: row.parent_question_id,
            })
        })
    }

    fn find_by_id(&self, id: i64) -> Result<Option<QuestionRow>> {
        self.with_conn(|conn| query_by_id(conn, id))
    }

    fn find_top_level(&self) -> Result<Vec<QuestionRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_COLUMNS} WHERE parent_question_id IS NULL ORDER BY id"
            ))?;

            let rows = stmt
                .query_map([], map_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    fn find_replies_of(&self, id: i64) -> Result<Vec<QuestionRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_COLUMNS} WHERE parent_question_id = ?1 ORDER BY id"
            ))?;

            let rows = stmt
                .query_map([id], map_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    fn count_replies_of(&self, id: i64) -> Result<u64> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM questions WHERE parent_question_id = ?1",
                [id],
                |row| row.get(0),
            )?;
            Ok(count as u64)
        })
    }
}

fn query_by_id(conn: &Connection, id: i64) -> Result<Option<QuestionRow>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
    stmt.query_row([id], map_row).optional()
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<QuestionRow> {
    Ok(QuestionRow {
        id: row.get(0)?,
        author: row.get(1)?,
        message: row.get(2)?,
        parent_question_id: row.get(3)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
