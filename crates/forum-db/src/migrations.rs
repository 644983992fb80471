use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |r| r.get(0),
    )?;

    if version < 1 {
        info!("Running migration v1 (questions table)");
        // Questions and replies share one table; a reply points at its question.
        conn.execute_batch(
            "
            CREATE TABLE questions (
                id                  INTEGER PRIMARY KEY AUTOINCREMENT,
                author              TEXT NOT NULL,
                message             TEXT NOT NULL,
                parent_question_id  INTEGER REFERENCES questions(id)
            );

            CREATE INDEX IF NOT EXISTS idx_questions_parent
                ON questions(parent_question_id);

            INSERT INTO schema_version (version) VALUES (1);
            ",
        )?;
    }

    info!("Database migrations complete");
    Ok(())
}
