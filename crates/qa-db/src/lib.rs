//! # qa-db
//!
//! libSQL data access for the Q&A forum.
//!
//! Handles all relational state: users, questions, threaded replies,
//! question follows and question likes. The generic base model
//! ([`model::Model`]) provides `find_by_id`, `all`, `save`, `create` and
//! `update`; the `repos` modules add entity finders and the association /
//! aggregation queries on top of [`service::QaService`].
//!
//! The database handle is injected: build a [`QaDb`] over any file (or
//! `":memory:"`) and hand it to `QaService::from_db`. [`QaDb::shared`] offers
//! an opt-in process-wide instance.

pub mod error;
pub mod helpers;
pub mod model;
pub mod repos;
mod schema;
pub mod service;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use error::DatabaseError;
use helpers::Record;
use libsql::{Builder, Value};
use tokio::sync::OnceCell;

static SHARED: OnceCell<QaDb> = OnceCell::const_new();

/// Handle to the forum database.
///
/// Wraps one libSQL database and a single connection. Every statement runs
/// on that connection and autocommits; clones share it.
#[derive(Clone)]
pub struct QaDb {
    #[allow(dead_code)]
    db: Arc<libsql::Database>,
    conn: libsql::Connection,
}

impl QaDb {
    /// Open a local database at the given path. `":memory:"` opens a private
    /// in-memory database.
    ///
    /// The schema is not touched; call [`QaDb::bootstrap_schema`] to create it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        tracing::debug!(path, "opened forum database");
        Ok(Self {
            db: Arc::new(db),
            conn,
        })
    }

    /// Process-wide handle, opened on first call and reused afterwards.
    ///
    /// Initialization is idempotent: later calls return the first handle and
    /// ignore `path`. The connection is never closed explicitly.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the first open fails. A failed open leaves
    /// the slot empty so a later call may retry.
    pub async fn shared(path: &str) -> Result<Self, DatabaseError> {
        let db = SHARED.get_or_try_init(|| Self::open_local(path)).await?;
        Ok(db.clone())
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Run a statement and collect every row as a [`Record`].
    ///
    /// Values are always bound as positional parameters (`?1`, `?2`, ...).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails or a value cannot be read.
    pub async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Record>, DatabaseError> {
        tracing::debug!(sql, params = params.len(), "query");
        let mut rows = self
            .conn
            .query(sql, libsql::params_from_iter(params))
            .await?;

        let columns: Vec<String> = (0..rows.column_count())
            .map(|idx| rows.column_name(idx).unwrap_or_default().to_string())
            .collect();

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(Record::from_row(&row, &columns)?);
        }
        Ok(records)
    }

    /// Run a statement that returns no rows; yields the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn execute_write(&self, sql: &str, params: Vec<Value>) -> Result<u64, DatabaseError> {
        tracing::debug!(sql, params = params.len(), "write");
        Ok(self
            .conn
            .execute(sql, libsql::params_from_iter(params))
            .await?)
    }

    /// Row id generated by the most recent successful INSERT on this connection.
    #[must_use]
    pub fn last_insert_rowid(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> QaDb {
        let db = QaDb::open_local(":memory:").await.unwrap();
        db.bootstrap_schema().await.unwrap();
        db
    }

    #[tokio::test]
    async fn bootstrap_creates_forum_tables() {
        let db = test_db().await;

        for table in ["users", "questions", "replies", "question_follows", "question_likes"] {
            let rows = db
                .execute(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    vec![table.into()],
                )
                .await
                .unwrap();
            assert_eq!(rows.len(), 1, "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn execute_returns_named_columns() {
        let db = test_db().await;
        db.execute_write(
            "INSERT INTO users (fname, lname) VALUES (?1, ?2)",
            vec!["Ada".into(), "Lovelace".into()],
        )
        .await
        .unwrap();

        let rows = db.execute("SELECT * FROM users", Vec::new()).await.unwrap();
        assert_eq!(rows.len(), 1);
        let columns: Vec<&str> = rows[0].columns().collect();
        assert_eq!(columns, ["fname", "id", "lname"]);
        assert!(matches!(rows[0].get("fname"), Some(Value::Text(s)) if s == "Ada"));
    }

    #[tokio::test]
    async fn last_insert_rowid_tracks_inserts() {
        let db = test_db().await;
        for expected in 1..=3 {
            db.execute_write(
                "INSERT INTO users (fname, lname) VALUES (?1, ?2)",
                vec!["A".into(), "B".into()],
            )
            .await
            .unwrap();
            assert_eq!(db.last_insert_rowid(), expected);
        }
    }

    #[tokio::test]
    async fn execute_write_reports_affected_rows() {
        let db = test_db().await;
        let affected = db
            .execute_write(
                "UPDATE users SET fname = ?1 WHERE id = ?2",
                vec!["X".into(), 99_i64.into()],
            )
            .await
            .unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn clones_share_the_connection() {
        let db = test_db().await;
        let other = db.clone();
        other
            .execute_write(
                "INSERT INTO users (fname, lname) VALUES ('Grace', 'Hopper')",
                Vec::new(),
            )
            .await
            .unwrap();

        let rows = db.execute("SELECT id FROM users", Vec::new()).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn malformed_sql_propagates() {
        let db = test_db().await;
        let result = db.execute("SELEC nonsense", Vec::new()).await;
        assert!(matches!(result, Err(DatabaseError::LibSql(_))));
    }

    #[tokio::test]
    async fn shared_handle_is_idempotent() {
        let first = QaDb::shared(":memory:").await.unwrap();
        first.bootstrap_schema().await.unwrap();
        first
            .execute_write(
                "INSERT INTO users (fname, lname) VALUES ('Shared', 'Handle')",
                Vec::new(),
            )
            .await
            .unwrap();

        // A different path is ignored once the shared handle exists.
        let second = QaDb::shared("ignored.db").await.unwrap();
        let rows = second
            .execute(
                "SELECT id FROM users WHERE fname = 'Shared'",
                Vec::new(),
            )
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }
}
