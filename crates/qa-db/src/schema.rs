//! Bundled forum schema.
//!
//! The storage file is normally provisioned out of band. This script only
//! creates missing tables and indexes (`IF NOT EXISTS`), so running it against
//! an existing database is a no-op. It never alters or migrates tables.

use crate::QaDb;
use crate::error::DatabaseError;

/// users, questions, replies, question_follows, question_likes + lookup indexes.
const FORUM_SCHEMA: &str = include_str!("../schema/001_forum.sql");

impl QaDb {
    /// Create the forum tables if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Schema` if the script fails.
    pub async fn bootstrap_schema(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(FORUM_SCHEMA)
            .await
            .map_err(|e| DatabaseError::Schema(format!("001_forum: {e}")))?;
        tracing::debug!("forum schema ensured");
        Ok(())
    }
}
