//! Service layer exposing the forum repositories.
//!
//! `QaService` wraps a `QaDb` handle. The generic base operations live in
//! [`crate::model`]; entity finders and association queries are added by the
//! `repos` modules as `impl QaService` blocks.

use qa_config::DatabaseConfig;

use crate::QaDb;
use crate::error::DatabaseError;

/// Entry point for all forum reads and writes.
#[derive(Clone)]
pub struct QaService {
    db: QaDb,
}

impl QaService {
    /// Create a service over a freshly opened local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = QaDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service over the process-wide shared handle.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the shared handle cannot be opened.
    pub async fn shared(db_path: &str) -> Result<Self, DatabaseError> {
        let db = QaDb::shared(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service as described by the `[database]` config section.
    ///
    /// Bootstraps the schema when `bootstrap_schema` is set.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or bootstrapped.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let svc = Self::new_local(&config.path).await?;
        if config.bootstrap_schema {
            svc.db.bootstrap_schema().await?;
        }
        Ok(svc)
    }

    /// Create from an existing `QaDb` (injected handle, e.g. for testing).
    #[must_use]
    pub const fn from_db(db: QaDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &QaDb {
        &self.db
    }
}
