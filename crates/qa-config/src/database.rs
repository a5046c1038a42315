//! Embedded database configuration.

use serde::{Deserialize, Serialize};

/// Default database file, relative to the working directory.
fn default_path() -> String {
    String::from("questions.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the database file, or `:memory:` for a throwaway database.
    #[serde(default = "default_path")]
    pub path: String,

    /// Create the forum tables on open if they are missing.
    ///
    /// Off by default: the schema is normally provisioned out of band.
    #[serde(default)]
    pub bootstrap_schema: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            bootstrap_schema: false,
        }
    }
}

impl DatabaseConfig {
    /// Whether the configured path names a private in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
