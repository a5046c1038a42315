//! Database error types for qa-db.

use qa_core::enums::EntityType;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// `create` was called on an entity that already has an id.
    #[error("{entity_type} #{id} already in database")]
    AlreadyExists { entity_type: EntityType, id: i64 },

    /// The entity (or a referenced one) is not in the database.
    ///
    /// `id` is `None` when the entity was never saved.
    #[error("{entity_type} {} not found in DB", describe_id(.id))]
    NotFound {
        entity_type: EntityType,
        id: Option<i64>,
    },

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A record column was missing or held an unexpected type.
    #[error("Decode failed: {0}")]
    Decode(String),

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Schema bootstrap failed.
    #[error("Schema bootstrap failed: {0}")]
    Schema(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    pub(crate) const fn unsaved(entity_type: EntityType) -> Self {
        Self::NotFound {
            entity_type,
            id: None,
        }
    }

    pub(crate) const fn missing(entity_type: EntityType, id: i64) -> Self {
        Self::NotFound {
            entity_type,
            id: Some(id),
        }
    }
}

fn describe_id(id: &Option<i64>) -> String {
    match id {
        Some(id) => format!("ID #{id}"),
        None => String::from("(unsaved)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_identifier() {
        let err = DatabaseError::missing(EntityType::User, 42);
        assert_eq!(err.to_string(), "User ID #42 not found in DB");
    }

    #[test]
    fn unsaved_not_found_message() {
        let err = DatabaseError::unsaved(EntityType::Reply);
        assert_eq!(err.to_string(), "Reply (unsaved) not found in DB");
    }

    #[test]
    fn already_exists_message() {
        let err = DatabaseError::AlreadyExists {
            entity_type: EntityType::Question,
            id: 3,
        };
        assert_eq!(err.to_string(), "Question #3 already in database");
    }
}
