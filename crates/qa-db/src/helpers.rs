//! Record decoding helpers.
//!
//! Every query returns rows as [`Record`]s, a column-name keyed mapping of
//! natively typed values. Repos decode records into entity structs with the
//! typed getters below, so a missing column or a type mismatch surfaces as
//! `DatabaseError::Decode` instead of a panic.

use std::collections::BTreeMap;

use libsql::Value;
use qa_core::enums::EntityType;

use crate::error::DatabaseError;

/// One result row: column name to value.
///
/// Duplicate column names keep the last value, so joined queries should
/// alias their columns explicitly.
#[derive(Debug, Clone, Default)]
pub struct Record {
    values: BTreeMap<String, Value>,
}

impl Record {
    /// Build a record from a libSQL row and the column names of its result set.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if a column value cannot be read.
    pub fn from_row(row: &libsql::Row, columns: &[String]) -> Result<Self, DatabaseError> {
        let mut values = BTreeMap::new();
        for (idx, name) in (0_i32..).zip(columns) {
            values.insert(name.clone(), row.get_value(idx)?);
        }
        Ok(Self { values })
    }

    /// Set a column value. Mostly useful for building records in tests.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, column: &str) -> Result<&Value, DatabaseError> {
        self.values
            .get(column)
            .ok_or_else(|| DatabaseError::Decode(format!("missing column '{column}'")))
    }
}

fn mismatch(column: &str, expected: &str, found: &Value) -> DatabaseError {
    DatabaseError::Decode(format!(
        "column '{column}': expected {expected}, found {found:?}"
    ))
}

/// Read a required INTEGER column.
///
/// # Errors
///
/// Returns `DatabaseError::Decode` if the column is missing, NULL, or not an integer.
pub fn get_i64(record: &Record, column: &str) -> Result<i64, DatabaseError> {
    match record.require(column)? {
        Value::Integer(i) => Ok(*i),
        other => Err(mismatch(column, "integer", other)),
    }
}

/// Read a nullable INTEGER column.
///
/// # Errors
///
/// Returns `DatabaseError::Decode` if the column is missing or holds a non-integer.
pub fn get_opt_i64(record: &Record, column: &str) -> Result<Option<i64>, DatabaseError> {
    match record.require(column)? {
        Value::Null => Ok(None),
        Value::Integer(i) => Ok(Some(*i)),
        other => Err(mismatch(column, "integer or null", other)),
    }
}

/// Read a required TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Decode` if the column is missing, NULL, or not text.
pub fn get_string(record: &Record, column: &str) -> Result<String, DatabaseError> {
    match record.require(column)? {
        Value::Text(s) => Ok(s.clone()),
        other => Err(mismatch(column, "text", other)),
    }
}

/// Read a nullable numeric column as `f64`. Integers are widened.
///
/// # Errors
///
/// Returns `DatabaseError::Decode` if the column is missing or not numeric.
#[allow(clippy::cast_precision_loss)]
pub fn get_opt_f64(record: &Record, column: &str) -> Result<Option<f64>, DatabaseError> {
    match record.require(column)? {
        Value::Null => Ok(None),
        Value::Real(f) => Ok(Some(*f)),
        Value::Integer(i) => Ok(Some(*i as f64)),
        other => Err(mismatch(column, "number or null", other)),
    }
}

/// Convert an optional id into a bindable parameter.
#[must_use]
pub fn opt_i64_value(value: Option<i64>) -> Value {
    value.map_or(Value::Null, Value::Integer)
}

/// Map `EntityType` to the corresponding SQL table name.
///
/// Exhaustive match: adding an `EntityType` variant forces updating this.
#[must_use]
pub const fn entity_type_to_table(entity: EntityType) -> &'static str {
    match entity {
        EntityType::User => "users",
        EntityType::Question => "questions",
        EntityType::Reply => "replies",
        EntityType::QuestionFollow => "question_follows",
        EntityType::QuestionLike => "question_likes",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::default()
            .with("id", 7_i64)
            .with("fname", "Ada")
            .with("parent_reply", Value::Null)
            .with("score", 1.5_f64)
    }

    #[test]
    fn typed_getters_read_native_values() {
        let record = sample();
        assert_eq!(get_i64(&record, "id").unwrap(), 7);
        assert_eq!(get_string(&record, "fname").unwrap(), "Ada");
        assert_eq!(get_opt_i64(&record, "parent_reply").unwrap(), None);
        assert_eq!(get_opt_f64(&record, "score").unwrap(), Some(1.5));
        assert_eq!(get_opt_f64(&record, "id").unwrap(), Some(7.0));
    }

    #[test]
    fn missing_column_is_decode_error() {
        let err = get_i64(&sample(), "nope").unwrap_err();
        assert!(matches!(err, DatabaseError::Decode(ref msg) if msg.contains("nope")));
    }

    #[test]
    fn null_in_required_column_is_decode_error() {
        let err = get_i64(&sample(), "parent_reply").unwrap_err();
        assert!(matches!(err, DatabaseError::Decode(_)));
    }

    #[test]
    fn text_in_integer_column_is_decode_error() {
        assert!(get_opt_i64(&sample(), "fname").is_err());
    }

    #[test]
    fn every_entity_has_a_table() {
        let tables: Vec<_> = EntityType::ALL
            .into_iter()
            .map(entity_type_to_table)
            .collect();
        assert_eq!(
            tables,
            ["users", "questions", "replies", "question_follows", "question_likes"]
        );
    }

    #[test]
    fn opt_value_binds_null() {
        assert!(matches!(opt_i64_value(None), Value::Null));
        assert!(matches!(opt_i64_value(Some(3)), Value::Integer(3)));
    }
}
