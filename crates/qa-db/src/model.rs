//! Base model: generic persistence for every forum entity.
//!
//! An entity opts in by implementing [`Model`]: its `EntityType` (which fixes
//! the table), id access, record decoding, and the ordered column/value list
//! written by `create` and `update`. The generic operations below then work
//! for any entity without per-type SQL.

use libsql::Value;
use qa_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::{Record, entity_type_to_table};
use crate::service::QaService;

/// A persistable forum entity.
pub trait Model: Sized {
    /// Entity kind; also selects the table.
    const ENTITY: EntityType;

    /// Row id, `None` until persisted.
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Decode one record of this entity's table.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Decode` if a column is missing or mistyped.
    fn from_record(record: &Record) -> Result<Self, DatabaseError>;

    /// Column names and current values, in insert order. Excludes `id`.
    fn fields(&self) -> Vec<(&'static str, Value)>;

    /// Table backing this entity.
    #[must_use]
    fn table() -> &'static str {
        entity_type_to_table(Self::ENTITY)
    }
}

/// Decode every record as `M`.
pub(crate) fn decode_all<M: Model>(records: &[Record]) -> Result<Vec<M>, DatabaseError> {
    records.iter().map(M::from_record).collect()
}

/// Id of a persisted entity, or `NotFound` for an unsaved one.
pub(crate) fn require_id<M: Model>(model: &M) -> Result<i64, DatabaseError> {
    model.id().ok_or(DatabaseError::unsaved(M::ENTITY))
}

impl QaService {
    /// Fetch one entity by id. A miss is `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn find_by_id<M: Model>(&self, id: i64) -> Result<Option<M>, DatabaseError> {
        let sql = format!("SELECT * FROM {} WHERE id = ?1", M::table());
        let records = self.db().execute(&sql, vec![id.into()]).await?;
        records.first().map(M::from_record).transpose()
    }

    /// Fetch every entity of a table, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn all<M: Model>(&self) -> Result<Vec<M>, DatabaseError> {
        let sql = format!("SELECT * FROM {} ORDER BY id", M::table());
        let records = self.db().execute(&sql, Vec::new()).await?;
        decode_all(&records)
    }

    /// Insert an unsaved entity or update a persisted one. Returns the id.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Self::create`] or [`Self::update`].
    pub async fn save<M: Model>(&self, model: &mut M) -> Result<i64, DatabaseError> {
        match model.id() {
            Some(id) => {
                self.update(model).await?;
                Ok(id)
            }
            None => self.create(model).await,
        }
    }

    /// Insert a new row and assign the generated id to `model`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::AlreadyExists` if `model` already has an id
    /// (nothing is written), or `DatabaseError` if the insert fails.
    pub async fn create<M: Model>(&self, model: &mut M) -> Result<i64, DatabaseError> {
        if let Some(id) = model.id() {
            return Err(DatabaseError::AlreadyExists {
                entity_type: M::ENTITY,
                id,
            });
        }

        let (columns, params): (Vec<&str>, Vec<Value>) = model.fields().into_iter().unzip();
        let placeholders = (1..=columns.len())
            .map(|idx| format!("?{idx}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            M::table(),
            columns.join(", ")
        );

        self.db().execute_write(&sql, params).await?;
        let id = self.db().last_insert_rowid();
        model.set_id(id);

        tracing::debug!(entity = %M::ENTITY, id, "created");
        Ok(id)
    }

    /// Overwrite the row matching `model`'s id with its current fields.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if `model` has no id, or if no row
    /// with that id exists; `DatabaseError` if the update fails.
    pub async fn update<M: Model>(&self, model: &M) -> Result<(), DatabaseError> {
        let id = require_id(model)?;

        let (columns, mut params): (Vec<&str>, Vec<Value>) = model.fields().into_iter().unzip();
        let sets = columns
            .iter()
            .enumerate()
            .map(|(idx, column)| format!("{column} = ?{}", idx + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {sets} WHERE id = ?{}",
            M::table(),
            columns.len() + 1
        );
        params.push(id.into());

        let affected = self.db().execute_write(&sql, params).await?;
        if affected == 0 {
            return Err(DatabaseError::missing(M::ENTITY, id));
        }

        tracing::debug!(entity = %M::ENTITY, id, "updated");
        Ok(())
    }

    /// Fail with `NotFound` carrying `id` unless an `M` with that id exists.
    pub(crate) async fn require_exists<M: Model>(&self, id: i64) -> Result<M, DatabaseError> {
        self.find_by_id::<M>(id)
            .await?
            .ok_or(DatabaseError::missing(M::ENTITY, id))
    }
}
