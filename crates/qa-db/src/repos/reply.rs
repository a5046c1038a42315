//! Reply repository: finders, parent lookups and thread traversal.
//!
//! Threads are resolved by id, one query per hop. The walkers stop on cycles.

use std::collections::{HashSet, VecDeque};

use libsql::Value;
use qa_core::entities::{Question, Reply, User};
use qa_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::{Record, get_i64, get_opt_i64, get_string, opt_i64_value};
use crate::model::{Model, decode_all, require_id};
use crate::service::QaService;

impl Model for Reply {
    const ENTITY: EntityType = EntityType::Reply;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_record(record: &Record) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: get_opt_i64(record, "id")?,
            body: get_string(record, "body")?,
            question_id: get_i64(record, "question_id")?,
            parent_reply_id: get_opt_i64(record, "parent_reply")?,
            author_id: get_i64(record, "author_id")?,
        })
    }

    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("body", self.body.as_str().into()),
            ("question_id", self.question_id.into()),
            ("parent_reply", opt_i64_value(self.parent_reply_id)),
            ("author_id", self.author_id.into()),
        ]
    }
}

impl QaService {
    /// Every reply by `author_id`. `NotFound` if the user does not exist.
    pub async fn find_replies_by_author_id(
        &self,
        author_id: i64,
    ) -> Result<Vec<Reply>, DatabaseError> {
        self.require_exists::<User>(author_id).await?;

        let records = self
            .db()
            .execute(
                "SELECT * FROM replies WHERE author_id = ?1 ORDER BY id",
                vec![author_id.into()],
            )
            .await?;
        decode_all(&records)
    }

    /// Every reply on `question_id`. `NotFound` if the question does not exist.
    pub async fn find_replies_by_question_id(
        &self,
        question_id: i64,
    ) -> Result<Vec<Reply>, DatabaseError> {
        self.require_exists::<Question>(question_id).await?;

        let records = self
            .db()
            .execute(
                "SELECT * FROM replies WHERE question_id = ?1 ORDER BY id",
                vec![question_id.into()],
            )
            .await?;
        decode_all(&records)
    }

    pub async fn reply_author(&self, reply: &Reply) -> Result<Option<User>, DatabaseError> {
        require_id(reply)?;
        self.find_by_id::<User>(reply.author_id).await
    }

    pub async fn reply_question(&self, reply: &Reply) -> Result<Option<Question>, DatabaseError> {
        require_id(reply)?;
        self.find_by_id::<Question>(reply.question_id).await
    }

    /// The reply `reply` answers, or `None` for a top-level reply.
    pub async fn parent_reply(&self, reply: &Reply) -> Result<Option<Reply>, DatabaseError> {
        require_id(reply)?;
        match reply.parent_reply_id {
            Some(parent_id) => self.find_by_id::<Reply>(parent_id).await,
            None => Ok(None),
        }
    }

    /// Direct answers to `reply`, ascending by id.
    pub async fn child_replies(&self, reply: &Reply) -> Result<Vec<Reply>, DatabaseError> {
        let id = require_id(reply)?;
        let records = self
            .db()
            .execute(
                "SELECT * FROM replies WHERE parent_reply = ?1 ORDER BY id",
                vec![id.into()],
            )
            .await?;
        decode_all(&records)
    }

    /// Parent chain of `reply`, nearest first, ending at a top-level reply.
    ///
    /// Stops early if a parent id points at a missing reply.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the chain loops back on itself.
    pub async fn reply_ancestors(&self, reply: &Reply) -> Result<Vec<Reply>, DatabaseError> {
        let id = require_id(reply)?;
        let mut seen = HashSet::from([id]);
        let mut ancestors = Vec::new();
        let mut next = reply.parent_reply_id;

        while let Some(parent_id) = next {
            if !seen.insert(parent_id) {
                tracing::warn!(reply_id = id, parent_id, "reply parent chain contains a cycle");
                return Err(DatabaseError::InvalidState(format!(
                    "reply #{id} has a cyclic parent chain at reply #{parent_id}"
                )));
            }
            let Some(parent) = self.find_by_id::<Reply>(parent_id).await? else {
                break;
            };
            next = parent.parent_reply_id;
            ancestors.push(parent);
        }
        Ok(ancestors)
    }

    /// Every reply below `reply`, breadth-first. Each reply appears once.
    pub async fn reply_descendants(&self, reply: &Reply) -> Result<Vec<Reply>, DatabaseError> {
        let id = require_id(reply)?;
        let mut seen = HashSet::from([id]);
        let mut queue = VecDeque::from([reply.clone()]);
        let mut descendants = Vec::new();

        while let Some(current) = queue.pop_front() {
            for child in self.child_replies(&current).await? {
                let child_id = require_id(&child)?;
                if seen.insert(child_id) {
                    queue.push_back(child.clone());
                    descendants.push(child);
                }
            }
        }
        Ok(descendants)
    }
}
