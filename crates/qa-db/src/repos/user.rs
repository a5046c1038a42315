//! User repository: name lookup, authored content, karma.

use libsql::Value;
use qa_core::entities::{Question, Reply, User};
use qa_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::{Record, get_opt_f64, get_opt_i64, get_string};
use crate::model::{Model, require_id};
use crate::service::QaService;

impl Model for User {
    const ENTITY: EntityType = EntityType::User;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_record(record: &Record) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: get_opt_i64(record, "id")?,
            fname: get_string(record, "fname")?,
            lname: get_string(record, "lname")?,
        })
    }

    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("fname", self.fname.as_str().into()),
            ("lname", self.lname.as_str().into()),
        ]
    }
}

impl QaService {
    /// Exact match on first and last name. With duplicates, the lowest id wins.
    pub async fn find_user_by_name(
        &self,
        fname: &str,
        lname: &str,
    ) -> Result<Option<User>, DatabaseError> {
        let records = self
            .db()
            .execute(
                "SELECT * FROM users WHERE fname = ?1 AND lname = ?2 ORDER BY id LIMIT 1",
                vec![fname.into(), lname.into()],
            )
            .await?;
        records.first().map(User::from_record).transpose()
    }

    /// Questions written by `user`. The user must be persisted.
    pub async fn authored_questions(&self, user: &User) -> Result<Vec<Question>, DatabaseError> {
        let id = require_id(user)?;
        self.find_questions_by_author_id(id).await
    }

    /// Replies written by `user`. The user must be persisted.
    pub async fn authored_replies(&self, user: &User) -> Result<Vec<Reply>, DatabaseError> {
        let id = require_id(user)?;
        self.find_replies_by_author_id(id).await
    }

    /// Questions `user` follows.
    pub async fn followed_questions(&self, user: &User) -> Result<Vec<Question>, DatabaseError> {
        let id = require_id(user)?;
        self.followed_questions_for_user_id(id).await
    }

    /// Questions `user` liked; empty when there are none.
    pub async fn liked_questions(&self, user: &User) -> Result<Vec<Question>, DatabaseError> {
        let id = require_id(user)?;
        self.liked_questions_for_user_id(id).await
    }

    /// Average likes per question authored by `user`.
    ///
    /// Questions without likes count toward the denominator. `None` when the
    /// user has authored no questions.
    pub async fn average_karma(&self, user: &User) -> Result<Option<f64>, DatabaseError> {
        let id = require_id(user)?;
        let records = self
            .db()
            .execute(
                "SELECT CAST(COUNT(question_likes.id) AS REAL) / COUNT(DISTINCT questions.id) AS karma
                 FROM questions
                 LEFT OUTER JOIN question_likes ON questions.id = question_likes.question_id
                 WHERE questions.author_id = ?1
                 GROUP BY questions.author_id",
                vec![id.into()],
            )
            .await?;

        match records.first() {
            Some(record) => get_opt_f64(record, "karma"),
            None => Ok(None),
        }
    }
}
