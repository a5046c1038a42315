//! QuestionFollow repository: followers, followed questions, most-followed.

use libsql::Value;
use qa_core::entities::{Question, QuestionFollow, User};
use qa_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::{Record, get_i64, get_opt_i64};
use crate::model::{Model, decode_all};
use crate::repos::{QUESTION_COLUMNS, USER_COLUMNS};
use crate::service::QaService;

impl Model for QuestionFollow {
    const ENTITY: EntityType = EntityType::QuestionFollow;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_record(record: &Record) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: get_opt_i64(record, "id")?,
            user_id: get_i64(record, "user_id")?,
            question_id: get_i64(record, "question_id")?,
        })
    }

    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("user_id", self.user_id.into()),
            ("question_id", self.question_id.into()),
        ]
    }
}

impl QaService {
    /// Users following `question_id`, in follow order.
    pub async fn followers_for_question_id(
        &self,
        question_id: i64,
    ) -> Result<Vec<User>, DatabaseError> {
        self.require_exists::<Question>(question_id).await?;

        let sql = format!(
            "SELECT {USER_COLUMNS}
             FROM users
             JOIN question_follows ON users.id = question_follows.user_id
             WHERE question_follows.question_id = ?1
             ORDER BY question_follows.id"
        );
        let records = self.db().execute(&sql, vec![question_id.into()]).await?;
        decode_all(&records)
    }

    /// Questions `user_id` follows, in follow order. Empty when none.
    pub async fn followed_questions_for_user_id(
        &self,
        user_id: i64,
    ) -> Result<Vec<Question>, DatabaseError> {
        self.require_exists::<User>(user_id).await?;

        let sql = format!(
            "SELECT {QUESTION_COLUMNS}
             FROM questions
             JOIN question_follows ON question_follows.question_id = questions.id
             WHERE question_follows.user_id = ?1
             ORDER BY question_follows.id"
        );
        let records = self.db().execute(&sql, vec![user_id.into()]).await?;
        decode_all(&records)
    }

    /// Number of users following `question_id`.
    pub async fn num_followers_for_question_id(
        &self,
        question_id: i64,
    ) -> Result<i64, DatabaseError> {
        self.require_exists::<Question>(question_id).await?;

        let records = self
            .db()
            .execute(
                "SELECT COUNT(*) AS n
                 FROM users
                 JOIN question_follows ON users.id = question_follows.user_id
                 WHERE question_follows.question_id = ?1",
                vec![question_id.into()],
            )
            .await?;
        let record = records.first().ok_or(DatabaseError::NoResult)?;
        get_i64(record, "n")
    }

    /// Top `n` questions by follower count, descending; ties by ascending id.
    ///
    /// Questions nobody follows are not ranked.
    pub async fn most_followed_questions(&self, n: u32) -> Result<Vec<Question>, DatabaseError> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS}
             FROM questions
             JOIN question_follows ON question_follows.question_id = questions.id
             JOIN users ON users.id = question_follows.user_id
             GROUP BY questions.id
             ORDER BY COUNT(question_follows.id) DESC, questions.id ASC
             LIMIT ?1"
        );
        let records = self.db().execute(&sql, vec![i64::from(n).into()]).await?;
        decode_all(&records)
    }
}
