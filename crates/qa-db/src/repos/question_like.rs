//! QuestionLike repository: likers, liked questions, like counts, most-liked.

use libsql::Value;
use qa_core::entities::{Question, QuestionLike, User};
use qa_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::{Record, get_i64, get_opt_i64};
use crate::model::{Model, decode_all};
use crate::repos::{QUESTION_COLUMNS, USER_COLUMNS};
use crate::service::QaService;

impl Model for QuestionLike {
    const ENTITY: EntityType = EntityType::QuestionLike;

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
    /// Users who liked `question_id`, in like order.
    pub async fn likers_for_question_id(
        &self,
        question_id: i64,
    ) -> Result<Vec<User>, DatabaseError> {
        self.require_exists::<Question>(question_id).await?;

        let sql = format!(
            "SELECT {USER_COLUMNS}
             FROM users
             JOIN question_likes ON users.id = question_likes.user_id
             WHERE question_likes.question_id = ?1
             ORDER BY question_likes.id"
        );
        let records = self.db().execute(&sql, vec![question_id.into()]).await?;
        decode_all(&records)
    }

    /// Number of likes on `question_id` from existing users.
    pub async fn num_likes_for_question_id(&self, question_id: i64) -> Result<i64, DatabaseError> {
        self.require_exists::<Question>(question_id).await?;

        let records = self
            .db()
            .execute(
                "SELECT COUNT(*) AS n
                 FROM users
                 JOIN question_likes ON users.id = question_likes.user_id
                 WHERE question_likes.question_id = ?1",
                vec![question_id.into()],
            )
            .await?;
        let record = records.first().ok_or(DatabaseError::NoResult)?;
        get_i64(record, "n")
    }

    /// Questions `user_id` liked, in like order. Empty when none.
    pub async fn liked_questions_for_user_id(
        &self,
        user_id: i64,
    ) -> Result<Vec<Question>, DatabaseError> {
        self.require_exists::<User>(user_id).await?;

        let sql = format!(
            "SELECT {QUESTION_COLUMNS}
             FROM questions
             JOIN question_likes ON question_likes.question_id = questions.id
             WHERE question_likes.user_id = ?1
             ORDER BY question_likes.id"
        );
        let records = self.db().execute(&sql, vec![user_id.into()]).await?;
        decode_all(&records)
    }

    /// Top `n` questions by like count, descending; ties by ascending id.
    ///
    /// Ranks on `question_likes`. Questions nobody liked are not ranked.
    pub async fn most_liked_questions(&self, n: u32) -> Result<Vec<Question>, DatabaseError> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS}
             FROM questions
             JOIN question_likes ON question_likes.question_id = questions.id
             JOIN users ON users.id = question_likes.user_id
             GROUP BY questions.id
             ORDER BY COUNT(question_likes.id) DESC, questions.id ASC
             LIMIT ?1"
        );
        let records = self.db().execute(&sql, vec![i64::from(n).into()]).await?;
        decode_all(&records)
    }
}
