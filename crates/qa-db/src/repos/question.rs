//! Question repository: author lookups, replies, followers, likers, rankings.

use libsql::Value;
use qa_core::entities::{Question, Reply, User};
use qa_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::{Record, get_i64, get_opt_i64, get_string};
use crate::model::{Model, decode_all, require_id};
use crate::service::QaService;

impl Model for Question {
    const ENTITY: EntityType = EntityType::Question;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_record(record: &Record) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: get_opt_i64(record, "id")?,
            title: get_string(record, "title")?,
            body: get_string(record, "body")?,
            author_id: get_i64(record, "author_id")?,
        })
    }

    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("title", self.title.as_str().into()),
            ("body", self.body.as_str().into()),
            ("author_id", self.author_id.into()),
        ]
    }
}

impl QaService {
    /// Every question by `author_id`.
    ///
    /// Fails with `NotFound` when no such user exists, even if questions carry
    /// that author id.
    pub async fn find_questions_by_author_id(
        &self,
        author_id: i64,
    ) -> Result<Vec<Question>, DatabaseError> {
        self.require_exists::<User>(author_id).await?;

        let records = self
            .db()
            .execute(
                "SELECT * FROM questions WHERE author_id = ?1 ORDER BY id",
                vec![author_id.into()],
            )
            .await?;
        decode_all(&records)
    }

    /// The authoring user, or `None` if it no longer exists.
    pub async fn question_author(&self, question: &Question) -> Result<Option<User>, DatabaseError> {
        self.find_by_id::<User>(question.author_id).await
    }

    /// All replies on `question`, top-level and nested, as a flat list.
    pub async fn question_replies(&self, question: &Question) -> Result<Vec<Reply>, DatabaseError> {
        let id = require_id(question)?;
        self.find_replies_by_question_id(id).await
    }

    pub async fn question_followers(&self, question: &Question) -> Result<Vec<User>, DatabaseError> {
        let id = require_id(question)?;
        self.followers_for_question_id(id).await
    }

    pub async fn question_likers(&self, question: &Question) -> Result<Vec<User>, DatabaseError> {
        let id = require_id(question)?;
        self.likers_for_question_id(id).await
    }

    pub async fn question_num_likes(&self, question: &Question) -> Result<i64, DatabaseError> {
        let id = require_id(question)?;
        self.num_likes_for_question_id(id).await
    }

    /// Top `n` questions by follower count.
    pub async fn most_followed(&self, n: u32) -> Result<Vec<Question>, DatabaseError> {
        self.most_followed_questions(n).await
    }

    /// Top `n` questions by like count.
    pub async fn most_liked(&self, n: u32) -> Result<Vec<Question>, DatabaseError> {
        self.most_liked_questions(n).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qa_core::entities::{QuestionFollow, QuestionLike};

    use super::*;
    use crate::test_support::helpers::{saved_question, saved_reply, saved_user, test_service};

    #[tokio::test]
    async fn create_question_roundtrip() {
        let svc = test_service().await;
        let author = saved_user(&svc, "Ada", "Lovelace").await;
        let question = saved_question(&svc, "Loops?", author.id.unwrap()).await;

        let fetched = svc
            .find_by_id::<Question>(question.id.unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, question);
    }

    #[tokio::test]
    async fn update_question_fields() {
        let svc = test_service().await;
        let author = saved_user(&svc, "A", "A").await;
        let mut question = saved_question(&svc, "draft", author.id.unwrap()).await;

        question.title = "final".into();
        question.body = "edited".into();
        svc.save(&mut question).await.unwrap();

        let fetched = svc
            .find_by_id::<Question>(question.id.unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.title, "final");
        assert_eq!(fetched.body, "edited");
    }

    #[tokio::test]
    async fn find_by_author_guards_missing_user() {
        let svc = test_service().await;
        // Question pointing at a user that was never created.
        saved_question(&svc, "dangling", 77).await;

        let err = svc.find_questions_by_author_id(77).await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::NotFound {
                entity_type: EntityType::User,
                id: Some(77)
            }
        ));
    }

    #[tokio::test]
    async fn author_lookup() {
        let svc = test_service().await;
        let author = saved_user(&svc, "Ada", "Lovelace").await;
        let question = saved_question(&svc, "Q", author.id.unwrap()).await;

        let found = svc.question_author(&question).await.unwrap().unwrap();
        assert_eq!(found.fname, "Ada");

        let orphan = Question::new("orphan", "no author", 500);
        assert!(svc.question_author(&orphan).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replies_are_flat() {
        let svc = test_service().await;
        let author = saved_user(&svc, "A", "A").await;
        let author_id = author.id.unwrap();
        let question = saved_question(&svc, "Q", author_id).await;
        let qid = question.id.unwrap();

        let root = saved_reply(&svc, "root", qid, None, author_id).await;
        saved_reply(&svc, "child", qid, root.id, author_id).await;

        let replies = svc.question_replies(&question).await.unwrap();
        let bodies: Vec<_> = replies.iter().map(|r| r.body.as_str()).collect();
        assert_eq!(bodies, ["root", "child"]);
    }

    #[tokio::test]
    async fn followers_likers_and_counts() {
        let svc = test_service().await;
        let author = saved_user(&svc, "A", "Author").await;
        let fan = saved_user(&svc, "F", "Fan").await;
        let question = saved_question(&svc, "Q", author.id.unwrap()).await;
        let qid = question.id.unwrap();

        svc.save(&mut QuestionFollow::new(fan.id.unwrap(), qid))
            .await
            .unwrap();
        svc.save(&mut QuestionLike::new(fan.id.unwrap(), qid))
            .await
            .unwrap();
        svc.save(&mut QuestionLike::new(author.id.unwrap(), qid))
            .await
            .unwrap();

        assert_eq!(svc.question_followers(&question).await.unwrap(), vec![fan.clone()]);
        assert_eq!(
            svc.question_likers(&question).await.unwrap(),
            vec![fan, author]
        );
        assert_eq!(svc.question_num_likes(&question).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn associations_require_persisted_question() {
        let svc = test_service().await;
        let unsaved = Question::new("new", "body", 1);

        assert!(matches!(
            svc.question_replies(&unsaved).await,
            Err(DatabaseError::NotFound { id: None, .. })
        ));
        assert!(matches!(
            svc.question_num_likes(&unsaved).await,
            Err(DatabaseError::NotFound { id: None, .. })
        ));
    }
}
