//! Shared test utilities for qa-db unit tests.

pub(crate) mod helpers {
    use qa_core::entities::{Question, Reply, User};

    use crate::QaDb;
    use crate::service::QaService;

    /// Create an in-memory service with the forum schema in place.
    pub async fn test_service() -> QaService {
        let db = QaDb::open_local(":memory:").await.unwrap();
        db.bootstrap_schema().await.unwrap();
        QaService::from_db(db)
    }

    /// Save a user and return it with its id set.
    pub async fn saved_user(svc: &QaService, fname: &str, lname: &str) -> User {
        let mut user = User::new(fname, lname);
        svc.save(&mut user).await.unwrap();
        user
    }

    /// Save a question authored by `author_id`.
    pub async fn saved_question(svc: &QaService, title: &str, author_id: i64) -> Question {
        let mut question = Question::new(title, format!("{title} body"), author_id);
        svc.save(&mut question).await.unwrap();
        question
    }

    /// Save a reply, nested under `parent` when given.
    pub async fn saved_reply(
        svc: &QaService,
        body: &str,
        question_id: i64,
        parent: Option<i64>,
        author_id: i64,
    ) -> Reply {
        let mut reply = Reply::new(body, question_id, author_id);
        reply.parent_reply_id = parent;
        svc.save(&mut reply).await.unwrap();
        reply
    }
}
