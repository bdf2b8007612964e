//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled only for tests or with the `test-support` feature.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;

use crate::domain::ports::{AnswerRepository, QuestionRepository, StorageError, VoteRepository};
use crate::domain::{
    Answer, AnswerDraft, AnswerId, Question, QuestionDraft, QuestionId, QuestionSearch, Vote,
};
use crate::inbound::http::configure;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::middleware::Trace;

#[derive(Debug, Default)]
struct Tables {
    questions: Vec<Question>,
    answers: Vec<Answer>,
    question_votes: Vec<(QuestionId, Vote)>,
    answer_votes: Vec<(AnswerId, Vote)>,
    next_question_id: i32,
    next_answer_id: i32,
    failure: Option<String>,
}

impl Tables {
    fn check(&self) -> Result<(), StorageError> {
        match &self.failure {
            Some(message) => Err(StorageError::connection(message.clone())),
            None => Ok(()),
        }
    }
}

/// In-memory stand-in for the PostgreSQL store.
///
/// Implements every repository port with the same observable behaviour as
/// the Diesel adapters, including serial ids and `ILIKE` matching. Call
/// [`InMemoryStore::fail_with`] to make every subsequent call fail.
///
/// # Examples
/// ```
/// use qa_backend::test_support::InMemoryStore;
///
/// let store = InMemoryStore::default();
/// let question = store.insert_question("Borrowing", "Why?", "rust");
/// assert_eq!(store.questions(), vec![question]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every later call fail with a connection error carrying `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().failure = Some(message.into());
    }

    /// Seed a question directly.
    pub fn insert_question(&self, title: &str, description: &str, category: &str) -> Question {
        let mut tables = self.lock();
        tables.next_question_id += 1;
        let question = Question {
            id: QuestionId::new(tables.next_question_id),
            title: title.to_owned(),
            description: description.to_owned(),
            category: category.to_owned(),
        };
        tables.questions.push(question.clone());
        question
    }

    /// Seed an answer directly. The parent is not checked.
    pub fn insert_answer(&self, question_id: QuestionId, content: &str) -> Answer {
        let mut tables = self.lock();
        tables.next_answer_id += 1;
        let answer = Answer {
            id: AnswerId::new(tables.next_answer_id),
            question_id,
            content: content.to_owned(),
        };
        tables.answers.push(answer.clone());
        answer
    }

    pub fn questions(&self) -> Vec<Question> {
        self.lock().questions.clone()
    }

    pub fn answers(&self) -> Vec<Answer> {
        self.lock().answers.clone()
    }

    pub fn question_votes(&self) -> Vec<(QuestionId, Vote)> {
        self.lock().question_votes.clone()
    }

    pub fn answer_votes(&self) -> Vec<(AnswerId, Vote)> {
        self.lock().answer_votes.clone()
    }
}

/// Build handler state backed entirely by `store`.
pub fn http_state(store: &Arc<InMemoryStore>) -> HttpState {
    HttpState::new(HttpStatePorts {
        questions: store.clone(),
        answers: store.clone(),
        votes: store.clone(),
    })
}

/// Build the Q&A router over `store`, wrapped in the trace middleware.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::test;
/// use qa_backend::test_support::{InMemoryStore, test_app};
///
/// # actix_web::rt::System::new().block_on(async {
/// let store = Arc::new(InMemoryStore::default());
/// let app = test::init_service(test_app(&store)).await;
/// let res = test::call_service(&app, test::TestRequest::get().uri("/questions").to_request()).await;
/// assert!(res.status().is_success());
/// # });
/// ```
pub fn test_app(
    store: &Arc<InMemoryStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(web::Data::new(http_state(store)))
        .wrap(Trace)
        .configure(configure)
}

/// Case-insensitive SQL `LIKE` matching (`%` any run, `_` one character).
fn ilike(value: &str, pattern: &str) -> bool {
    fn matches(value: &[char], pattern: &[char]) -> bool {
        match pattern.split_first() {
            None => value.is_empty(),
            Some(('%', rest)) => (0..=value.len()).any(|skip| {
                value
                    .get(skip..)
                    .is_some_and(|tail| matches(tail, rest))
            }),
            Some((expected, rest)) => match value.split_first() {
                Some((actual, tail)) if *expected == '_' || actual == expected => {
                    matches(tail, rest)
                }
                _ => false,
            },
        }
    }

    let value: Vec<char> = value.to_lowercase().chars().collect();
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    matches(&value, &pattern)
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Question>, StorageError> {
        let tables = self.lock();
        tables.check()?;
        Ok(tables.questions.clone())
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, StorageError> {
        let tables = self.lock();
        tables.check()?;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn search(&self, search: &QuestionSearch) -> Result<Vec<Question>, StorageError> {
        let tables = self.lock();
        tables.check()?;
        let (title, category) = (search.title_pattern(), search.category_pattern());
        Ok(tables
            .questions
            .iter()
            .filter(|q| ilike(&q.title, &title) && ilike(&q.category, &category))
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &QuestionDraft) -> Result<Question, StorageError> {
        self.lock().check()?;
        Ok(self.insert_question(draft.title(), draft.description(), draft.category()))
    }

    async fn update(&self, id: QuestionId, draft: &QuestionDraft) -> Result<usize, StorageError> {
        let mut tables = self.lock();
        tables.check()?;
        let Some(question) = tables.questions.iter_mut().find(|q| q.id == id) else {
            return Ok(0);
        };
        draft.title().clone_into(&mut question.title);
        draft.description().clone_into(&mut question.description);
        draft.category().clone_into(&mut question.category);
        Ok(1)
    }

    async fn delete(&self, id: QuestionId) -> Result<usize, StorageError> {
        let mut tables = self.lock();
        tables.check()?;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(before - tables.questions.len())
    }
}

#[async_trait]
impl AnswerRepository for InMemoryStore {
    async fn find_by_id(&self, id: AnswerId) -> Result<Option<Answer>, StorageError> {
        let tables = self.lock();
        tables.check()?;
        Ok(tables.answers.iter().find(|a| a.id == id).cloned())
    }

    async fn list_for_question(&self, question_id: QuestionId) -> Result<Vec<Answer>, StorageError> {
        let tables = self.lock();
        tables.check()?;
        Ok(tables
            .answers
            .iter()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        question_id: QuestionId,
        draft: &AnswerDraft,
    ) -> Result<Answer, StorageError> {
        self.lock().check()?;
        Ok(self.insert_answer(question_id, draft.content()))
    }

    async fn delete_for_question(&self, question_id: QuestionId) -> Result<usize, StorageError> {
        let mut tables = self.lock();
        tables.check()?;
        let before = tables.answers.len();
        tables.answers.retain(|a| a.question_id != question_id);
        Ok(before - tables.answers.len())
    }
}

#[async_trait]
impl VoteRepository for InMemoryStore {
    async fn record_question_vote(
        &self,
        question_id: QuestionId,
        vote: Vote,
    ) -> Result<(), StorageError> {
        let mut tables = self.lock();
        tables.check()?;
        tables.question_votes.push((question_id, vote));
        Ok(())
    }

    async fn record_answer_vote(&self, answer_id: AnswerId, vote: Vote) -> Result<(), StorageError> {
        let mut tables = self.lock();
        tables.check()?;
        tables.answer_votes.push((answer_id, vote));
        Ok(())
    }
}
