//! Shared HTTP adapter state.
//!
//! Handlers receive this state through `actix_web::web::Data`, so they only
//! depend on domain services and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AnswerRepository, QuestionRepository, VoteRepository};
use crate::domain::{AnswersService, QuestionsService, VotesService};

/// Parameter object bundling the port implementations behind the services.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub questions: Arc<dyn QuestionRepository>,
    pub answers: Arc<dyn AnswerRepository>,
    pub votes: Arc<dyn VoteRepository>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub questions: QuestionsService,
    pub answers: AnswersService,
    pub votes: VotesService,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Wire the services onto a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use qa_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use qa_backend::test_support::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let state = HttpState::new(HttpStatePorts {
    ///     questions: store.clone(),
    ///     answers: store.clone(),
    ///     votes: store,
    /// });
    /// let _questions = state.questions.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            questions,
            answers,
            votes,
        } = ports;
        Self {
            questions: QuestionsService::new(Arc::clone(&questions)),
            answers: AnswersService::new(Arc::clone(&questions), Arc::clone(&answers)),
            votes: VotesService::new(questions, answers, votes),
        }
    }
}
