//! Builders wiring the Diesel adapters into handler state.

use std::sync::Arc;

use actix_web::web;

use qa_backend::inbound::http::state::{HttpState, HttpStatePorts};
use qa_backend::outbound::persistence::{
    DbPool, DieselAnswerRepository, DieselQuestionRepository, DieselVoteRepository,
};

/// Build handler state whose ports all share `pool`.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(HttpStatePorts {
        questions: Arc::new(DieselQuestionRepository::new(pool.clone())),
        answers: Arc::new(DieselAnswerRepository::new(pool.clone())),
        votes: Arc::new(DieselVoteRepository::new(pool.clone())),
    }))
}
