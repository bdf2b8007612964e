//! HTTP inbound adapter exposing the REST endpoints.

pub mod answers;
pub mod error;
pub mod health;
pub mod questions;
pub mod schemas;
pub mod state;
pub mod validation;
pub mod votes;

use actix_web::web;

pub use error::ApiResult;

/// Register the Q&A routes and body decoding rules on `cfg`.
///
/// `/questions/search` is registered ahead of `/questions/{id}` so the
/// literal segment is never captured as an id. Callers provide
/// `web::Data<HttpState>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(health::api_check)
        .service(questions::list_questions)
        .service(questions::create_question)
        .service(questions::search_questions)
        .service(questions::get_question)
        .service(questions::update_question)
        .service(questions::delete_question)
        .service(answers::list_answers)
        .service(answers::create_answer)
        .service(answers::delete_answers)
        .service(votes::vote_on_question)
        .service(votes::vote_on_answer);
}
