//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every Q&A endpoint plus the health probes, and the
//! schema wrappers that describe domain types without coupling them to
//! utoipa. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::answers::AnswerRequest;
use crate::inbound::http::questions::QuestionRequest;
use crate::inbound::http::schemas::{AnswerSchema, MessageResponse, QuestionSchema};
use crate::inbound::http::votes::VoteRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Q&A backend API",
        description = "Questions, answers and votes backed by PostgreSQL."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::api_check,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::create_question,
        crate::inbound::http::questions::search_questions,
        crate::inbound::http::questions::get_question,
        crate::inbound::http::questions::update_question,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::answers::list_answers,
        crate::inbound::http::answers::create_answer,
        crate::inbound::http::answers::delete_answers,
        crate::inbound::http::votes::vote_on_question,
        crate::inbound::http::votes::vote_on_answer,
    ),
    components(schemas(
        QuestionSchema,
        AnswerSchema,
        MessageResponse,
        QuestionRequest,
        AnswerRequest,
        VoteRequest
    )),
    tags(
        (name = "questions", description = "Create, search and edit questions"),
        (name = "answers", description = "Answers attached to a question"),
        (name = "votes", description = "Up and down votes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
