//! Vote HTTP handlers.
//!
//! ```text
//! POST /questions/{id}/vote {"vote":"1"}
//! POST /answers/{id}/vote   {"vote":"-1"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::VoteInput;
use crate::domain::votes_service::{ANSWER_VOTE_FAILED, QUESTION_VOTE_FAILED};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::MessageResponse;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_answer_id, parse_question_id};

/// Request body for both vote endpoints.
///
/// The value is decoded leniently so that any JSON type reaches the domain,
/// which checks the target before judging the vote. An absent or unreadable
/// body is treated as a body without a vote.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct VoteRequest {
    /// `"1"` for an upvote, `"-1"` for a downvote.
    #[schema(value_type = Option<String>, example = "1")]
    pub vote: Option<Value>,
}

impl From<VoteRequest> for VoteInput {
    fn from(value: VoteRequest) -> Self {
        let raw = match value.vote {
            Some(Value::String(text)) => Some(text),
            _ => None,
        };
        Self::new(raw)
    }
}

fn vote_input(payload: Option<web::Json<VoteRequest>>) -> VoteInput {
    payload
        .map(|body| VoteInput::from(body.into_inner()))
        .unwrap_or_default()
}

/// Record a vote on a question.
#[utoipa::path(
    post,
    path = "/questions/{id}/vote",
    params(("id" = i32, Path, description = "Question id")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote recorded", body = MessageResponse),
        (status = 400, description = "Vote is not \"1\" or \"-1\"", body = MessageResponse),
        (status = 404, description = "Unknown question", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["votes"],
    operation_id = "voteOnQuestion"
)]
#[post("/questions/{id}/vote")]
pub async fn vote_on_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Option<web::Json<VoteRequest>>,
) -> ApiResult<HttpResponse> {
    let id = parse_question_id(&path, QUESTION_VOTE_FAILED)?;
    let input = vote_input(payload);
    state.votes.vote_on_question(id, &input).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Question voted successfully.")))
}

/// Record a vote on an answer.
#[utoipa::path(
    post,
    path = "/answers/{id}/vote",
    params(("id" = i32, Path, description = "Answer id")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote recorded", body = MessageResponse),
        (status = 400, description = "Vote is not \"1\" or \"-1\"", body = MessageResponse),
        (status = 404, description = "Unknown answer", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["votes"],
    operation_id = "voteOnAnswer"
)]
#[post("/answers/{id}/vote")]
pub async fn vote_on_answer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Option<web::Json<VoteRequest>>,
) -> ApiResult<HttpResponse> {
    let id = parse_answer_id(&path, ANSWER_VOTE_FAILED)?;
    let input = vote_input(payload);
    state.votes.vote_on_answer(id, &input).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Answer voted successfully.")))
}
