//! Answer HTTP handlers, nested under a question.
//!
//! ```text
//! GET    /questions/{id}/answers
//! POST   /questions/{id}/answers {"content":"…"}
//! DELETE /questions/{id}/answers
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::answers_service::{
    CREATE_ANSWER_FAILED, DELETE_ANSWERS_FAILED, FETCH_ANSWERS_FAILED,
};
use crate::domain::{Answer, AnswerDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AnswerSchema, MessageResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{invalid_request_data, parse_question_id};

/// Request body for `POST /questions/{id}/answers`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AnswerRequest {
    #[schema(example = "Annotate the return type with the input lifetime.")]
    pub content: Option<String>,
}

/// List the answers of a question.
#[utoipa::path(
    get,
    path = "/questions/{id}/answers",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Answers of the question", body = [AnswerSchema]),
        (status = 404, description = "Unknown question", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["answers"],
    operation_id = "listAnswers"
)]
#[get("/questions/{id}/answers")]
pub async fn list_answers(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Answer>>> {
    let question_id = parse_question_id(&path, FETCH_ANSWERS_FAILED)?;
    state
        .answers
        .list_for_question(question_id)
        .await
        .map(web::Json)
}

/// Add an answer to a question.
#[utoipa::path(
    post,
    path = "/questions/{id}/answers",
    params(("id" = i32, Path, description = "Question id")),
    request_body = AnswerRequest,
    responses(
        (status = 201, description = "Answer created", body = MessageResponse),
        (status = 400, description = "Missing or empty content", body = MessageResponse),
        (status = 404, description = "Unknown question", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["answers"],
    operation_id = "createAnswer"
)]
#[post("/questions/{id}/answers")]
pub async fn create_answer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AnswerRequest>,
) -> ApiResult<HttpResponse> {
    let draft = AnswerDraft::try_new(payload.into_inner().content).map_err(invalid_request_data)?;
    let question_id = parse_question_id(&path, CREATE_ANSWER_FAILED)?;
    state.answers.create(question_id, &draft).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Answer created successfully.")))
}

/// Delete every answer of a question.
#[utoipa::path(
    delete,
    path = "/questions/{id}/answers",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Answers deleted", body = MessageResponse),
        (status = 404, description = "Unknown question", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["answers"],
    operation_id = "deleteAnswers"
)]
#[delete("/questions/{id}/answers")]
pub async fn delete_answers(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let question_id = parse_question_id(&path, DELETE_ANSWERS_FAILED)?;
    state.answers.delete_for_question(question_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "All Answers for the question have been deleted successfully.",
    )))
}
