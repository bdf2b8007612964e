//! Question HTTP handlers.
//!
//! ```text
//! GET    /questions
//! POST   /questions {"title":"…","description":"…","category":"…"}
//! GET    /questions/search?title=…&category=…
//! GET    /questions/{id}
//! PUT    /questions/{id} {"title":"…","description":"…","category":"…"}
//! DELETE /questions/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::questions_service::{
    DELETE_QUESTION_FAILED, FETCH_QUESTION_FAILED, UPDATE_QUESTION_FAILED,
};
use crate::domain::{Question, QuestionDraft, QuestionSearch, QuestionValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{MessageResponse, QuestionSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{invalid_request_data, parse_question_id};

/// Request body for creating or replacing a question.
///
/// Fields are optional at the wire level so that a missing field is reported
/// as invalid request data instead of a decoding failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct QuestionRequest {
    #[schema(example = "How do lifetimes work?")]
    pub title: Option<String>,
    #[schema(example = "The borrow checker rejects my code.")]
    pub description: Option<String>,
    #[schema(example = "rust")]
    pub category: Option<String>,
}

impl TryFrom<QuestionRequest> for QuestionDraft {
    type Error = QuestionValidationError;

    fn try_from(value: QuestionRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.title, value.description, value.category)
    }
}

/// Query string for `GET /questions/search`. Absent terms match anything.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Case-insensitive substring of the category.
    pub category: Option<String>,
}

fn draft_from(payload: web::Json<QuestionRequest>) -> ApiResult<QuestionDraft> {
    QuestionDraft::try_from(payload.into_inner()).map_err(invalid_request_data)
}

/// List every question.
#[utoipa::path(
    get,
    path = "/questions",
    responses(
        (status = 200, description = "All questions", body = [QuestionSchema]),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Question>>> {
    state.questions.list().await.map(web::Json)
}

/// Create a question.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionRequest,
    responses(
        (status = 201, description = "Question created", body = MessageResponse),
        (status = 400, description = "Missing or empty field", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["questions"],
    operation_id = "createQuestion"
)]
#[post("/questions")]
pub async fn create_question(
    state: web::Data<HttpState>,
    payload: web::Json<QuestionRequest>,
) -> ApiResult<HttpResponse> {
    let draft = draft_from(payload)?;
    state.questions.create(&draft).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Question created successfully.")))
}

/// Search questions by title and category.
#[utoipa::path(
    get,
    path = "/questions/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching questions", body = [QuestionSchema]),
        (status = 404, description = "No question matched", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["questions"],
    operation_id = "searchQuestions"
)]
#[get("/questions/search")]
pub async fn search_questions(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<Question>>> {
    let SearchParams { title, category } = params.into_inner();
    state
        .questions
        .search(&QuestionSearch::new(title, category))
        .await
        .map(web::Json)
}

/// Fetch one question, wrapped in a single-element array.
#[utoipa::path(
    get,
    path = "/questions/{id}",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "The question", body = [QuestionSchema]),
        (status = 404, description = "Unknown question", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["questions"],
    operation_id = "getQuestion"
)]
#[get("/questions/{id}")]
pub async fn get_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Question>>> {
    let id = parse_question_id(&path, FETCH_QUESTION_FAILED)?;
    let question = state.questions.get(id).await?;
    Ok(web::Json(vec![question]))
}

/// Replace a question's fields.
#[utoipa::path(
    put,
    path = "/questions/{id}",
    params(("id" = i32, Path, description = "Question id")),
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Question updated", body = MessageResponse),
        (status = 400, description = "Missing or empty field", body = MessageResponse),
        (status = 404, description = "Unknown question", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["questions"],
    operation_id = "updateQuestion"
)]
#[put("/questions/{id}")]
pub async fn update_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<QuestionRequest>,
) -> ApiResult<HttpResponse> {
    let draft = draft_from(payload)?;
    let id = parse_question_id(&path, UPDATE_QUESTION_FAILED)?;
    state.questions.update(id, &draft).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Question updated successfully.")))
}

/// Delete a question. Its answers and votes are left in place.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted", body = MessageResponse),
        (status = 404, description = "Unknown question", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_question_id(&path, DELETE_QUESTION_FAILED)?;
    state.questions.delete(id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Question deleted successfully.")))
}
