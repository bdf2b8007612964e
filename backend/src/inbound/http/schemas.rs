//! Response payloads and OpenAPI schema definitions.
//!
//! Domain entities do not derive `ToSchema`; the wrappers here mirror their
//! serialised shape for documentation via `#[schema(as = ...)]`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every status message, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Question created successfully.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// OpenAPI schema for [`crate::domain::Question`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Question)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct QuestionSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "How do lifetimes work?")]
    title: String,
    description: String,
    #[schema(example = "rust")]
    category: String,
}

/// OpenAPI schema for [`crate::domain::Answer`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Answer)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct AnswerSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = 1)]
    question_id: i32,
    content: String,
}
