//! Answer entity and write payload.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AnswerId, QuestionId};

/// Validation errors returned by [`AnswerDraft::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerValidationError {
    MissingContent,
}

impl fmt::Display for AnswerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContent => write!(f, "content must not be empty"),
        }
    }
}

impl std::error::Error for AnswerValidationError {}

/// A stored answer.
///
/// `question_id` is not enforced by the store; services check that the
/// question exists before inserting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub content: String,
}

/// Validated content of a new answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerDraft {
    content: String,
}

impl AnswerDraft {
    /// Validate the raw `content` field.
    pub fn try_new(content: Option<String>) -> Result<Self, AnswerValidationError> {
        content
            .filter(|text| !text.is_empty())
            .map(|content| Self { content })
            .ok_or(AnswerValidationError::MissingContent)
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
