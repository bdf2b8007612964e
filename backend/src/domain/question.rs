//! Question entity, write payload and search filter.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::QuestionId;

/// Validation errors returned by [`QuestionDraft::try_from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionValidationError {
    MissingTitle,
    MissingDescription,
    MissingCategory,
}

impl fmt::Display for QuestionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "title must not be empty"),
            Self::MissingDescription => write!(f, "description must not be empty"),
            Self::MissingCategory => write!(f, "category must not be empty"),
        }
    }
}

impl std::error::Error for QuestionValidationError {}

/// A stored question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Validated fields for creating or replacing a question.
///
/// ## Invariants
/// - `title`, `description` and `category` are present and non-empty.
///
/// # Examples
/// ```
/// use qa_backend::domain::QuestionDraft;
///
/// let draft = QuestionDraft::try_from_parts(
///     Some("Borrowing".to_owned()),
///     Some("Why does this not compile?".to_owned()),
///     Some("rust".to_owned()),
/// )
/// .expect("all fields present");
/// assert_eq!(draft.category(), "rust");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    title: String,
    description: String,
    category: String,
}

fn required(
    value: Option<String>,
    missing: QuestionValidationError,
) -> Result<String, QuestionValidationError> {
    value.filter(|text| !text.is_empty()).ok_or(missing)
}

impl QuestionDraft {
    /// Validate raw request fields.
    ///
    /// Only absence and the empty string are rejected; whitespace is kept as
    /// submitted.
    pub fn try_from_parts(
        title: Option<String>,
        description: Option<String>,
        category: Option<String>,
    ) -> Result<Self, QuestionValidationError> {
        Ok(Self {
            title: required(title, QuestionValidationError::MissingTitle)?,
            description: required(description, QuestionValidationError::MissingDescription)?,
            category: required(category, QuestionValidationError::MissingCategory)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Case-insensitive substring filter over title and category.
///
/// An absent term matches every row. Terms are embedded into `ILIKE`
/// patterns unescaped, so `%` and `_` keep their wildcard meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSearch {
    title: Option<String>,
    category: Option<String>,
}

impl QuestionSearch {
    pub fn new(title: Option<String>, category: Option<String>) -> Self {
        Self { title, category }
    }

    /// `ILIKE` pattern applied to `questions.title`.
    pub fn title_pattern(&self) -> String {
        contains_pattern(self.title.as_deref())
    }

    /// `ILIKE` pattern applied to `questions.category`.
    pub fn category_pattern(&self) -> String {
        contains_pattern(self.category.as_deref())
    }
}

fn contains_pattern(term: Option<&str>) -> String {
    format!("%{}%", term.unwrap_or_default())
}
