//! Port for question persistence.

use async_trait::async_trait;

use crate::domain::{Question, QuestionDraft, QuestionId, QuestionSearch};

use super::StorageError;

/// Store access for the `questions` table.
///
/// Mutations report the number of affected rows instead of failing when the
/// row is gone; callers decide whether that matters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Every stored question, ordered by id.
    async fn list(&self) -> Result<Vec<Question>, StorageError>;

    /// Look up a single question.
    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, StorageError>;

    /// Questions whose title and category both match the search patterns.
    async fn search(&self, search: &QuestionSearch) -> Result<Vec<Question>, StorageError>;

    /// Insert a question and return the stored row.
    async fn create(&self, draft: &QuestionDraft) -> Result<Question, StorageError>;

    /// Replace title, description and category of a question.
    async fn update(&self, id: QuestionId, draft: &QuestionDraft) -> Result<usize, StorageError>;

    /// Remove a question. Answers and votes are left in place.
    async fn delete(&self, id: QuestionId) -> Result<usize, StorageError>;
}
