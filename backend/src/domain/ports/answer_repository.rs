//! Port for answer persistence.

use async_trait::async_trait;

use crate::domain::{Answer, AnswerDraft, AnswerId, QuestionId};

use super::StorageError;

/// Store access for the `answers` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Look up a single answer.
    async fn find_by_id(&self, id: AnswerId) -> Result<Option<Answer>, StorageError>;

    /// Answers attached to `question_id`, ordered by id.
    async fn list_for_question(&self, question_id: QuestionId)
    -> Result<Vec<Answer>, StorageError>;

    /// Insert an answer under `question_id` and return the stored row.
    async fn create(
        &self,
        question_id: QuestionId,
        draft: &AnswerDraft,
    ) -> Result<Answer, StorageError>;

    /// Remove every answer attached to `question_id`.
    async fn delete_for_question(&self, question_id: QuestionId) -> Result<usize, StorageError>;
}
