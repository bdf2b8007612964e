//! Port for the append-only vote tables.

use async_trait::async_trait;

use crate::domain::{AnswerId, QuestionId, Vote};

use super::StorageError;

/// Store access for `question_votes` and `answer_votes`.
///
/// Votes are only ever inserted. Nothing reads or tallies them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoteRepository: Send + Sync {
    async fn record_question_vote(
        &self,
        question_id: QuestionId,
        vote: Vote,
    ) -> Result<(), StorageError>;

    async fn record_answer_vote(&self, answer_id: AnswerId, vote: Vote)
    -> Result<(), StorageError>;
}
