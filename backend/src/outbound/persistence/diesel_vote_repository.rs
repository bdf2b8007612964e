//! PostgreSQL-backed `VoteRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{StorageError, VoteRepository};
use crate::domain::{AnswerId, QuestionId, Vote};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewAnswerVoteRow, NewQuestionVoteRow};
use super::pool::DbPool;
use super::schema::{answer_votes, question_votes};

/// Diesel-backed implementation of the `VoteRepository` port.
///
/// Votes are stored in their wire form (`"1"` / `"-1"`).
#[derive(Clone)]
pub struct DieselVoteRepository {
    pool: DbPool,
}

impl DieselVoteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for DieselVoteRepository {
    async fn record_question_vote(
        &self,
        question_id: QuestionId,
        vote: Vote,
    ) -> Result<(), StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewQuestionVoteRow {
            question_id: question_id.get(),
            vote: vote.as_str(),
        };

        diesel::insert_into(question_votes::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(question_id = %question_id, %vote, "question vote stored");
        Ok(())
    }

    async fn record_answer_vote(&self, answer_id: AnswerId, vote: Vote) -> Result<(), StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewAnswerVoteRow {
            answer_id: answer_id.get(),
            vote: vote.as_str(),
        };

        diesel::insert_into(answer_votes::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(answer_id = %answer_id, %vote, "answer vote stored");
        Ok(())
    }
}
