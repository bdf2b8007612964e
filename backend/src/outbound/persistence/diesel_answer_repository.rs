//! PostgreSQL-backed `AnswerRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AnswerRepository, StorageError};
use crate::domain::{Answer, AnswerDraft, AnswerId, QuestionId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AnswerRow, NewAnswerRow};
use super::pool::DbPool;
use super::schema::answers;

/// Diesel-backed implementation of the `AnswerRepository` port.
#[derive(Clone)]
pub struct DieselAnswerRepository {
    pool: DbPool,
}

impl DieselAnswerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerRepository for DieselAnswerRepository {
    async fn find_by_id(&self, id: AnswerId) -> Result<Option<Answer>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AnswerRow> = answers::table
            .find(id.get())
            .select(AnswerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Answer::from))
    }

    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Answer>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AnswerRow> = answers::table
            .filter(answers::question_id.eq(question_id.get()))
            .select(AnswerRow::as_select())
            .order(answers::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Answer::from).collect())
    }

    async fn create(
        &self,
        question_id: QuestionId,
        draft: &AnswerDraft,
    ) -> Result<Answer, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAnswerRow {
            question_id: question_id.get(),
            content: draft.content(),
        };

        diesel::insert_into(answers::table)
            .values(&new_row)
            .returning(AnswerRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Answer::from)
            .map_err(map_diesel_error)
    }

    async fn delete_for_question(&self, question_id: QuestionId) -> Result<usize, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(answers::table.filter(answers::question_id.eq(question_id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
