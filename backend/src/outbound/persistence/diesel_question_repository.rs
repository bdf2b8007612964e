//! PostgreSQL-backed `QuestionRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{QuestionRepository, StorageError};
use crate::domain::{Question, QuestionDraft, QuestionId, QuestionSearch};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewQuestionRow, QuestionChanges, QuestionRow};
use super::pool::DbPool;
use super::schema::questions;

/// Diesel-backed implementation of the `QuestionRepository` port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn changes(draft: &QuestionDraft) -> QuestionChanges<'_> {
    QuestionChanges {
        title: draft.title(),
        description: draft.description(),
        category: draft.category(),
    }
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn list(&self) -> Result<Vec<Question>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<QuestionRow> = questions::table
            .select(QuestionRow::as_select())
            .order(questions::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<QuestionRow> = questions::table
            .find(id.get())
            .select(QuestionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Question::from))
    }

    async fn search(&self, search: &QuestionSearch) -> Result<Vec<Question>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<QuestionRow> = questions::table
            .filter(questions::title.ilike(search.title_pattern()))
            .filter(questions::category.ilike(search.category_pattern()))
            .select(QuestionRow::as_select())
            .order(questions::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn create(&self, draft: &QuestionDraft) -> Result<Question, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewQuestionRow {
            title: draft.title(),
            description: draft.description(),
            category: draft.category(),
        };

        diesel::insert_into(questions::table)
            .values(&new_row)
            .returning(QuestionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Question::from)
            .map_err(map_diesel_error)
    }

    async fn update(&self, id: QuestionId, draft: &QuestionDraft) -> Result<usize, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(questions::table.find(id.get()))
            .set(&changes(draft))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: QuestionId) -> Result<usize, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(questions::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
