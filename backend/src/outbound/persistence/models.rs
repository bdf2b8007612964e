//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Answer, AnswerId, Question, QuestionId};

use super::schema::{answer_votes, answers, question_votes, questions};

/// Row struct for reading from the questions table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuestionRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Insertable struct for creating question records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub(crate) struct NewQuestionRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
}

/// Changeset replacing every editable question column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = questions)]
pub(crate) struct QuestionChanges<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
}

/// Row struct for reading from the answers table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = answers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AnswerRow {
    pub id: i32,
    pub question_id: i32,
    pub content: String,
}

/// Insertable struct for creating answer records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = answers)]
pub(crate) struct NewAnswerRow<'a> {
    pub question_id: i32,
    pub content: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = question_votes)]
pub(crate) struct NewQuestionVoteRow {
    pub question_id: i32,
    pub vote: &'static str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = answer_votes)]
pub(crate) struct NewAnswerVoteRow {
    pub answer_id: i32,
    pub vote: &'static str,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: QuestionId::new(row.id),
            title: row.title,
            description: row.description,
            category: row.category,
        }
    }
}

impl From<AnswerRow> for Answer {
    fn from(row: AnswerRow) -> Self {
        Self {
            id: AnswerId::new(row.id),
            question_id: QuestionId::new(row.question_id),
            content: row.content,
        }
    }
}
