//! Answer use-cases scoped to a parent question.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::ports::{AnswerRepository, QuestionRepository};
use crate::domain::questions_service::{require_question, storage_failure};
use crate::domain::{Answer, AnswerDraft, Error, QuestionId};

pub(crate) const FETCH_ANSWERS_FAILED: &str = "Unable to fetch answers.";
pub(crate) const CREATE_ANSWER_FAILED: &str = "Unable to create answer.";
pub(crate) const DELETE_ANSWERS_FAILED: &str = "Unable to delete answers.";

/// Service behind `/questions/{id}/answers`.
///
/// Every operation first checks that the parent question exists.
pub struct AnswersService<Q: ?Sized = dyn QuestionRepository, A: ?Sized = dyn AnswerRepository> {
    questions: Arc<Q>,
    answers: Arc<A>,
}

impl<Q: ?Sized, A: ?Sized> Clone for AnswersService<Q, A> {
    fn clone(&self) -> Self {
        Self {
            questions: Arc::clone(&self.questions),
            answers: Arc::clone(&self.answers),
        }
    }
}

impl<Q: ?Sized, A: ?Sized> AnswersService<Q, A> {
    pub fn new(questions: Arc<Q>, answers: Arc<A>) -> Self {
        Self { questions, answers }
    }
}

impl<Q, A> AnswersService<Q, A>
where
    Q: QuestionRepository + ?Sized,
    A: AnswerRepository + ?Sized,
{
    pub async fn list_for_question(&self, question_id: QuestionId) -> Result<Vec<Answer>, Error> {
        require_question(&*self.questions, question_id, "list_answers", FETCH_ANSWERS_FAILED)
            .await?;
        self.answers
            .list_for_question(question_id)
            .await
            .map_err(storage_failure("list_answers", FETCH_ANSWERS_FAILED))
    }

    pub async fn create(
        &self,
        question_id: QuestionId,
        draft: &AnswerDraft,
    ) -> Result<Answer, Error> {
        require_question(&*self.questions, question_id, "create_answer", CREATE_ANSWER_FAILED)
            .await?;
        let answer = self
            .answers
            .create(question_id, draft)
            .await
            .map_err(storage_failure("create_answer", CREATE_ANSWER_FAILED))?;
        info!(answer_id = %answer.id, question_id = %question_id, "answer created");
        Ok(answer)
    }

    /// Remove every answer of a question. Answers of other questions and
    /// the question itself are left alone.
    pub async fn delete_for_question(&self, question_id: QuestionId) -> Result<(), Error> {
        require_question(&*self.questions, question_id, "delete_answers", DELETE_ANSWERS_FAILED)
            .await?;
        let affected = self
            .answers
            .delete_for_question(question_id)
            .await
            .map_err(storage_failure("delete_answers", DELETE_ANSWERS_FAILED))?;
        debug!(question_id = %question_id, affected, "answers deleted");
        Ok(())
    }
}
