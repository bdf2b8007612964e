//! Question use-cases: listing, search, lookup and mutation.
//!
//! Mutations follow an existence-check-then-mutate sequence: the lookup and
//! the write are two independent statements, so a concurrent delete can slip
//! between them. A write that then affects zero rows is still reported as a
//! success.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::ports::{QuestionRepository, StorageError};
use crate::domain::{Error, Question, QuestionDraft, QuestionId, QuestionSearch};

const QUESTION_NOT_FOUND: &str = "Question not found.";
const NO_SEARCH_MATCHES: &str = "Invalid search parameters.";

pub(crate) const FETCH_QUESTION_FAILED: &str = "Unable to fetch question.";
pub(crate) const UPDATE_QUESTION_FAILED: &str = "Unable to update question.";
pub(crate) const DELETE_QUESTION_FAILED: &str = "Unable to delete question.";

/// Log a store failure and replace it with a client-safe message.
pub(crate) fn storage_failure(
    operation: &'static str,
    message: &'static str,
) -> impl FnOnce(StorageError) -> Error {
    move |err| {
        error!(error = %err, operation, "store call failed");
        Error::internal(message)
    }
}

/// Fetch a question or fail with the standard not-found error.
pub(crate) async fn require_question<Q>(
    questions: &Q,
    id: QuestionId,
    operation: &'static str,
    failure: &'static str,
) -> Result<Question, Error>
where
    Q: QuestionRepository + ?Sized,
{
    questions
        .find_by_id(id)
        .await
        .map_err(storage_failure(operation, failure))?
        .ok_or_else(|| Error::not_found(QUESTION_NOT_FOUND))
}

/// Service behind the `/questions` resource.
pub struct QuestionsService<Q: ?Sized = dyn QuestionRepository> {
    questions: Arc<Q>,
}

impl<Q: ?Sized> Clone for QuestionsService<Q> {
    fn clone(&self) -> Self {
        Self {
            questions: Arc::clone(&self.questions),
        }
    }
}

impl<Q: ?Sized> QuestionsService<Q> {
    pub fn new(questions: Arc<Q>) -> Self {
        Self { questions }
    }
}

impl<Q> QuestionsService<Q>
where
    Q: QuestionRepository + ?Sized,
{
    /// All stored questions.
    pub async fn list(&self) -> Result<Vec<Question>, Error> {
        self.questions
            .list()
            .await
            .map_err(storage_failure("list_questions", "Unable to fetch questions."))
    }

    /// Store a new question. The created row is returned for logging only;
    /// the HTTP response does not echo it.
    pub async fn create(&self, draft: &QuestionDraft) -> Result<Question, Error> {
        let question = self
            .questions
            .create(draft)
            .await
            .map_err(storage_failure("create_question", "Unable to create question."))?;
        info!(question_id = %question.id, "question created");
        Ok(question)
    }

    /// Questions matching the filter; an empty result is a not-found error.
    pub async fn search(&self, search: &QuestionSearch) -> Result<Vec<Question>, Error> {
        let matches = self
            .questions
            .search(search)
            .await
            .map_err(storage_failure("search_questions", "Unable to search questions."))?;
        if matches.is_empty() {
            return Err(Error::not_found(NO_SEARCH_MATCHES));
        }
        Ok(matches)
    }

    pub async fn get(&self, id: QuestionId) -> Result<Question, Error> {
        require_question(&*self.questions, id, "get_question", FETCH_QUESTION_FAILED).await
    }

    pub async fn update(&self, id: QuestionId, draft: &QuestionDraft) -> Result<(), Error> {
        require_question(&*self.questions, id, "update_question", UPDATE_QUESTION_FAILED).await?;
        let affected = self
            .questions
            .update(id, draft)
            .await
            .map_err(storage_failure("update_question", UPDATE_QUESTION_FAILED))?;
        if affected == 0 {
            debug!(question_id = %id, "question vanished before update");
        }
        Ok(())
    }

    /// Delete a question. Its answers and votes stay in the store.
    pub async fn delete(&self, id: QuestionId) -> Result<(), Error> {
        require_question(&*self.questions, id, "delete_question", DELETE_QUESTION_FAILED).await?;
        let affected = self
            .questions
            .delete(id)
            .await
            .map_err(storage_failure("delete_question", DELETE_QUESTION_FAILED))?;
        if affected == 0 {
            debug!(question_id = %id, "question vanished before delete");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "questions_service_tests.rs"]
mod tests;
