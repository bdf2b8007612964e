//! Shared request parsing helpers for the HTTP handlers.

use tracing::{debug, warn};

use crate::domain::{AnswerId, Error, QuestionId, RowIdParseError};

/// Message for any body that fails field validation or JSON decoding.
pub const INVALID_REQUEST_DATA: &str = "Invalid request data.";

fn coercion_failure(failure: &'static str) -> impl FnOnce(RowIdParseError) -> Error {
    move |err| {
        warn!(error = %err, "path id could not be coerced to an integer");
        Error::internal(failure)
    }
}

/// Parse a `{id}` path segment naming a question.
///
/// A segment that is not an integer fails like any other store call of the
/// operation: `failure` is the operation's generic 500 message.
pub(crate) fn parse_question_id(raw: &str, failure: &'static str) -> Result<QuestionId, Error> {
    raw.parse().map_err(coercion_failure(failure))
}

/// Parse a `{id}` path segment naming an answer.
pub(crate) fn parse_answer_id(raw: &str, failure: &'static str) -> Result<AnswerId, Error> {
    raw.parse().map_err(coercion_failure(failure))
}

/// Map a payload validation failure onto the shared 400 error.
pub(crate) fn invalid_request_data(err: impl std::fmt::Display) -> Error {
    debug!(error = %err, "request data rejected");
    Error::invalid_request(INVALID_REQUEST_DATA)
}
