//! Domain primitives, ports and services.
//!
//! Purpose: define the question/answer/vote entities, validate inbound
//! payloads and run the use-cases behind each endpoint. Nothing here knows
//! about HTTP or SQL; adapters plug in through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: client-safe failure carried to the HTTP layer.
//! - Question, Answer, Vote: stored entities and their drafts.
//! - QuestionsService, AnswersService, VotesService: use-case entry points.

pub mod answer;
pub mod answers_service;
pub mod error;
pub mod ids;
pub mod ports;
pub mod question;
pub mod questions_service;
pub mod trace_id;
pub mod vote;
pub mod votes_service;

pub use self::answer::{Answer, AnswerDraft, AnswerValidationError};
pub use self::answers_service::AnswersService;
pub use self::error::{Error, ErrorCode};
pub use self::ids::{AnswerId, QuestionId, RowIdParseError};
pub use self::question::{Question, QuestionDraft, QuestionSearch, QuestionValidationError};
pub use self::questions_service::QuestionsService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::vote::{Vote, VoteInput, VoteParseError};
pub use self::votes_service::VotesService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use qa_backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Question not found."))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
