//! Driven ports: the traits persistence adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod answer_repository;
mod question_repository;
mod storage_error;
mod vote_repository;

#[cfg(test)]
pub use answer_repository::MockAnswerRepository;
pub use answer_repository::AnswerRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::QuestionRepository;
pub use storage_error::StorageError;
#[cfg(test)]
pub use vote_repository::MockVoteRepository;
pub use vote_repository::VoteRepository;
