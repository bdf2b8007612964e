//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by
//! `diesel-async` with `bb8` pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types and run a single statement per call.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **One error type**: every failure becomes a `StorageError`.
//!
//! # Example
//!
//! ```ignore
//! use qa_backend::outbound::persistence::{DbPool, DieselQuestionRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/qa")).await?;
//! let questions = DieselQuestionRepository::new(pool);
//! ```

mod diesel_answer_repository;
mod diesel_error_mapping;
mod diesel_question_repository;
mod diesel_vote_repository;
mod models;
mod pool;
mod schema;

pub use diesel_answer_repository::DieselAnswerRepository;
pub use diesel_question_repository::DieselQuestionRepository;
pub use diesel_vote_repository::DieselVoteRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
