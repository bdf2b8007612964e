//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and the store's
//! representation. They contain no business logic.

pub mod persistence;
