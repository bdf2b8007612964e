//! Diesel table definitions for the Q&A schema.
//!
//! The schema is created and owned outside this repository; these
//! definitions mirror it. The DDL leaves the text and reference columns
//! nullable, but every row this service writes fills them, so they are
//! declared non-null. A NULL written by another client fails to load and
//! surfaces as a query error.

diesel::table! {
    /// Questions asked by clients.
    questions (id) {
        id -> Int4,
        title -> Text,
        description -> Text,
        category -> Text,
    }
}

diesel::table! {
    /// Answers. `question_id` is not a foreign key.
    answers (id) {
        id -> Int4,
        question_id -> Int4,
        content -> Text,
    }
}

diesel::table! {
    /// Append-only question votes, `"1"` or `"-1"`.
    question_votes (id) {
        id -> Int4,
        question_id -> Int4,
        vote -> Text,
    }
}

diesel::table! {
    /// Append-only answer votes, `"1"` or `"-1"`.
    answer_votes (id) {
        id -> Int4,
        answer_id -> Int4,
        vote -> Text,
    }
}
