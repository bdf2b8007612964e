//! Store-generated row identifiers.
//!
//! Identifiers arrive from clients as path segments and are coerced the way
//! PostgreSQL reads an `integer`: surrounding whitespace is ignored, an
//! optional sign is accepted, and anything else (including values outside
//! the 32-bit range) is a coercion failure rather than a missing row.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a path segment is not a row identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a row identifier: {reason}")]
pub struct RowIdParseError {
    value: String,
    reason: String,
}

impl RowIdParseError {
    fn new(value: &str, source: &ParseIntError) -> Self {
        Self {
            value: value.to_owned(),
            reason: source.to_string(),
        }
    }
}

/// Characters PostgreSQL skips around an integer literal.
const fn is_pg_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw store identifier.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Raw store identifier.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = RowIdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim_matches(is_pg_space)
                    .parse::<i32>()
                    .map(Self)
                    .map_err(|err| RowIdParseError::new(s, &err))
            }
        }
    };
}

row_id! {
    /// Identifier of a row in the `questions` table.
    QuestionId
}

row_id! {
    /// Identifier of a row in the `answers` table.
    AnswerId
}
