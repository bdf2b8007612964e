//! Up/down votes and their wire representation.
//!
//! Clients send votes as the JSON strings `"1"` and `"-1"`, and the store
//! keeps those strings verbatim. Inside the crate a vote is always a [`Vote`].

use std::fmt;
use std::str::FromStr;

/// A single up or down vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vote {
    Upvote,
    Downvote,
}

impl Vote {
    /// Wire and storage form of the vote.
    ///
    /// # Examples
    /// ```
    /// use qa_backend::domain::Vote;
    ///
    /// assert_eq!(Vote::Downvote.as_str(), "-1");
    /// assert_eq!("1".parse::<Vote>(), Ok(Vote::Upvote));
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upvote => "1",
            Self::Downvote => "-1",
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a vote value is neither `"1"` nor `"-1"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoteParseError {
    #[error("vote is missing or not a string")]
    Missing,
    #[error("vote must be \"1\" or \"-1\", got {0:?}")]
    Unrecognised(String),
}

impl FromStr for Vote {
    type Err = VoteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Upvote),
            "-1" => Ok(Self::Downvote),
            other => Err(VoteParseError::Unrecognised(other.to_owned())),
        }
    }
}

/// Vote value exactly as submitted, parsed only after the target exists.
///
/// `None` stands for an absent field or a JSON value that is not a string;
/// numbers such as `1` are rejected like any other unrecognised value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteInput(Option<String>);

impl VoteInput {
    pub fn new(raw: Option<String>) -> Self {
        Self(raw)
    }

    /// Translate the submitted value into a [`Vote`].
    pub fn parse(&self) -> Result<Vote, VoteParseError> {
        self.0
            .as_deref()
            .ok_or(VoteParseError::Missing)
            .and_then(str::parse)
    }
}
