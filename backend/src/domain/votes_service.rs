//! Vote recording for questions and answers.
//!
//! The target's existence is checked before the vote value is looked at, so
//! a bad vote against a missing row reports the missing row.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{AnswerRepository, QuestionRepository, VoteRepository};
use crate::domain::questions_service::{require_question, storage_failure};
use crate::domain::{AnswerId, Error, QuestionId, Vote, VoteInput};

const ANSWER_NOT_FOUND: &str = "Answer not found.";
const INVALID_VOTE: &str = "Invalid vote value.";

pub(crate) const QUESTION_VOTE_FAILED: &str = "Unable to vote on question.";
pub(crate) const ANSWER_VOTE_FAILED: &str = "Unable to vote on answer.";

fn parse_vote(input: &VoteInput) -> Result<Vote, Error> {
    input.parse().map_err(|err| {
        debug!(error = %err, "vote rejected");
        Error::invalid_request(INVALID_VOTE)
    })
}

/// Service behind the two `/vote` endpoints.
pub struct VotesService<
    Q: ?Sized = dyn QuestionRepository,
    A: ?Sized = dyn AnswerRepository,
    V: ?Sized = dyn VoteRepository,
> {
    questions: Arc<Q>,
    answers: Arc<A>,
    votes: Arc<V>,
}

impl<Q: ?Sized, A: ?Sized, V: ?Sized> Clone for VotesService<Q, A, V> {
    fn clone(&self) -> Self {
        Self {
            questions: Arc::clone(&self.questions),
            answers: Arc::clone(&self.answers),
            votes: Arc::clone(&self.votes),
        }
    }
}

impl<Q: ?Sized, A: ?Sized, V: ?Sized> VotesService<Q, A, V> {
    pub fn new(questions: Arc<Q>, answers: Arc<A>, votes: Arc<V>) -> Self {
        Self {
            questions,
            answers,
            votes,
        }
    }
}

impl<Q, A, V> VotesService<Q, A, V>
where
    Q: QuestionRepository + ?Sized,
    A: AnswerRepository + ?Sized,
    V: VoteRepository + ?Sized,
{
    pub async fn vote_on_question(&self, id: QuestionId, input: &VoteInput) -> Result<(), Error> {
        require_question(&*self.questions, id, "vote_question", QUESTION_VOTE_FAILED).await?;
        let vote = parse_vote(input)?;
        self.votes
            .record_question_vote(id, vote)
            .await
            .map_err(storage_failure("vote_question", QUESTION_VOTE_FAILED))
    }

    pub async fn vote_on_answer(&self, id: AnswerId, input: &VoteInput) -> Result<(), Error> {
        self.answers
            .find_by_id(id)
            .await
            .map_err(storage_failure("vote_answer", ANSWER_VOTE_FAILED))?
            .ok_or_else(|| Error::not_found(ANSWER_NOT_FOUND))?;
        let vote = parse_vote(input)?;
        self.votes
            .record_answer_vote(id, vote)
            .await
            .map_err(storage_failure("vote_answer", ANSWER_VOTE_FAILED))
    }
}
