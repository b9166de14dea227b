use crate::game::quiz::definition::{Record, Rejection};
use crate::game::quiz::sample::IdRange;
use crate::game::quiz::{Outcome, Tally};

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    ActionFailed(String),
    AnswerReveal {
        index: usize,
        total: usize,
        outcome: Outcome,
    },
    Help,
    QuestionBegins {
        index: usize,
        total: usize,
        record: Record,
    },
    QuizResults {
        tally: Tally,
        total: usize,
    },
    QuizRules {
        question_count: usize,
        id_range: Option<IdRange>,
    },
    RangeCleared,
    RangeSet(IdRange),
    RejectedRows {
        rows: Vec<Rejection>,
        total: usize,
    },
    SessionDiscarded {
        answered: usize,
        total: usize,
    },
    SessionReset,
}

pub trait QuizOutput: Clone {
    fn say(&self, message: &Message);
}
