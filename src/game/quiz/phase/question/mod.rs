use crate::game::quiz::definition::Record;
use crate::game::quiz::State;
use crate::output::{Message, QuizOutput};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutcomeKind {
    Correct,
    Wrong,
    Skipped,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    /// What the user typed, untrimmed. Empty for skips.
    pub input: String,
    pub answer: String,
    pub full_sentence: String,
    pub full_translation: String,
}

#[derive(Debug)]
pub struct QuestionState<O> {
    record: Record,
    index: usize,
    total: usize,
    output: O,
}

impl<O: QuizOutput> QuestionState<O> {
    pub fn new(record: Record, index: usize, total: usize, output: O) -> Self {
        QuestionState {
            record,
            index,
            total,
            output,
        }
    }

    /// Blank submissions count as skips.
    pub fn submit(&self, input: &str) -> Outcome {
        let kind = if input.trim().is_empty() {
            OutcomeKind::Skipped
        } else if self.record.is_guess_correct(input) {
            OutcomeKind::Correct
        } else {
            OutcomeKind::Wrong
        };
        self.outcome(kind, input)
    }

    pub fn skip(&self) -> Outcome {
        self.outcome(OutcomeKind::Skipped, "")
    }

    fn outcome(&self, kind: OutcomeKind, input: &str) -> Outcome {
        Outcome {
            kind,
            input: input.to_owned(),
            answer: self.record.answer.clone(),
            full_sentence: self.record.full_sentence(),
            full_translation: self.record.full_translation.clone(),
        }
    }
}

impl<O: QuizOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuestionBegins {
            index: self.index,
            total: self.total,
            record: self.record.clone(),
        });
    }
}
