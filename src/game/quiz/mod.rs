use anyhow::*;
use tracing::info;

use self::definition::Record;
use self::phase::*;
use crate::output::QuizOutput;

pub mod definition;
mod phase;
pub mod sample;

pub use self::phase::{Outcome, OutcomeKind};

#[cfg(test)]
mod tests;

trait State {
    fn on_begin(&mut self);
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub correct: usize,
    pub wrong: usize,
    pub skipped: usize,
}

impl Tally {
    pub fn record(&mut self, kind: OutcomeKind) {
        match kind {
            OutcomeKind::Correct => self.correct += 1,
            OutcomeKind::Wrong => self.wrong += 1,
            OutcomeKind::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.correct + self.wrong + self.skipped
    }
}

/// Coarse view of where a quiz stands, for callers outside this module.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuizPhase {
    Question,
    Feedback,
    Done,
}

enum Phase<O> {
    Question(QuestionState<O>),
    Feedback(FeedbackState<O>),
    Results(ResultsState<O>),
}

impl<O: QuizOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Question(s) => s,
            Phase::Feedback(s) => s,
            Phase::Results(s) => s,
        }
    }

    fn name(&self) -> QuizPhase {
        match self {
            Phase::Question(_) => QuizPhase::Question,
            Phase::Feedback(_) => QuizPhase::Feedback,
            Phase::Results(_) => QuizPhase::Done,
        }
    }
}

/// One run through a fixed sample of records.
///
/// `cursor` points at the record being asked or revealed. Every answered
/// record bumps exactly one counter of the tally, so outside of the feedback
/// phase `tally.total() == cursor`. During feedback the current record is
/// already scored and the total is `cursor + 1`.
pub struct Quiz<O: QuizOutput> {
    items: Vec<Record>,
    cursor: usize,
    tally: Tally,
    current_phase: Phase<O>,
    output: O,
}

impl<O: QuizOutput> Quiz<O> {
    pub fn new(items: Vec<Record>, output: O) -> Result<Quiz<O>> {
        let first = items
            .first()
            .cloned()
            .context("Cannot start a quiz without questions")?;
        let state = QuestionState::new(first, 0, items.len(), output.clone());
        let mut quiz = Quiz {
            items,
            cursor: 0,
            tally: Tally::default(),
            current_phase: Phase::Question(state),
            output,
        };
        info!(questions = quiz.items.len(), "Starting quiz");
        quiz.current_phase.get_state().on_begin();
        Ok(quiz)
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn answered(&self) -> usize {
        self.tally.total()
    }

    pub fn phase(&self) -> QuizPhase {
        self.current_phase.name()
    }

    pub fn is_over(&self) -> bool {
        self.phase() == QuizPhase::Done
    }

    #[cfg(test)]
    pub fn current_record(&self) -> Option<&Record> {
        self.items.get(self.cursor)
    }

    #[cfg(test)]
    pub fn last_outcome(&self) -> Option<&Outcome> {
        match &self.current_phase {
            Phase::Feedback(state) => Some(state.outcome()),
            _ => None,
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        info!(phase = ?phase.name(), cursor = self.cursor, "Entering quiz phase");
        self.current_phase = phase;
        self.current_phase.get_state().on_begin();
    }

    pub fn submit(&mut self, input: &str) -> Result<Outcome> {
        match &self.current_phase {
            Phase::Question(state) => {
                let outcome = state.submit(input);
                self.reveal(outcome.clone());
                Ok(outcome)
            }
            _ => Err(anyhow!("There is no active question")),
        }
    }

    pub fn skip(&mut self) -> Result<Outcome> {
        match &self.current_phase {
            Phase::Question(state) => {
                let outcome = state.skip();
                self.reveal(outcome.clone());
                Ok(outcome)
            }
            _ => Err(anyhow!("There is no active question")),
        }
    }

    fn reveal(&mut self, outcome: Outcome) {
        self.tally.record(outcome.kind);
        let state = FeedbackState::new(outcome, self.cursor, self.items.len(), self.output.clone());
        self.set_current_phase(Phase::Feedback(state));
    }

    pub fn advance(&mut self) -> Result<()> {
        match &self.current_phase {
            Phase::Feedback(_) => (),
            Phase::Question(_) => return Err(anyhow!("Answer or skip the current question first")),
            Phase::Results(_) => return Err(anyhow!("The quiz is over")),
        }

        self.cursor += 1;
        let total = self.items.len();
        match self.items.get(self.cursor).cloned() {
            Some(record) => {
                let state = QuestionState::new(record, self.cursor, total, self.output.clone());
                self.set_current_phase(Phase::Question(state));
            }
            None => {
                let state = ResultsState::new(self.tally, total, self.output.clone());
                self.set_current_phase(Phase::Results(state));
            }
        }
        Ok(())
    }
}
