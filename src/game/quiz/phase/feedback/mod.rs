use crate::game::quiz::{Outcome, State};
use crate::output::{Message, QuizOutput};

#[cfg(test)]
mod tests;

#[derive(Debug)]
pub struct FeedbackState<O> {
    outcome: Outcome,
    index: usize,
    total: usize,
    output: O,
}

impl<O: QuizOutput> FeedbackState<O> {
    pub fn new(outcome: Outcome, index: usize, total: usize, output: O) -> Self {
        FeedbackState {
            outcome,
            index,
            total,
            output,
        }
    }

    #[cfg(test)]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl<O: QuizOutput> State for FeedbackState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::AnswerReveal {
            index: self.index,
            total: self.total,
            outcome: self.outcome.clone(),
        });
    }
}
