use crate::game::quiz::{State, Tally};
use crate::output::{Message, QuizOutput};


#[derive(Debug)]
pub struct ResultsState<O> {
    tally: Tally,
    total: usize,
    output: O,
}

impl<O> ResultsState<O> {
    pub fn new(tally: Tally, total: usize, output: O) -> Self {
        ResultsState {
            tally,
            total,
            output,
        }
    }
}

impl<O: QuizOutput> State for ResultsState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuizResults {
            tally: self.tally,
            total: self.total,
        });
    }
}
