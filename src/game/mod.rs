use anyhow::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

pub mod error;
pub mod quiz;
pub mod settings;

use self::quiz::definition::{QuizDefinition, Rejection};
use self::quiz::sample::{self, IdRange};
use self::quiz::{Outcome, Quiz, QuizPhase};
use self::settings::Settings;
use crate::commands::Action;
use crate::output::{Message, QuizOutput};


enum Phase<O: QuizOutput> {
    Start,
    Quiz(Quiz<O>),
}

impl<O: QuizOutput> Phase<O> {
    fn name(&self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Quiz(quiz) => match quiz.phase() {
                QuizPhase::Question => "question",
                QuizPhase::Feedback => "feedback",
                QuizPhase::Done => "done",
            },
        }
    }
}

/// Owns the current quiz, if any, and everything that outlives it: settings,
/// the id range and the rows rejected by the last load.
pub struct Game<O: QuizOutput> {
    current_phase: Phase<O>,
    settings: Settings,
    rejected: Vec<Rejection>,
    rng: StdRng,
    output: O,
}

impl<O: QuizOutput> Game<O> {
    pub fn new(settings: Settings, output: O) -> Game<O> {
        Self::with_rng(settings, output, StdRng::from_entropy())
    }

    pub fn with_rng(settings: Settings, output: O, rng: StdRng) -> Game<O> {
        let mut game = Game {
            current_phase: Phase::Start,
            settings,
            rejected: Vec::new(),
            rng,
            output,
        };
        game.set_current_phase(Phase::Start);
        game
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        info!(phase = phase.name(), "Entering game phase");
        self.current_phase = phase;
        if let Phase::Start = self.current_phase {
            self.output.say(&Message::QuizRules {
                question_count: self.settings.question_count,
                id_range: self.settings.id_range,
            });
        }
    }

    pub fn quiz(&self) -> Option<&Quiz<O>> {
        match &self.current_phase {
            Phase::Start => None,
            Phase::Quiz(quiz) => Some(quiz),
        }
    }

    #[cfg(test)]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Rows rejected by the most recent successful load.
    #[cfg(test)]
    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }

    fn new_quiz(&mut self) -> Result<Quiz<O>> {
        let path = self.settings.quiz_path.clone();
        let range = self.settings.id_range;
        let definition = QuizDefinition::open(&path, range.is_some())
            .with_context(|| format!("Could not load quiz from {:?}", path))?;
        self.rejected = definition.rejected().to_vec();
        let items = sample::sample(
            definition.records(),
            self.settings.question_count,
            range,
            &mut self.rng,
        )?;
        Quiz::new(items, self.output.clone())
    }

    pub fn begin(&mut self) -> Result<()> {
        match self.current_phase {
            Phase::Start => {
                let quiz = self.new_quiz()?;
                self.set_current_phase(Phase::Quiz(quiz));
                Ok(())
            }
            Phase::Quiz(_) => Err(anyhow!(
                "A quiz is already in progress, use `!reset` to start over"
            )),
        }
    }

    /// Starts a new quiz once the current one is over. A failed restart keeps
    /// the finished quiz around.
    pub fn restart(&mut self) -> Result<()> {
        let is_over = match &self.current_phase {
            Phase::Quiz(quiz) => quiz.is_over(),
            Phase::Start => return Err(anyhow!("There is no quiz to restart, use `!start`")),
        };
        if !is_over {
            return Err(anyhow!("The current quiz is not over yet"));
        }
        let quiz = self.new_quiz()?;
        self.set_current_phase(Phase::Quiz(quiz));
        Ok(())
    }

    pub fn reset(&mut self) {
        self.output.say(&Message::SessionReset);
        self.set_current_phase(Phase::Start);
    }

    /// Drops an unfinished quiz. Its results are announced as discarded
    /// rather than silently lost.
    pub fn quit(&mut self) {
        if let Phase::Quiz(quiz) = &self.current_phase {
            if !quiz.is_over() {
                self.output.say(&Message::SessionDiscarded {
                    answered: quiz.answered(),
                    total: quiz.items().len(),
                });
            }
        }
        info!(phase = self.current_phase.name(), "Quitting");
        self.current_phase = Phase::Start;
    }

    pub fn submit(&mut self, input: &str) -> Result<Outcome> {
        match &mut self.current_phase {
            Phase::Quiz(quiz) => quiz.submit(input),
            Phase::Start => Err(anyhow!("There is no active question, use `!start`")),
        }
    }

    pub fn skip(&mut self) -> Result<Outcome> {
        match &mut self.current_phase {
            Phase::Quiz(quiz) => quiz.skip(),
            Phase::Start => Err(anyhow!("There is no active question, use `!start`")),
        }
    }

    pub fn advance(&mut self) -> Result<()> {
        match &mut self.current_phase {
            Phase::Quiz(quiz) => quiz.advance(),
            Phase::Start => Err(anyhow!("There is no active quiz, use `!start`")),
        }
    }

    pub fn set_range(&mut self, range: IdRange) -> Result<()> {
        match self.current_phase {
            Phase::Start => {
                self.settings.id_range = Some(range);
                self.output.say(&Message::RangeSet(range));
                Ok(())
            }
            Phase::Quiz(_) => Err(anyhow!("The id range can only be changed before a quiz starts")),
        }
    }

    pub fn clear_range(&mut self) -> Result<()> {
        match self.current_phase {
            Phase::Start => {
                self.settings.id_range = None;
                self.output.say(&Message::RangeCleared);
                Ok(())
            }
            Phase::Quiz(_) => Err(anyhow!("The id range can only be changed before a quiz starts")),
        }
    }

    pub fn show_rejected(&self) {
        let rows = self
            .rejected
            .iter()
            .take(self.settings.max_rejections_shown)
            .cloned()
            .collect();
        self.output.say(&Message::RejectedRows {
            rows,
            total: self.rejected.len(),
        });
    }

    pub fn handle(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Advance => self.advance(),
            Action::Begin => self.begin(),
            Action::ClearRange => self.clear_range(),
            Action::Continue => self.proceed(),
            Action::Help => {
                self.output.say(&Message::Help);
                Ok(())
            }
            Action::Quit => {
                self.quit();
                Ok(())
            }
            Action::Reset => {
                self.reset();
                Ok(())
            }
            Action::Restart => self.restart(),
            Action::SetRange(range) => self.set_range(range),
            Action::ShowRejected => {
                self.show_rejected();
                Ok(())
            }
            Action::Skip => self.skip().map(|_| ()),
            Action::Submit(input) => self.submit(&input).map(|_| ()),
            Action::Unrecognized(line) => match self.quiz().map(Quiz::phase) {
                Some(QuizPhase::Question) => self.submit(&line).map(|_| ()),
                _ => Err(anyhow!("Unknown command {}, use `!help`", line.trim())),
            },
        }
    }

    fn proceed(&mut self) -> Result<()> {
        match self.quiz().map(Quiz::phase) {
            None => self.begin(),
            Some(QuizPhase::Question) => self.skip().map(|_| ()),
            Some(QuizPhase::Feedback) => self.advance(),
            Some(QuizPhase::Done) => self.restart(),
        }
    }
}
