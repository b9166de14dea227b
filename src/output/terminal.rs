use itertools::Itertools;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;
use tracing::error;

use crate::game::quiz::OutcomeKind;
use crate::output::{Message, QuizOutput};


pub struct TerminalOutput<W> {
    writer: Arc<Mutex<W>>,
}

impl<W> Clone for TerminalOutput<W> {
    fn clone(&self) -> Self {
        TerminalOutput {
            writer: self.writer.clone(),
        }
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        TerminalOutput {
            writer: Arc::new(Mutex::new(writer)),
        }
    }
}

pub fn interpret_message(message: &Message) -> String {
    use Message::*;
    match message {
        ActionFailed(reason) => format!("⚠️ {}", reason),
        AnswerReveal { index, total, outcome } => {
            let mut text = format!("Q{}/{} result: ", index + 1, total);
            match outcome.kind {
                OutcomeKind::Correct => text += "✅ Correct!",
                OutcomeKind::Skipped => text += "⏭️ Skipped",
                OutcomeKind::Wrong => {
                    text += "❌ Wrong";
                    text += &format!("\n  You:    {}", outcome.input);
                    text += &format!("\n  Answer: {}", outcome.answer);
                }
            }
            text += &format!("\n\nEN: {}\nJA: {}", outcome.full_sentence, outcome.full_translation);
            text += "\n\nPress Enter (or `!next`) to continue.";
            text
        }
        Help => "📋 Commands\n  !start            begin a quiz\n  <text>            answer the current question\n  !skip             skip the current question\n  !next             move on after an answer\n  !restart          play again with new questions\n  !reset            drop the current quiz\n  !range MIN MAX    only use questions whose id is in MIN..=MAX\n  !range off        use every question\n  !rejected         list rows skipped while loading\n  !quit             leave\nAn empty line continues to the next step. During a question, any other `!` line is taken as an answer.".into(),
        QuestionBegins { index, total, record } => {
            let mut text = format!("Q{}/{}", index + 1, total);
            if !record.prompt_native.is_empty() {
                text += &format!("\nJA: {}", record.prompt_native);
            }
            text += &format!("\nEN: {}", record.cloze_text);
            text += "\nType the word for the blank (case is ignored), or press Enter to skip.";
            text
        }
        QuizResults { tally, total } => format!(
            "🎊 Results\n- Correct: {}\n- Wrong: {}\n- Skipped: {}\n- Total: {}\n\nPress Enter (or `!restart`) for another round.",
            tally.correct, tally.wrong, tally.skipped, total
        ),
        QuizRules { question_count, id_range } => {
            let mut text = format!("📝 Vocabulary quiz: {} random questions per round.", question_count);
            if let Some(range) = id_range {
                text += &format!("\nOnly questions with ids {} are used.", range);
            }
            text += "\nPress Enter (or `!start`) to begin, `!help` for commands.";
            text
        }
        RangeCleared => "Every question is eligible again.".into(),
        RangeSet(range) => format!("Only questions with ids {} will be asked.", range),
        RejectedRows { rows, total } => {
            if rows.is_empty() {
                return "No rows were skipped while loading.".into();
            }
            let mut text = format!("Rows skipped while loading ({}):\n", total);
            text += &rows
                .iter()
                .map(|row| format!("- ID={}: {}", row.id, row.reason))
                .join("\n");
            if rows.len() < *total {
                text += &format!("\n... and {} more", total - rows.len());
            }
            text
        }
        SessionDiscarded { answered, total } => format!(
            "The quiz was abandoned after {} of {} questions, its results were discarded.",
            answered, total
        ),
        SessionReset => "The quiz was reset.".into(),
    }
}

impl<W: Write> QuizOutput for TerminalOutput<W> {
    fn say(&self, message: &Message) {
        let content = interpret_message(message);
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{}\n", content).and_then(|_| writer.flush()) {
            error!("Error writing message: {}", e);
        }
    }
}
