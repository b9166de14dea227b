use super::*;
use crate::output::mock::MockQuizOutput;
use crate::output::Message;

fn records(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|id| Record {
            id: id.to_string(),
            numeric_id: Some(id as i64),
            prompt_native: String::new(),
            cloze_text: format!("Word ____ number {}", id),
            answer: format!("w{}", id),
            full_translation: format!("単語 {}", id),
        })
        .collect()
}

fn quiz(count: usize) -> (Quiz<MockQuizOutput>, MockQuizOutput) {
    let output = MockQuizOutput::new();
    let quiz = Quiz::new(records(count), output.clone()).unwrap();
    (quiz, output)
}

fn assert_counts_match_cursor(quiz: &Quiz<MockQuizOutput>) {
    match quiz.phase() {
        QuizPhase::Feedback => assert_eq!(quiz.answered(), quiz.cursor() + 1),
        _ => assert_eq!(quiz.answered(), quiz.cursor()),
    }
}

#[test]
fn starts_on_first_question() {
    let (quiz, output) = quiz(10);
    assert_eq!(quiz.phase(), QuizPhase::Question);
    assert_eq!(quiz.cursor(), 0);
    assert_eq!(quiz.tally(), Tally::default());
    assert!(quiz.last_outcome().is_none());
    assert_eq!(
        output.flush(),
        [Message::QuestionBegins {
            index: 0,
            total: 10,
            record: records(10)[0].clone()
        }]
    );
}

#[test]
fn cannot_start_without_questions() {
    assert!(Quiz::new(Vec::new(), MockQuizOutput::new()).is_err());
}

#[test]
fn submit_moves_to_feedback() {
    let (mut quiz, output) = quiz(10);
    output.flush();
    let outcome = quiz.submit(" W1 ").unwrap();
    assert_eq!(outcome.kind, OutcomeKind::Correct);
    assert_eq!(quiz.phase(), QuizPhase::Feedback);
    assert_eq!(quiz.last_outcome(), Some(&outcome));
    assert_eq!(quiz.tally().correct, 1);
    assert_eq!(
        output.flush(),
        [Message::AnswerReveal {
            index: 0,
            total: 10,
            outcome
        }]
    );
}

#[test]
fn empty_submit_is_counted_as_skip() {
    let (mut quiz, _) = quiz(10);
    quiz.submit("").unwrap();
    assert_eq!(
        quiz.tally(),
        Tally {
            correct: 0,
            wrong: 0,
            skipped: 1
        }
    );
}

#[test]
fn advance_clears_outcome_and_asks_next_question() {
    let (mut quiz, output) = quiz(10);
    quiz.skip().unwrap();
    output.flush();
    quiz.advance().unwrap();
    assert_eq!(quiz.cursor(), 1);
    assert_eq!(quiz.phase(), QuizPhase::Question);
    assert!(quiz.last_outcome().is_none());
    assert_eq!(quiz.current_record(), Some(&records(10)[1]));
    assert_eq!(
        output.flush(),
        [Message::QuestionBegins {
            index: 1,
            total: 10,
            record: records(10)[1].clone()
        }]
    );
}

#[test]
fn actions_in_wrong_phase_fail_without_side_effects() {
    let (mut quiz, _) = quiz(10);
    assert!(quiz.advance().is_err());
    assert_eq!(quiz.cursor(), 0);

    quiz.submit("nope").unwrap();
    assert!(quiz.submit("w1").is_err());
    assert!(quiz.skip().is_err());
    assert_eq!(
        quiz.tally(),
        Tally {
            correct: 0,
            wrong: 1,
            skipped: 0
        }
    );
}

#[test]
fn counters_track_cursor_through_a_whole_quiz() {
    let (mut quiz, output) = quiz(10);
    let answers = [
        "w1", "W2", " w3 ", "w4", "w5", "w6", "wrong", "also wrong", "nope", "",
    ];
    for answer in answers.iter() {
        assert_counts_match_cursor(&quiz);
        quiz.submit(answer).unwrap();
        assert_counts_match_cursor(&quiz);
        quiz.advance().unwrap();
        assert_counts_match_cursor(&quiz);
    }

    assert!(quiz.is_over());
    assert_eq!(quiz.cursor(), 10);
    let tally = Tally {
        correct: 6,
        wrong: 3,
        skipped: 1,
    };
    assert_eq!(quiz.tally(), tally);
    assert_eq!(output.last_message(), Some(Message::QuizResults { tally, total: 10 }));
    assert!(quiz.submit("w1").is_err());
    assert!(quiz.advance().is_err());
}

#[test]
fn single_question_quiz_finishes_after_one_advance() {
    let (mut quiz, _) = quiz(1);
    quiz.skip().unwrap();
    quiz.advance().unwrap();
    assert!(quiz.is_over());
    assert!(quiz.current_record().is_none());
}
