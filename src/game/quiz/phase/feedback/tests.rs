use super::*;
use crate::game::quiz::OutcomeKind;
use crate::output::mock::MockQuizOutput;

#[test]
fn reveals_outcome() {
    let outcome = Outcome {
        kind: OutcomeKind::Wrong,
        input: "went".to_owned(),
        answer: "go".to_owned(),
        full_sentence: "I go home".to_owned(),
        full_translation: "家に帰る".to_owned(),
    };
    let output = MockQuizOutput::new();
    let mut state = FeedbackState::new(outcome.clone(), 9, 10, output.clone());
    state.on_begin();
    assert_eq!(state.outcome(), &outcome);
    assert_eq!(
        output.flush(),
        [Message::AnswerReveal {
            index: 9,
            total: 10,
            outcome
        }]
    );
}
