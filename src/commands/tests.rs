use super::*;

#[test]
fn plain_text_is_an_answer() {
    assert_eq!(parse("  Go \n").unwrap(), Action::Submit("  Go ".to_owned()));
}

#[test]
fn empty_line_continues() {
    assert_eq!(parse("\n").unwrap(), Action::Continue);
    assert_eq!(parse("   ").unwrap(), Action::Continue);
}

#[test]
fn parses_commands() {
    assert_eq!(parse("!start").unwrap(), Action::Begin);
    assert_eq!(parse("!SKIP").unwrap(), Action::Skip);
    assert_eq!(parse("!next\r\n").unwrap(), Action::Advance);
    assert_eq!(parse("!restart").unwrap(), Action::Restart);
    assert_eq!(parse("!reset").unwrap(), Action::Reset);
    assert_eq!(parse("!rejected").unwrap(), Action::ShowRejected);
    assert_eq!(parse("!quit").unwrap(), Action::Quit);
    assert_eq!(parse("!help").unwrap(), Action::Help);
}

#[test]
fn parses_ranges() {
    assert_eq!(
        parse("!range 1 50").unwrap(),
        Action::SetRange(IdRange::new(1, 50).unwrap())
    );
    assert_eq!(
        parse("!range -5   -1").unwrap(),
        Action::SetRange(IdRange::new(-5, -1).unwrap())
    );
    assert_eq!(parse("!range off").unwrap(), Action::ClearRange);
}

#[test]
fn rejects_bad_ranges() {
    assert!(parse("!range 50 1").is_err());
    assert!(parse("!range one two").is_err());
    assert!(parse("!range 1").is_err());
}

#[test]
fn keeps_unknown_commands_verbatim() {
    assert_eq!(
        parse("!Dance now\n").unwrap(),
        Action::Unrecognized("!Dance now".to_owned())
    );
}
