use anyhow::*;
use lazy_static::lazy_static;
use regex::Regex;

use crate::game::quiz::sample::IdRange;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref RANGE_COMMAND_REGEX: Regex =
        Regex::new(r"^!range\s+(-?\d+)\s+(-?\d+)$").unwrap();
    static ref RANGE_OFF_COMMAND_REGEX: Regex = Regex::new(r"^!range\s+off$").unwrap();
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Advance,
    Begin,
    ClearRange,
    /// An empty line: whatever comes next in the current phase.
    Continue,
    Help,
    Quit,
    Reset,
    Restart,
    SetRange(IdRange),
    ShowRejected,
    Skip,
    Submit(String),
    /// A `!` line matching no command. Answers may start with `!` too.
    Unrecognized(String),
}

/// Reads one line of terminal input. Lines that do not start with `!` are answers.
pub fn parse(line: &str) -> Result<Action> {
    let line = line.trim_end_matches(&['\n', '\r'][..]);
    let command = line.trim();
    if command.is_empty() {
        return Ok(Action::Continue);
    }
    if !command.starts_with('!') {
        return Ok(Action::Submit(line.to_owned()));
    }

    let command = command.to_lowercase();
    let action = match command.as_str() {
        "!start" | "!begin" => Action::Begin,
        "!skip" => Action::Skip,
        "!next" => Action::Advance,
        "!restart" => Action::Restart,
        "!reset" => Action::Reset,
        "!rejected" => Action::ShowRejected,
        "!help" => Action::Help,
        "!quit" | "!exit" => Action::Quit,
        _ if RANGE_OFF_COMMAND_REGEX.is_match(&command) => Action::ClearRange,
        _ => match RANGE_COMMAND_REGEX.captures(&command) {
            Some(captures) => {
                let min = captures[1].parse::<i64>().context("Range bounds must be integers")?;
                let max = captures[2].parse::<i64>().context("Range bounds must be integers")?;
                Action::SetRange(IdRange::new(min, max)?)
            }
            None if command.starts_with("!range") => {
                return Err(anyhow!("Usage: `!range MIN MAX` or `!range off`"))
            }
            None => Action::Unrecognized(line.to_owned()),
        },
    };
    Ok(action)
}
