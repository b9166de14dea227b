use anyhow::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;

use crate::game::quiz::sample::IdRange;
use crate::game::settings::Settings;


pub const USAGE: &str = "Usage: cloze-quiz [QUIZ_PATH] [--questions N] [--range MIN MAX]";

lazy_static! {
    static ref ID_RANGE_REGEX: Regex = Regex::new(r"^\s*(-?\d+)\s*-\s*(-?\d+)\s*$").unwrap();
}

fn parse_question_count(value: &str) -> Result<usize> {
    let count = value
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid question count {:?}", value))?;
    if count == 0 {
        return Err(anyhow!("Question count must be at least 1"));
    }
    Ok(count)
}

fn parse_bound(value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid id bound {:?}", value))
}

/// Parses `MIN-MAX`, e.g. `1-50` or `-10--1`.
fn parse_id_range(value: &str) -> Result<IdRange> {
    let captures = ID_RANGE_REGEX
        .captures(value)
        .with_context(|| format!("Invalid id range {:?}, expected MIN-MAX", value))?;
    Ok(IdRange::new(
        parse_bound(&captures[1])?,
        parse_bound(&captures[2])?,
    )?)
}

/// Layers environment variables, then command line arguments, over the defaults.
pub fn load_settings<E, A>(env: E, mut args: A) -> Result<Settings>
where
    E: Fn(&str) -> Option<String>,
    A: Iterator<Item = String>,
{
    let mut settings = Settings::default();

    if let Some(path) = env("QUIZ_PATH") {
        settings.quiz_path = PathBuf::from(path);
    }
    if let Some(count) = env("QUIZ_QUESTIONS") {
        settings.question_count = parse_question_count(&count).context("QUIZ_QUESTIONS")?;
    }
    if let Some(range) = env("QUIZ_ID_RANGE") {
        settings.id_range = Some(parse_id_range(&range).context("QUIZ_ID_RANGE")?);
    }

    let mut path_seen = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--questions" => {
                let count = args.next().context("--questions needs a value")?;
                settings.question_count = parse_question_count(&count)?;
            }
            "--range" => {
                let min = args.next().context("--range needs MIN and MAX")?;
                let max = args.next().context("--range needs MIN and MAX")?;
                settings.id_range = Some(IdRange::new(parse_bound(&min)?, parse_bound(&max)?)?);
            }
            flag if flag.starts_with("--") => return Err(anyhow!("Unknown option {}", flag)),
            path if !path_seen => {
                settings.quiz_path = PathBuf::from(path);
                path_seen = true;
            }
            extra => return Err(anyhow!("Unexpected argument {}", extra)),
        }
    }

    Ok(settings)
}
