use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a start or restart action.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Quiz file not found: {0:?}")]
    SourceNotFound(PathBuf),
    #[error(
        "Quiz file is missing required columns: {} (found: {})",
        .missing.join(", "),
        .found.join(", ")
    )]
    Schema {
        missing: Vec<String>,
        found: Vec<String>,
    },
    #[error("Only {available} valid questions are available, {required} are needed")]
    InsufficientPool { available: usize, required: usize },
    #[error("Invalid id range: {min} is greater than {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("Could not read quiz file: {0}")]
    Io(#[from] io::Error),
    #[error("Could not parse quiz file: {0}")]
    Csv(#[from] csv::Error),
}
