use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::game::error::QuizError;

pub mod record;

pub use record::{RawRecord, Record, RejectReason};


pub const REQUIRED_COLUMNS: [&str; 5] = ["id", "ja", "cloze_en", "answer", "full_ja"];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rejection {
    pub id: String,
    pub reason: RejectReason,
}

#[derive(Debug)]
pub struct QuizDefinition {
    records: Vec<Record>,
    rejected: Vec<Rejection>,
}

impl QuizDefinition {
    pub fn open(source: &Path, require_numeric_ids: bool) -> Result<QuizDefinition, QuizError> {
        if !source.exists() {
            return Err(QuizError::SourceNotFound(source.to_path_buf()));
        }
        let file = File::open(source)?;
        let definition = Self::from_reader(file, require_numeric_ids)?;
        info!(
            source = %source.display(),
            records = definition.records.len(),
            rejected = definition.rejected.len(),
            "Loaded quiz file"
        );
        Ok(definition)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        require_numeric_ids: bool,
    ) -> Result<QuizDefinition, QuizError> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        check_schema(&headers)?;

        let mut records = Vec::new();
        let mut rejected = Vec::new();
        for row in csv_reader.records() {
            let raw_record: RawRecord = match row.and_then(|row| row.deserialize(Some(&headers))) {
                Ok(raw_record) => raw_record,
                Err(e) => {
                    let rejection = unreadable_row(e)?;
                    debug!(id = %rejection.id, "Skipping unreadable quiz row");
                    rejected.push(rejection);
                    continue;
                }
            };
            if raw_record.is_blank() {
                continue;
            }
            let id = raw_record.id();
            match raw_record.into_record(require_numeric_ids) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    debug!(id = %id, %reason, "Skipping quiz row");
                    rejected.push(Rejection { id, reason });
                }
            }
        }

        Ok(QuizDefinition { records, rejected })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }
}

/// Rows that cannot be decoded have no usable id, so they are reported by line.
/// Anything else the reader fails on aborts the load.
fn unreadable_row(error: csv::Error) -> Result<Rejection, QuizError> {
    let line = match error.kind() {
        ErrorKind::Utf8 { pos, .. } | ErrorKind::Deserialize { pos, .. } => {
            Some(pos.as_ref().map(|p| p.line()))
        }
        _ => None,
    };
    let line = match line {
        Some(line) => line,
        None => return Err(error.into()),
    };
    let id = match line {
        Some(line) => format!("line {}", line),
        None => "unknown line".to_owned(),
    };
    Ok(Rejection {
        id,
        reason: RejectReason::Unreadable,
    })
}

fn check_schema(headers: &StringRecord) -> Result<(), QuizError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(QuizError::Schema {
        missing,
        found: headers.iter().map(str::to_owned).collect(),
    })
}
