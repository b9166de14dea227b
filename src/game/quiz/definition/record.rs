use serde::Deserialize;
use std::fmt;

pub const BLANK_MARKER: &str = "____";
const FULL_WIDTH_UNDERSCORE: char = '\u{FF3F}';

/// Trims surrounding whitespace and lower-cases.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn normalize_blank_marker(cloze: &str) -> String {
    cloze.replace(FULL_WIDTH_UNDERSCORE, "_")
}

/// Fills every blank of a cloze sentence with the answer.
pub fn build_full_en(cloze: &str, answer: &str) -> String {
    normalize_blank_marker(cloze).replace(BLANK_MARKER, answer)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RejectReason {
    MissingBlankMarker,
    EmptyAnswer,
    EmptyTranslation,
    NonNumericId,
    Unreadable,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RejectReason::MissingBlankMarker => "missing blank marker",
            RejectReason::EmptyAnswer => "empty answer",
            RejectReason::EmptyTranslation => "empty translation",
            RejectReason::NonNumericId => "non-numeric id",
            RejectReason::Unreadable => "unreadable row",
        };
        f.write_str(reason)
    }
}

/// One row of the quiz file, exactly as the CSV reader hands it over.
#[derive(Debug, Default, Deserialize)]
pub struct RawRecord {
    pub id: Option<String>,
    pub ja: Option<String>,
    pub cloze_en: Option<String>,
    pub answer: Option<String>,
    pub full_ja: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub id: String,
    pub numeric_id: Option<i64>,
    pub prompt_native: String,
    pub cloze_text: String,
    pub answer: String,
    pub full_translation: String,
}

impl Record {
    pub fn is_guess_correct(&self, guess: &str) -> bool {
        normalize(guess) == normalize(&self.answer)
    }

    pub fn full_sentence(&self) -> String {
        build_full_en(&self.cloze_text, &self.answer)
    }
}

fn cell(value: Option<String>) -> String {
    value.map(|v| v.trim().to_owned()).unwrap_or_default()
}

impl RawRecord {
    pub fn id(&self) -> String {
        self.id.as_deref().map(str::trim).unwrap_or_default().to_owned()
    }

    pub fn is_blank(&self) -> bool {
        [&self.id, &self.ja, &self.cloze_en, &self.answer, &self.full_ja]
            .iter()
            .all(|v| v.as_deref().map_or(true, |v| v.trim().is_empty()))
    }

    /// Validates the row. The first failing check decides the reason.
    pub fn into_record(self, require_numeric_id: bool) -> Result<Record, RejectReason> {
        let id = cell(self.id);
        let cloze_text = normalize_blank_marker(&cell(self.cloze_en));
        let answer = cell(self.answer);
        let full_translation = cell(self.full_ja);

        if !cloze_text.contains(BLANK_MARKER) {
            return Err(RejectReason::MissingBlankMarker);
        }
        if answer.is_empty() {
            return Err(RejectReason::EmptyAnswer);
        }
        if full_translation.is_empty() {
            return Err(RejectReason::EmptyTranslation);
        }
        let numeric_id = id.parse::<i64>().ok();
        if require_numeric_id && numeric_id.is_none() {
            return Err(RejectReason::NonNumericId);
        }

        Ok(Record {
            id,
            numeric_id,
            prompt_native: cell(self.ja),
            cloze_text,
            answer,
            full_translation,
        })
    }
}
