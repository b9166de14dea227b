use rand::seq::index;
use rand::Rng;
use std::fmt;

use crate::game::error::QuizError;
use crate::game::quiz::definition::Record;


/// Inclusive bounds on a record's numeric id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IdRange {
    min: i64,
    max: i64,
}

impl IdRange {
    pub fn new(min: i64, max: i64) -> Result<Self, QuizError> {
        if min > max {
            return Err(QuizError::InvalidRange { min, max });
        }
        Ok(IdRange { min, max })
    }

    pub fn contains(&self, id: i64) -> bool {
        self.min <= id && id <= self.max
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Draws `count` distinct records in random order. Records without a numeric id
/// never match a range.
pub fn sample<R: Rng + ?Sized>(
    records: &[Record],
    count: usize,
    range: Option<IdRange>,
    rng: &mut R,
) -> Result<Vec<Record>, QuizError> {
    let pool: Vec<&Record> = records
        .iter()
        .filter(|record| match range {
            Some(range) => record.numeric_id.map_or(false, |id| range.contains(id)),
            None => true,
        })
        .collect();

    if pool.len() < count {
        return Err(QuizError::InsufficientPool {
            available: pool.len(),
            required: count,
        });
    }

    Ok(index::sample(rng, pool.len(), count)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect())
}
