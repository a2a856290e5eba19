//! Per-question tally of answers observed on confirmed-correct matches.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Answer, ValidationError};

/// Answer counters for one (profile, question) pair.
///
/// # Invariants
///
/// - `total == yes + no + unsure`
/// - counters only ever grow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LearningCounts")]
pub struct LearningRecord {
    yes: u64,
    no: u64,
    unsure: u64,
    total: u64,
}

/// Unchecked wire shape of a learning record.
#[derive(Debug, Deserialize)]
struct LearningCounts {
    #[serde(default)]
    yes: u64,
    #[serde(default)]
    no: u64,
    #[serde(default)]
    unsure: u64,
    #[serde(default)]
    total: u64,
}

impl TryFrom<LearningCounts> for LearningRecord {
    type Error = ValidationError;

    fn try_from(raw: LearningCounts) -> Result<Self, Self::Error> {
        let sum = raw
            .yes
            .checked_add(raw.no)
            .and_then(|s| s.checked_add(raw.unsure))
            .ok_or_else(|| {
                ValidationError::invalid_format("learning", "answer counters overflow")
            })?;
        if sum != raw.total {
            return Err(ValidationError::invalid_format(
                "learning.total",
                format!("total {} does not equal counter sum {}", raw.total, sum),
            ));
        }
        Ok(Self {
            yes: raw.yes,
            no: raw.no,
            unsure: raw.unsure,
            total: raw.total,
        })
    }
}

impl LearningRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more observation of `answer`.
    pub fn record(&mut self, answer: Answer) {
        match answer {
            Answer::Yes => self.yes += 1,
            Answer::No => self.no += 1,
            Answer::Unsure => self.unsure += 1,
        }
        self.total += 1;
    }

    /// Returns the counter for `answer`.
    pub fn count(&self, answer: Answer) -> u64 {
        match answer {
            Answer::Yes => self.yes,
            Answer::No => self.no,
            Answer::Unsure => self.unsure,
        }
    }

    /// Returns the number of observations.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the most observed answer and its count.
    ///
    /// `Unsure` holds ties: `Yes` and then `No` only take over when they
    /// strictly exceed the current best.
    pub fn majority(&self) -> (Answer, u64) {
        let mut best = (Answer::Unsure, self.unsure);
        if self.yes > best.1 {
            best = (Answer::Yes, self.yes);
        }
        if self.no > best.1 {
            best = (Answer::No, self.no);
        }
        best
    }
}
