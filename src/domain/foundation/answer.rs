//! Answer value object: the three-valued yes/no/unsure domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// An answer to a question, given by a user or expected by a profile.
///
/// `Unsure` is a wildcard: it never conflicts with anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    Unsure,
}

impl Answer {
    /// All answer values, in counter order.
    pub const ALL: [Answer; 3] = [Answer::Yes, Answer::No, Answer::Unsure];

    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
            Answer::Unsure => "unsure",
        }
    }

    /// Returns true for `Yes` and `No`.
    pub fn is_definite(&self) -> bool {
        !matches!(self, Answer::Unsure)
    }

    /// Returns true when both answers are definite and they differ.
    pub fn is_definite_mismatch(&self, other: Answer) -> bool {
        self.is_definite() && other.is_definite() && *self != other
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Answer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Answer::Yes),
            "no" => Ok(Answer::No),
            "unsure" => Ok(Answer::Unsure),
            _ => Err(ValidationError::invalid_answer(s)),
        }
    }
}
