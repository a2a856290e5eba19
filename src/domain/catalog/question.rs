//! Question catalog record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, Timestamp, ValidationError};

/// A yes/no/unsure probe used to discriminate among profiles.
///
/// Immutable apart from the `asked_count` usage counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id", alias = "id")]
    id: QuestionId,

    text: String,

    /// Ordering hint, used to pick the opening question.
    #[serde(default)]
    order: i32,

    #[serde(default)]
    asked_count: u64,

    #[serde(default)]
    created_at: Timestamp,

    #[serde(default)]
    updated_at: Timestamp,
}

impl Question {
    /// Creates a new question.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text is blank
    pub fn new(id: QuestionId, text: impl Into<String>, order: i32) -> Result<Self, ValidationError> {
        let question = Self {
            id,
            text: text.into(),
            order,
            asked_count: 0,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        };
        question.validate()?;
        Ok(question)
    }

    /// Checks the invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(())
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn asked_count(&self) -> u64 {
        self.asked_count
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Counts one more time this question was put to a user.
    pub fn record_asked(&mut self) {
        self.asked_count += 1;
        self.updated_at = Timestamp::now();
    }

    /// Clears the usage counter, used when seeding a fresh catalog.
    pub fn reset_usage(&mut self) {
        self.asked_count = 0;
    }
}
