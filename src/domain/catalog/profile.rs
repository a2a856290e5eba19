//! Customer profile catalog record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::LearningRecord;
use crate::domain::foundation::{Answer, ProfileId, QuestionId, Timestamp, ValidationError};

/// A candidate customer archetype.
///
/// # Invariants
///
/// - `answers` is sparse: a missing entry means "no expectation", not `Unsure`
/// - `learning` entries are created lazily and never removed
/// - name, description, attributes and recommendations are opaque to matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", alias = "id")]
    id: ProfileId,

    name: String,

    #[serde(default)]
    description: String,

    #[serde(default)]
    attributes: BTreeMap<String, serde_json::Value>,

    #[serde(default)]
    marketing_recommendations: Vec<String>,

    /// Expected answer per question.
    #[serde(default)]
    answers: BTreeMap<QuestionId, Answer>,

    /// Observed answers from confirmed-correct matches.
    #[serde(default)]
    learning: BTreeMap<QuestionId, LearningRecord>,

    /// Number of sessions this profile has been the result of.
    #[serde(default)]
    frequency: u64,

    #[serde(default)]
    created_at: Timestamp,

    #[serde(default)]
    updated_at: Timestamp,
}

impl Profile {
    /// Creates a profile with no expected answers.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    pub fn new(id: ProfileId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let now = Timestamp::now();
        let profile = Self {
            id,
            name: name.into(),
            description: String::new(),
            attributes: BTreeMap::new(),
            marketing_recommendations: Vec::new(),
            answers: BTreeMap::new(),
            learning: BTreeMap::new(),
            frequency: 0,
            created_at: now,
            updated_at: now,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks the invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(())
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn with_recommendation(mut self, tip: impl Into<String>) -> Self {
        self.marketing_recommendations.push(tip.into());
        self
    }

    /// Adds an expected answer.
    pub fn with_answer(mut self, question_id: QuestionId, answer: Answer) -> Self {
        self.answers.insert(question_id, answer);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn attributes(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.attributes
    }

    pub fn marketing_recommendations(&self) -> &[String] {
        &self.marketing_recommendations
    }

    pub fn answers(&self) -> &BTreeMap<QuestionId, Answer> {
        &self.answers
    }

    /// Returns the expected answer for a question, if the profile has one.
    pub fn expected_answer(&self, question_id: &QuestionId) -> Option<Answer> {
        self.answers.get(question_id).copied()
    }

    pub fn learning(&self) -> &BTreeMap<QuestionId, LearningRecord> {
        &self.learning
    }

    pub fn learning_record(&self, question_id: &QuestionId) -> Option<&LearningRecord> {
        self.learning.get(question_id)
    }

    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Overwrites the expected answer for a question.
    pub fn set_expected_answer(&mut self, question_id: QuestionId, answer: Answer) {
        self.answers.insert(question_id, answer);
        self.updated_at = Timestamp::now();
    }

    /// Returns the learning record for a question, creating an empty one.
    pub fn learning_entry(&mut self, question_id: &QuestionId) -> &mut LearningRecord {
        self.learning.entry(question_id.clone()).or_default()
    }

    /// Counts one more session resolved to this profile.
    pub fn record_match(&mut self) {
        self.frequency += 1;
        self.updated_at = Timestamp::now();
    }

    /// Marks the profile as modified.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    /// Clears learning data and frequency, used when seeding a fresh catalog.
    pub fn reset_usage(&mut self) {
        self.learning.clear();
        self.frequency = 0;
    }
}
