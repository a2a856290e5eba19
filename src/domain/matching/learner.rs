//! Profile Learner - adapts a profile's expected answers from confirmed matches.

use serde::Serialize;

use super::AnswerSet;
use crate::domain::catalog::Profile;
use crate::domain::foundation::{Answer, QuestionId};

/// Observations needed before a learned answer may replace the stored one.
pub const DEFAULT_MIN_SAMPLES: u64 = 5;

/// Share of observations the majority answer needs, inclusive.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// When learned evidence is strong enough to overwrite an expectation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LearningPolicy {
    pub min_samples: u64,
    pub confidence_threshold: f64,
}

impl Default for LearningPolicy {
    fn default() -> Self {
        Self {
            min_samples: DEFAULT_MIN_SAMPLES,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

/// An expected answer rewritten from learned evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRevision {
    pub question_id: QuestionId,
    pub previous: Option<Answer>,
    pub revised: Answer,
    pub confidence: f64,
}

/// What one learning pass did to a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LearningReport {
    /// Learning records touched (one per answered question).
    pub records_updated: usize,
    /// Expected answers that changed value.
    pub revisions: Vec<AnswerRevision>,
}

/// Applies session answers to a profile's learning records.
#[derive(Debug, Clone, Default)]
pub struct ProfileLearner {
    policy: LearningPolicy,
}

impl ProfileLearner {
    pub fn new(policy: LearningPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LearningPolicy {
        &self.policy
    }

    /// Folds a confirmed-correct session's answers into `profile`.
    ///
    /// For each answer the matching counter and the total grow by one. Once
    /// the total reaches `min_samples`, the majority answer (unsure holds ties)
    /// overwrites the expectation when its share is at least
    /// `confidence_threshold`. Only `profile` is touched.
    pub fn apply(&self, profile: &mut Profile, answers: &AnswerSet) -> LearningReport {
        let mut report = LearningReport::default();

        for (question_id, given) in answers.iter() {
            let record = profile.learning_entry(question_id);
            record.record(given);
            report.records_updated += 1;

            if record.total() < self.policy.min_samples {
                continue;
            }

            let (majority, count) = record.majority();
            let confidence = count as f64 / record.total() as f64;
            if confidence < self.policy.confidence_threshold {
                continue;
            }

            let previous = profile.expected_answer(question_id);
            profile.set_expected_answer(question_id.clone(), majority);
            if previous != Some(majority) {
                report.revisions.push(AnswerRevision {
                    question_id: question_id.clone(),
                    previous,
                    revised: majority,
                    confidence,
                });
            }
        }

        if report.records_updated > 0 {
            profile.touch();
        }
        report
    }
}
