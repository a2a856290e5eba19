//! Profile Scorer - affinity between a session's answers and each candidate.

use serde::Serialize;

use super::AnswerSet;
use crate::domain::catalog::Profile;
use crate::domain::foundation::{Answer, ProfileId};

/// Points for an answer equal to the profile's expectation.
pub const EXACT_MATCH_POINTS: f64 = 1.0;

/// Points when either side is `Unsure` and the answers differ.
pub const PARTIAL_MATCH_POINTS: f64 = 0.5;

/// Score per candidate, kept in candidate order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreMap {
    entries: Vec<(ProfileId, f64)>,
}

impl ScoreMap {
    /// Builds a score map from (profile, score) pairs in candidate order.
    pub fn from_entries(entries: Vec<(ProfileId, f64)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, profile_id: &ProfileId) -> Option<f64> {
        self.entries
            .iter()
            .find(|(id, _)| id == profile_id)
            .map(|(_, score)| *score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in candidate order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProfileId, f64)> {
        self.entries.iter().map(|(id, score)| (id, *score))
    }
}

/// Scoring functions.
pub struct ProfileScorer;

impl ProfileScorer {
    /// Scores every candidate against the answers.
    ///
    /// # Algorithm
    /// For each answered question and each profile with an expectation for it:
    /// exact match +1, either side unsure +0.5, yes/no mismatch +0.
    ///
    /// # Edge Cases
    /// - No answers: every candidate scores 0
    /// - Profile without expectations: scores 0, still present
    /// - No candidates: empty map
    pub fn score(answers: &AnswerSet, profiles: &[Profile]) -> ScoreMap {
        let entries = profiles
            .iter()
            .map(|profile| (profile.id().clone(), Self::score_profile(answers, profile)))
            .collect();
        ScoreMap::from_entries(entries)
    }

    /// Score of a single candidate.
    pub fn score_profile(answers: &AnswerSet, profile: &Profile) -> f64 {
        answers
            .iter()
            .filter_map(|(question_id, given)| {
                profile
                    .expected_answer(question_id)
                    .map(|expected| Self::affinity(given, expected))
            })
            .sum()
    }

    /// Points contributed by one answered question.
    pub fn affinity(given: Answer, expected: Answer) -> f64 {
        if given == expected {
            EXACT_MATCH_POINTS
        } else if given == Answer::Unsure || expected == Answer::Unsure {
            PARTIAL_MATCH_POINTS
        } else {
            0.0
        }
    }
}
