//! Match Resolver - top candidate, confidence, and runner-ups.

use serde::Serialize;
use std::collections::HashMap;

use super::{MatchingError, ScoreMap};
use crate::domain::catalog::Profile;
use crate::domain::foundation::ProfileId;

/// Default number of runner-ups reported with a match.
pub const DEFAULT_MAX_ALTERNATIVES: usize = 3;

/// Floor for the separation denominator when the top score is 0.
pub const SEPARATION_EPSILON: f64 = 0.001;

/// Weight of `top / answer_count` in the confidence blend.
pub const RAW_SCORE_WEIGHT: f64 = 0.7;

/// Weight of the top/runner-up separation in the confidence blend.
pub const SEPARATION_WEIGHT: f64 = 0.3;

/// Tunables for match resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    pub max_alternatives: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
        }
    }
}

/// A runner-up with its raw score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeMatch {
    pub profile: Profile,
    pub score: f64,
}

/// Outcome of resolving a score map.
///
/// `confidence` is a heuristic and is not clamped to `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub profile: Option<Profile>,
    pub confidence: f64,
    pub alternatives: Vec<AlternativeMatch>,
}

impl MatchResult {
    /// Result for an empty candidate pool.
    pub fn empty() -> Self {
        Self {
            profile: None,
            confidence: 0.0,
            alternatives: Vec::new(),
        }
    }

    pub fn profile_id(&self) -> Option<&ProfileId> {
        self.profile.as_ref().map(|p| p.id())
    }
}

/// Picks the best candidate from a score map.
#[derive(Debug, Clone, Default)]
pub struct MatchResolver {
    settings: MatchSettings,
}

impl MatchResolver {
    pub fn new(settings: MatchSettings) -> Self {
        Self { settings }
    }

    /// Resolves the top match.
    ///
    /// Candidates are ranked by score, highest first. Equal scores keep
    /// score-map order, which is candidate order when the map came from
    /// [`ProfileScorer::score`](super::ProfileScorer::score).
    ///
    /// # Confidence
    /// - one scored candidate: `top / max(answer_count, 1)`
    /// - otherwise: `0.7 · top / max(answer_count, 1) + 0.3 · (top − runner_up) / max(top, ε)`
    ///
    /// # Errors
    /// - `UnknownProfile` if the score map names a profile not in `profiles`
    pub fn resolve(
        &self,
        scores: &ScoreMap,
        profiles: &[Profile],
        answer_count: usize,
    ) -> Result<MatchResult, MatchingError> {
        let mut by_id: HashMap<&ProfileId, &Profile> = HashMap::with_capacity(profiles.len());
        for profile in profiles {
            by_id.entry(profile.id()).or_insert(profile);
        }

        let mut ranked: Vec<(&Profile, f64)> = Vec::with_capacity(scores.len());
        for (id, score) in scores.iter() {
            let profile = by_id
                .get(id)
                .copied()
                .ok_or_else(|| MatchingError::UnknownProfile(id.clone()))?;
            ranked.push((profile, score));
        }

        // sort_by is stable: ties stay in score-map order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let Some(&(top_profile, top_score)) = ranked.first() else {
            return Ok(MatchResult::empty());
        };

        let raw_score = top_score / answer_count.max(1) as f64;
        let confidence = match ranked.get(1) {
            Some(&(_, runner_up)) => {
                let separation = (top_score - runner_up) / top_score.max(SEPARATION_EPSILON);
                RAW_SCORE_WEIGHT * raw_score + SEPARATION_WEIGHT * separation
            }
            None => raw_score,
        };

        let alternatives = ranked
            .iter()
            .skip(1)
            .take(self.settings.max_alternatives)
            .map(|(profile, score)| AlternativeMatch {
                profile: (*profile).clone(),
                score: *score,
            })
            .collect();

        Ok(MatchResult {
            profile: Some(top_profile.clone()),
            confidence,
            alternatives,
        })
    }
}
