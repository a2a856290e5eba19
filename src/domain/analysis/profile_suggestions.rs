//! Profile Suggestions - archetypes users named when rejecting a match.

use serde::Serialize;

use crate::domain::session::QuizSession;

/// Mentions after which a suggested profile is worth creating.
pub const SUGGESTION_RECOMMEND_THRESHOLD: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSuggestion {
    /// Normalized (trimmed, lowercased) name.
    pub name: String,
    pub mentions: u64,
    pub recommended: bool,
}

/// Profile suggestion analysis functions.
pub struct SuggestionAnalyzer;

impl SuggestionAnalyzer {
    /// Counts suggested profile names from sessions marked incorrect.
    ///
    /// Names are compared after trimming and lowercasing. Results are ordered
    /// by mentions, most first; ties keep first-seen order.
    pub fn tally(sessions: &[QuizSession]) -> Vec<ProfileSuggestion> {
        let mut suggestions: Vec<ProfileSuggestion> = Vec::new();

        let names = sessions
            .iter()
            .filter_map(|s| s.feedback())
            .filter(|f| !f.is_correct)
            .filter_map(|f| f.suggested_profile.as_deref())
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty());

        for name in names {
            match suggestions.iter_mut().find(|s| s.name == name) {
                Some(existing) => existing.mentions += 1,
                None => suggestions.push(ProfileSuggestion {
                    name,
                    mentions: 1,
                    recommended: false,
                }),
            }
        }

        for suggestion in &mut suggestions {
            suggestion.recommended = suggestion.mentions >= SUGGESTION_RECOMMEND_THRESHOLD;
        }
        suggestions.sort_by(|a, b| b.mentions.cmp(&a.mentions));
        suggestions
    }
}
