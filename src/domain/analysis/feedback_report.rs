//! Feedback Report - all feedback analyses over one snapshot.

use serde::Serialize;

use super::{
    MismatchAnalyzer, MismatchGroup, ProfileSuggestion, QuestionEffectivenessAnalyzer,
    QuestionStats, SuggestionAnalyzer, MIN_ASKED_FOR_RANKING,
};
use crate::domain::catalog::Question;
use crate::domain::foundation::Timestamp;
use crate::domain::session::QuizSession;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackReport {
    pub generated_at: Timestamp,
    /// Completed sessions with feedback that went into the report.
    pub reviewed_sessions: usize,
    pub incorrect_sessions: usize,
    /// Every catalog question, in catalog order.
    pub questions: Vec<QuestionStats>,
    /// Questions asked often enough to rank, most effective first.
    pub ranked_questions: Vec<QuestionStats>,
    pub mismatches: Vec<MismatchGroup>,
    pub suggestions: Vec<ProfileSuggestion>,
}

impl FeedbackReport {
    /// Suggestions with enough mentions to warrant a new profile.
    pub fn recommended_profiles(&self) -> impl Iterator<Item = &ProfileSuggestion> {
        self.suggestions.iter().filter(|s| s.recommended)
    }
}

/// Runs every feedback analysis.
pub struct FeedbackAnalyzer;

impl FeedbackAnalyzer {
    /// Builds the report from completed sessions carrying feedback.
    ///
    /// Sessions that are still active or have no feedback are ignored.
    pub fn analyze(questions: &[Question], sessions: &[QuizSession]) -> FeedbackReport {
        let reviewed: Vec<QuizSession> = sessions
            .iter()
            .filter(|s| s.is_completed() && s.feedback().is_some())
            .cloned()
            .collect();

        let incorrect_sessions = reviewed
            .iter()
            .filter(|s| s.feedback().is_some_and(|f| !f.is_correct))
            .count();

        let stats = QuestionEffectivenessAnalyzer::compute(questions, &reviewed);
        let ranked_questions = QuestionEffectivenessAnalyzer::rank(&stats, MIN_ASKED_FOR_RANKING);

        FeedbackReport {
            generated_at: Timestamp::now(),
            reviewed_sessions: reviewed.len(),
            incorrect_sessions,
            questions: stats,
            ranked_questions,
            mismatches: MismatchAnalyzer::group(&reviewed),
            suggestions: SuggestionAnalyzer::tally(&reviewed),
        }
    }
}
