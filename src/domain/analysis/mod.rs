//! Analysis Module - Pure domain services over collected feedback.
//!
//! Stateless functions that read completed sessions and the question catalog
//! and report on how well the questionnaire performs.
//!
//! # Components
//!
//! - `QuestionEffectivenessAnalyzer` - correct-match rate per question
//! - `MismatchAnalyzer` - recurring answers behind rejected matches
//! - `SuggestionAnalyzer` - profile names users proposed instead
//! - `FeedbackAnalyzer` - all of the above in one `FeedbackReport`
//!
//! No ports or adapters are needed since there is no I/O.

mod feedback_report;
mod mismatch_patterns;
mod profile_suggestions;
mod question_effectiveness;

pub use feedback_report::{FeedbackAnalyzer, FeedbackReport};
pub use mismatch_patterns::{
    AnswerPattern, MismatchAnalyzer, MismatchGroup, MAX_PATTERNS_PER_PROFILE,
    MIN_PATTERN_OCCURRENCES,
};
pub use profile_suggestions::{
    ProfileSuggestion, SuggestionAnalyzer, SUGGESTION_RECOMMEND_THRESHOLD,
};
pub use question_effectiveness::{
    QuestionEffectivenessAnalyzer, QuestionStats, MIN_ASKED_FOR_RANKING,
};
