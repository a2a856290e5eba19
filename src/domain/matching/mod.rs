//! Matching Module - the adaptive questionnaire engine.
//!
//! Pure, stateless services over snapshots of the catalog. Nothing here
//! performs I/O; the application layer loads records through ports, calls
//! these functions, and persists what changed.
//!
//! # Components
//!
//! - `ProfileScorer` - affinity score per candidate
//! - `MatchResolver` - top candidate, confidence, runner-ups
//! - `QuestionSelector` - next question by yes/no split quality
//! - `ProfileLearner` - counters and expectation updates from confirmed matches
//!
//! # Determinism
//!
//! Every tie is broken by input order: candidate order for matches, list
//! order for questions.

mod answer_set;
mod errors;
mod learner;
mod resolver;
mod scorer;
mod selector;

pub use answer_set::AnswerSet;
pub use errors::MatchingError;
pub use learner::{
    AnswerRevision, LearningPolicy, LearningReport, ProfileLearner, DEFAULT_CONFIDENCE_THRESHOLD,
    DEFAULT_MIN_SAMPLES,
};
pub use resolver::{
    AlternativeMatch, MatchResolver, MatchResult, MatchSettings, DEFAULT_MAX_ALTERNATIVES,
    RAW_SCORE_WEIGHT, SEPARATION_EPSILON, SEPARATION_WEIGHT,
};
pub use scorer::{ProfileScorer, ScoreMap, EXACT_MATCH_POINTS, PARTIAL_MATCH_POINTS};
pub use selector::{AnswerTally, QuestionSelector};
