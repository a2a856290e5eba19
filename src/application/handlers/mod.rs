//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod catalog;
pub mod feedback;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use analysis::AnalyzeFeedbackHandler;
pub use catalog::{SeedCatalogHandler, SeedCatalogResult};
pub use feedback::{
    LearnFromFeedbackCommand, LearnFromFeedbackHandler, SubmitFeedbackCommand,
    SubmitFeedbackHandler, SubmitFeedbackResult,
};
pub use session::{
    CompleteSessionCommand, CompleteSessionHandler, CompleteSessionResult, GetSessionHandler,
    GetSessionQuery, NextQuestion, NextQuestionHandler, NextQuestionQuery, RecordAnswerCommand,
    RecordAnswerHandler, RecordAnswerResult, SessionDetails, StartSessionCommand,
    StartSessionHandler, TerminationReason,
};
