//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change sessions and profiles; query handlers only read.

pub mod handlers;

pub use handlers::{
    // Catalog
    SeedCatalogHandler, SeedCatalogResult,
    // Session handlers
    CompleteSessionCommand, CompleteSessionHandler, CompleteSessionResult,
    GetSessionHandler, GetSessionQuery, SessionDetails,
    NextQuestion, NextQuestionHandler, NextQuestionQuery, TerminationReason,
    RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult,
    StartSessionCommand, StartSessionHandler,
    // Feedback handlers
    LearnFromFeedbackCommand, LearnFromFeedbackHandler,
    SubmitFeedbackCommand, SubmitFeedbackHandler, SubmitFeedbackResult,
    // Analysis
    AnalyzeFeedbackHandler,
};
