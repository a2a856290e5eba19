//! Analysis handlers.

mod analyze_feedback;

pub use analyze_feedback::AnalyzeFeedbackHandler;
