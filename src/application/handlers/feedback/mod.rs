//! Feedback and learning handlers.

mod learn_from_feedback;
mod submit_feedback;

pub use learn_from_feedback::{LearnFromFeedbackCommand, LearnFromFeedbackHandler};
pub use submit_feedback::{SubmitFeedbackCommand, SubmitFeedbackHandler, SubmitFeedbackResult};
