//! Session module - quiz session lifecycle.

mod aggregate;
mod errors;

pub use aggregate::{QuizSession, RecordedAnswer, SessionFeedback};
pub use errors::SessionError;
