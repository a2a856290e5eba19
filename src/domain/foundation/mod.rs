//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the GuessRight domain.

mod answer;
mod errors;
mod ids;
mod session_status;
mod timestamp;

pub use answer::Answer;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ProfileId, QuestionId, SessionId};
pub use session_status::SessionStatus;
pub use timestamp::Timestamp;
