//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, SessionId};

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found.
    NotFound(SessionId),
    /// Session no longer accepts answers or a second completion.
    AlreadyCompleted,
    /// Feedback arrived before the session had a result.
    NotCompleted,
    /// The question was already answered in this session.
    AlreadyAnswered(QuestionId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }
    pub fn already_completed() -> Self {
        SessionError::AlreadyCompleted
    }
    pub fn not_completed() -> Self {
        SessionError::NotCompleted
    }
    pub fn already_answered(question_id: QuestionId) -> Self {
        SessionError::AlreadyAnswered(question_id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::AlreadyCompleted => ErrorCode::SessionCompleted,
            SessionError::NotCompleted => ErrorCode::InvalidStateTransition,
            SessionError::AlreadyAnswered(_) => ErrorCode::AlreadyAnswered,
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::AlreadyCompleted => "Session already completed".to_string(),
            SessionError::NotCompleted => "Session has not been completed".to_string(),
            SessionError::AlreadyAnswered(q) => format!("Question already answered: {}", q),
            SessionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            SessionError::NotFound(id) => domain.with_detail("session_id", id.to_string()),
            SessionError::AlreadyAnswered(q) => domain.with_detail("question_id", q.as_str()),
            SessionError::ValidationFailed { field, .. } => domain.with_detail("field", field),
            _ => domain,
        }
    }
}
