//! Session repository port.
//!
//! Defines the contract for persisting and retrieving quiz sessions.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::QuizSession;

/// Repository port for QuizSession aggregate persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session.
    async fn save(&self, session: &QuizSession) -> Result<(), DomainError>;

    /// Update an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    async fn update(&self, session: &QuizSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<QuizSession>, DomainError>;

    /// Completed sessions that carry feedback, oldest first.
    async fn find_with_feedback(&self) -> Result<Vec<QuizSession>, DomainError>;
}
