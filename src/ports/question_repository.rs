//! QuestionRepository port for the question catalog.

use async_trait::async_trait;

use crate::domain::catalog::Question;
use crate::domain::foundation::{DomainError, QuestionId};

/// Repository for questions.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions sorted by their ordering hint.
    ///
    /// Questions sharing an ordering hint keep the order they were saved in.
    async fn find_all(&self) -> Result<Vec<Question>, DomainError>;

    /// Find a question by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError>;

    /// Insert or replace a question.
    async fn save(&self, question: &Question) -> Result<(), DomainError>;

    /// Bump the number of times the question was answered.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if the question doesn't exist
    async fn increment_asked_count(&self, id: &QuestionId) -> Result<(), DomainError>;
}
