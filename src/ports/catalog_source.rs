//! Catalog source port - where seed questions and profiles come from.

use async_trait::async_trait;

use crate::domain::catalog::{Profile, Question};
use crate::domain::foundation::DomainError;

/// A validated snapshot of seed data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub profiles: Vec<Profile>,
    pub questions: Vec<Question>,
}

/// Reads seed data from outside the application.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every profile and question.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` / `InvalidAnswer` for malformed records
    /// - `StorageError` when the source can't be read
    async fn load(&self) -> Result<CatalogSnapshot, DomainError>;
}
