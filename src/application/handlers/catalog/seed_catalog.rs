//! SeedCatalogHandler - Loads seed data into the repositories.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{CatalogSource, ProfileRepository, QuestionRepository};

/// Counts of seeded records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCatalogResult {
    pub profiles: usize,
    pub questions: usize,
}

/// Handler for catalog seeding.
pub struct SeedCatalogHandler {
    source: Arc<dyn CatalogSource>,
    profiles: Arc<dyn ProfileRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl SeedCatalogHandler {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        profiles: Arc<dyn ProfileRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            source,
            profiles,
            questions,
        }
    }

    /// Saves every loaded record; an empty catalog is not an error.
    pub async fn handle(&self) -> Result<SeedCatalogResult, DomainError> {
        // 1. Load and validate
        let snapshot = self.source.load().await?;

        // 2. Questions first so profiles never reference an unseeded catalog
        for question in &snapshot.questions {
            self.questions.save(question).await?;
        }
        for profile in &snapshot.profiles {
            self.profiles.save(profile).await?;
        }

        let result = SeedCatalogResult {
            profiles: snapshot.profiles.len(),
            questions: snapshot.questions.len(),
        };

        if result.questions == 0 {
            tracing::warn!("Catalog has no questions; every session will end immediately");
        }
        tracing::info!(
            profiles = result.profiles,
            questions = result.questions,
            "Catalog seeded"
        );

        Ok(result)
    }
}
