//! ProfileRepository port for customer profile persistence.

use async_trait::async_trait;

use crate::domain::catalog::Profile;
use crate::domain::foundation::{DomainError, ProfileId};

/// Repository for the candidate profile catalog.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// All profiles, in the order they were first saved.
    ///
    /// Candidate order drives tie-breaking during matching, so it must be
    /// stable between calls.
    async fn find_all(&self) -> Result<Vec<Profile>, DomainError>;

    /// Find a profile by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError>;

    /// Insert or replace a profile, keeping its original position.
    async fn save(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Bump the number of sessions that matched this profile.
    ///
    /// # Errors
    ///
    /// - `ProfileNotFound` if the profile doesn't exist
    async fn increment_frequency(&self, id: &ProfileId) -> Result<(), DomainError>;
}
