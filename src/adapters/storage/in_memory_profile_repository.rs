//! In-Memory Profile Repository
//!
//! Keeps profiles in a vector so `find_all` returns them in the order they
//! were first saved.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::Profile;
use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::ports::ProfileRepository;

/// In-memory storage for candidate profiles
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<Profile>>>,
}

impl InMemoryProfileRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `profiles` in the given order
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(RwLock::new(profiles)),
        }
    }

    /// Number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self.profiles.read().await.clone())
    }

    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| p.id() == id).cloned())
    }

    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        match profiles.iter_mut().find(|p| p.id() == profile.id()) {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        Ok(())
    }

    async fn increment_frequency(&self, id: &ProfileId) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.iter_mut().find(|p| p.id() == id).ok_or_else(|| {
            DomainError::new(ErrorCode::ProfileNotFound, format!("Profile not found: {}", id))
                .with_detail("profile_id", id.as_str())
        })?;
        profile.record_match();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Answer, QuestionId};

    fn profile(id: &str) -> Profile {
        Profile::new(ProfileId::new(id).unwrap(), format!("Profile {}", id)).unwrap()
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repo = InMemoryProfileRepository::new();
        repo.save(&profile("zeta")).await.unwrap();
        repo.save(&profile("alpha")).await.unwrap();

        let ids: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, vec!["zeta", "alpha"]);
    }

    #[tokio::test]
    async fn save_replaces_in_place() {
        let repo = InMemoryProfileRepository::with_profiles(vec![profile("a"), profile("b")]);
        let q1 = QuestionId::new("q1").unwrap();
        let updated = profile("a").with_answer(q1.clone(), Answer::Yes);

        repo.save(&updated).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].expected_answer(&q1), Some(Answer::Yes));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown() {
        let repo = InMemoryProfileRepository::new();
        let found = repo.find_by_id(&ProfileId::new("missing").unwrap()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn increment_frequency_counts_matches() {
        let repo = InMemoryProfileRepository::with_profiles(vec![profile("a")]);
        let id = ProfileId::new("a").unwrap();

        repo.increment_frequency(&id).await.unwrap();
        repo.increment_frequency(&id).await.unwrap();

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.frequency(), 2);
    }

    #[tokio::test]
    async fn increment_frequency_of_unknown_profile_fails() {
        let repo = InMemoryProfileRepository::new();
        let err = repo
            .increment_frequency(&ProfileId::new("ghost").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileNotFound);
    }
}
