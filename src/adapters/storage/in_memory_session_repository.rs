//! In-Memory Session Repository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::QuizSession;
use crate::ports::SessionRepository;

#[derive(Debug, Default)]
struct SessionStore {
    sessions: HashMap<SessionId, QuizSession>,
    order: Vec<SessionId>,
}

/// In-memory storage for quiz sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    store: Arc<RwLock<SessionStore>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.store.read().await.sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.sessions.is_empty()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &QuizSession) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        let id = *session.id();
        if store.sessions.insert(id, session.clone()).is_none() {
            store.order.push(id);
        }
        Ok(())
    }

    async fn update(&self, session: &QuizSession) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        let slot = store.sessions.get_mut(session.id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            )
            .with_detail("session_id", session.id().to_string())
        })?;
        *slot = session.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<QuizSession>, DomainError> {
        Ok(self.store.read().await.sessions.get(id).cloned())
    }

    async fn find_with_feedback(&self) -> Result<Vec<QuizSession>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .order
            .iter()
            .filter_map(|id| store.sessions.get(id))
            .filter(|s| s.is_completed() && s.feedback().is_some())
            .cloned()
            .collect())
    }
}
