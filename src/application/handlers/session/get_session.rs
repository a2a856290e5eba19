//! GetSessionHandler - Query handler for retrieving session details.

use std::sync::Arc;

use crate::domain::catalog::Profile;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{QuizSession, SessionError};
use crate::ports::{ProfileRepository, SessionRepository};

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// A session together with the profile it matched, once completed.
#[derive(Debug, Clone)]
pub struct SessionDetails {
    pub session: QuizSession,
    pub profile: Option<Profile>,
}

/// Handler for retrieving session details.
pub struct GetSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl GetSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { sessions, profiles }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionDetails, DomainError> {
        let session = self
            .sessions
            .find_by_id(&query.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(query.session_id))?;

        let profile = match session.result() {
            Some(profile_id) if session.is_completed() => {
                self.profiles.find_by_id(profile_id).await?
            }
            _ => None,
        };

        Ok(SessionDetails { session, profile })
    }
}
