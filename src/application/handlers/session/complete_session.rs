//! CompleteSessionHandler - Command handler that resolves a session's match.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::matching::{MatchResolver, MatchResult, ProfileScorer};
use crate::domain::session::{QuizSession, SessionError};
use crate::ports::{ProfileRepository, SessionRepository};

/// Command to complete a session.
#[derive(Debug, Clone)]
pub struct CompleteSessionCommand {
    pub session_id: SessionId,
}

/// Result of session completion.
#[derive(Debug, Clone)]
pub struct CompleteSessionResult {
    pub session: QuizSession,
    pub result: MatchResult,
}

/// Handler for completing sessions.
pub struct CompleteSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    profiles: Arc<dyn ProfileRepository>,
    resolver: MatchResolver,
}

impl CompleteSessionHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        profiles: Arc<dyn ProfileRepository>,
        resolver: MatchResolver,
    ) -> Self {
        Self {
            sessions,
            profiles,
            resolver,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteSessionCommand,
    ) -> Result<CompleteSessionResult, DomainError> {
        // 1. Load session
        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        if session.is_completed() {
            return Err(SessionError::already_completed().into());
        }

        // 2. Score every candidate and resolve the best match
        let profiles = self.profiles.find_all().await?;
        let answers = session.answer_set();
        let scores = ProfileScorer::score(&answers, &profiles);
        let result = self
            .resolver
            .resolve(&scores, &profiles, session.answer_count())?;

        // 3. Complete and persist
        session.complete(result.profile_id().cloned(), result.confidence)?;
        self.sessions.update(&session).await?;

        // 4. Count the match against the profile
        if let Some(profile_id) = result.profile_id() {
            self.profiles.increment_frequency(profile_id).await?;
        }

        tracing::info!(
            session_id = %cmd.session_id,
            profile_id = ?result.profile_id().map(|id| id.as_str()),
            confidence = result.confidence,
            answers = session.answer_count(),
            "Quiz session completed"
        );

        Ok(CompleteSessionResult { session, result })
    }
}
