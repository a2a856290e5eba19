//! StartSessionHandler - Command handler for starting quiz sessions.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::QuizSession;
use crate::ports::SessionRepository;

/// Command to start a new quiz session.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    /// Caller-chosen id, generated when absent.
    pub session_id: Option<SessionId>,
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    sessions: Arc<dyn SessionRepository>,
}

impl StartSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<QuizSession, DomainError> {
        let session = QuizSession::new(cmd.session_id.unwrap_or_default());
        self.sessions.save(&session).await?;

        tracing::info!(session_id = %session.id(), "Quiz session started");
        Ok(session)
    }
}
