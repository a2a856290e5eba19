//! SubmitFeedbackHandler - Records the user's verdict on a match.

use std::sync::Arc;

use super::{LearnFromFeedbackCommand, LearnFromFeedbackHandler};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::matching::LearningReport;
use crate::domain::session::{QuizSession, SessionError};
use crate::ports::SessionRepository;

/// Command to submit feedback on a completed session.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackCommand {
    pub session_id: SessionId,
    pub is_correct: bool,
    pub suggested_profile: Option<String>,
    pub comments: String,
}

/// Result of feedback submission.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackResult {
    pub session: QuizSession,
    /// Present when the match was confirmed and learning ran.
    pub learning: Option<LearningReport>,
}

/// Handler for feedback submission.
pub struct SubmitFeedbackHandler {
    sessions: Arc<dyn SessionRepository>,
    learn: LearnFromFeedbackHandler,
}

impl SubmitFeedbackHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, learn: LearnFromFeedbackHandler) -> Self {
        Self { sessions, learn }
    }

    pub async fn handle(&self, cmd: SubmitFeedbackCommand) -> Result<SubmitFeedbackResult, DomainError> {
        // 1. Load session
        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        // 2. Attach and persist feedback
        session.attach_feedback(cmd.is_correct, cmd.suggested_profile, cmd.comments)?;
        self.sessions.update(&session).await?;

        tracing::info!(
            session_id = %cmd.session_id,
            is_correct = cmd.is_correct,
            "Feedback recorded"
        );

        // 3. Confirmed matches teach the matched profile
        let learning = match session.result() {
            Some(profile_id) if cmd.is_correct => Some(
                self.learn
                    .handle(LearnFromFeedbackCommand {
                        profile_id: profile_id.clone(),
                        answers: session.answer_set(),
                        was_correct: true,
                    })
                    .await?,
            ),
            _ => None,
        };

        Ok(SubmitFeedbackResult { session, learning })
    }
}
