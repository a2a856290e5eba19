//! RecordAnswerHandler - Command handler for answering a question.

use std::sync::Arc;

use crate::domain::foundation::{Answer, DomainError, ErrorCode, QuestionId, SessionId};
use crate::domain::session::{RecordedAnswer, SessionError};
use crate::ports::{QuestionRepository, SessionRepository};

/// Command to record one answer in a session.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub session_id: SessionId,
    pub question_id: QuestionId,
    pub answer: Answer,
}

/// Result of a recorded answer.
#[derive(Debug, Clone)]
pub struct RecordAnswerResult {
    pub recorded: RecordedAnswer,
    pub answer_count: usize,
}

/// Handler for recording answers.
pub struct RecordAnswerHandler {
    sessions: Arc<dyn SessionRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl RecordAnswerHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            sessions,
            questions,
        }
    }

    pub async fn handle(&self, cmd: RecordAnswerCommand) -> Result<RecordAnswerResult, DomainError> {
        // 1. Load session
        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        // 2. The question must exist in the catalog
        if self.questions.find_by_id(&cmd.question_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Question not found: {}", cmd.question_id),
            )
            .with_detail("question_id", cmd.question_id.as_str()));
        }

        // 3. Record on the aggregate
        let sequence_num = session.answer_count() as u32 + 1;
        let recorded = session
            .record_answer(cmd.question_id.clone(), cmd.answer, sequence_num)?
            .clone();

        // 4. Persist, then bump usage
        self.sessions.update(&session).await?;
        self.questions.increment_asked_count(&cmd.question_id).await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            question_id = %cmd.question_id,
            answer = %cmd.answer,
            sequence_num,
            "Answer recorded"
        );

        Ok(RecordAnswerResult {
            recorded,
            answer_count: session.answer_count(),
        })
    }
}
