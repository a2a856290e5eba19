//! NextQuestionHandler - Query handler choosing the next question to ask.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::catalog::Question;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::matching::QuestionSelector;
use crate::domain::session::SessionError;
use crate::ports::{ProfileRepository, QuestionRepository, SessionRepository};

/// Query for the next question of a session.
#[derive(Debug, Clone)]
pub struct NextQuestionQuery {
    pub session_id: SessionId,
}

/// Why no further question is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    SessionAlreadyCompleted,
    NoMoreQuestions,
}

/// Outcome of asking for the next question.
#[derive(Debug, Clone, PartialEq)]
pub enum NextQuestion {
    Ask {
        question: Question,
        /// 1-based position of this question in the session.
        question_number: usize,
    },
    Terminated(TerminationReason),
}

/// Handler for next-question selection.
pub struct NextQuestionHandler {
    sessions: Arc<dyn SessionRepository>,
    questions: Arc<dyn QuestionRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl NextQuestionHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        questions: Arc<dyn QuestionRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            sessions,
            questions,
            profiles,
        }
    }

    pub async fn handle(&self, query: NextQuestionQuery) -> Result<NextQuestion, DomainError> {
        // 1. Load session
        let session = self
            .sessions
            .find_by_id(&query.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(query.session_id))?;

        if session.is_completed() {
            return Ok(NextQuestion::Terminated(
                TerminationReason::SessionAlreadyCompleted,
            ));
        }

        // 2. Questions not yet asked, in catalog order
        let available: Vec<Question> = self
            .questions
            .find_all()
            .await?
            .into_iter()
            .filter(|q| !session.has_answered(q.id()))
            .collect();

        if available.is_empty() {
            tracing::debug!(session_id = %query.session_id, "No questions left to ask");
            return Ok(NextQuestion::Terminated(TerminationReason::NoMoreQuestions));
        }

        // 3. Pick the best splitter among the remaining candidates
        let profiles = self.profiles.find_all().await?;
        let answers = session.answer_set();
        let question = QuestionSelector::select(&available, &answers, &profiles)?.clone();

        tracing::debug!(
            session_id = %query.session_id,
            question_id = %question.id(),
            "Next question selected"
        );

        Ok(NextQuestion::Ask {
            question,
            question_number: session.answer_count() + 1,
        })
    }
}
