//! AnalyzeFeedbackHandler - Builds the feedback report from stored sessions.

use std::sync::Arc;
use tracing::debug;

use crate::domain::analysis::{FeedbackAnalyzer, FeedbackReport};
use crate::domain::foundation::DomainError;
use crate::ports::{QuestionRepository, SessionRepository};

/// Handler producing a `FeedbackReport`.
pub struct AnalyzeFeedbackHandler {
    sessions: Arc<dyn SessionRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl AnalyzeFeedbackHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            sessions,
            questions,
        }
    }

    pub async fn handle(&self) -> Result<FeedbackReport, DomainError> {
        let sessions = self.sessions.find_with_feedback().await?;
        let questions = self.questions.find_all().await?;

        let report = FeedbackAnalyzer::analyze(&questions, &sessions);

        debug!(
            reviewed = report.reviewed_sessions,
            incorrect = report.incorrect_sessions,
            mismatch_groups = report.mismatches.len(),
            suggestions = report.suggestions.len(),
            "Feedback analysis complete"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{
        pid, qid, question, MockQuestionRepository, MockSessionRepository,
    };
    use crate::domain::foundation::{Answer, SessionId};
    use crate::domain::session::QuizSession;

    fn reviewed(correct: bool, suggestion: Option<&str>) -> QuizSession {
        let mut session = QuizSession::new(SessionId::new());
        session.record_answer(qid("q1"), Answer::Yes, 1).unwrap();
        session.complete(Some(pid("a")), 0.8).unwrap();
        session
            .attach_feedback(correct, suggestion.map(str::to_string), "")
            .unwrap();
        session
    }

    #[tokio::test]
    async fn reports_over_reviewed_sessions_only() {
        let mut sessions: Vec<QuizSession> = (0..3).map(|_| reviewed(false, Some("Coach"))).collect();
        sessions.extend((0..2).map(|_| reviewed(true, None)));
        sessions.push(QuizSession::new(SessionId::new()));

        let handler = AnalyzeFeedbackHandler::new(
            Arc::new(MockSessionRepository::with_sessions(sessions)),
            Arc::new(MockQuestionRepository::new(vec![question("q1", 1)])),
        );

        let report = handler.handle().await.unwrap();

        assert_eq!(report.reviewed_sessions, 5);
        assert_eq!(report.incorrect_sessions, 3);
        assert_eq!(report.ranked_questions.len(), 1);
        assert!((report.ranked_questions[0].effectiveness - 0.4).abs() < 1e-9);
        assert_eq!(report.mismatches[0].incorrect_matches, 3);
        assert_eq!(report.mismatches[0].common_patterns[0].occurrences, 3);
        assert_eq!(report.suggestions[0].mentions, 3);
        assert!(!report.suggestions[0].recommended);
    }

    #[tokio::test]
    async fn empty_store_gives_empty_report() {
        let handler = AnalyzeFeedbackHandler::new(
            Arc::new(MockSessionRepository::new()),
            Arc::new(MockQuestionRepository::default()),
        );

        let report = handler.handle().await.unwrap();
        assert_eq!(report.reviewed_sessions, 0);
        assert!(report.suggestions.is_empty());
    }
}
