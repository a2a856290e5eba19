//! Quiz session aggregate.
//!
//! A session is one user's run through the questionnaire: answers are
//! appended one at a time, the session is completed with a match result,
//! and feedback on that result may follow.

use serde::{Deserialize, Serialize};

use super::SessionError;
use crate::domain::foundation::{Answer, ProfileId, QuestionId, SessionId, SessionStatus, Timestamp};
use crate::domain::matching::AnswerSet;

/// One answer as recorded in the session log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedAnswer {
    pub question_id: QuestionId,
    pub answer: Answer,
    pub sequence_num: u32,
    pub answered_at: Timestamp,
}

/// The user's verdict on a completed session's result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFeedback {
    pub is_correct: bool,
    /// Free-text name of the profile the user expected instead.
    pub suggested_profile: Option<String>,
    pub comments: String,
    pub submitted_at: Timestamp,
}

/// Quiz session aggregate.
///
/// # Invariants
///
/// - answers are only added while `Active`
/// - each question is answered at most once
/// - `result`/`confidence` are set exactly when the session completes
/// - feedback only exists on completed sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    id: SessionId,
    status: SessionStatus,
    answers: Vec<RecordedAnswer>,
    result: Option<ProfileId>,
    confidence: Option<f64>,
    feedback: Option<SessionFeedback>,
    created_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl QuizSession {
    /// Starts a new active session with no answers.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            status: SessionStatus::Active,
            answers: Vec::new(),
            result: None,
            confidence: None,
            feedback: None,
            created_at: Timestamp::now(),
            completed_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Answers in the order they were recorded.
    pub fn answers(&self) -> &[RecordedAnswer] {
        &self.answers
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    pub fn result(&self) -> Option<&ProfileId> {
        self.result.as_ref()
    }

    pub fn confidence(&self) -> Option<f64> {
        self.confidence
    }

    pub fn feedback(&self) -> Option<&SessionFeedback> {
        self.feedback.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn has_answered(&self, question_id: &QuestionId) -> bool {
        self.answers.iter().any(|a| &a.question_id == question_id)
    }

    /// Question ids in the order they were asked.
    pub fn asked_question_ids(&self) -> Vec<&QuestionId> {
        self.answers.iter().map(|a| &a.question_id).collect()
    }

    /// The answers as a matching input, in asking order.
    pub fn answer_set(&self) -> AnswerSet {
        self.answers
            .iter()
            .map(|a| (a.question_id.clone(), a.answer))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends an answer.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the session is no longer active
    /// - `AlreadyAnswered` if the question was answered before
    pub fn record_answer(
        &mut self,
        question_id: QuestionId,
        answer: Answer,
        sequence_num: u32,
    ) -> Result<&RecordedAnswer, SessionError> {
        if !self.status.is_mutable() {
            return Err(SessionError::already_completed());
        }
        if self.has_answered(&question_id) {
            return Err(SessionError::already_answered(question_id));
        }

        self.answers.push(RecordedAnswer {
            question_id,
            answer,
            sequence_num,
            answered_at: Timestamp::now(),
        });
        Ok(&self.answers[self.answers.len() - 1])
    }

    /// Completes the session with its match result.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the session was completed before
    pub fn complete(&mut self, result: Option<ProfileId>, confidence: f64) -> Result<(), SessionError> {
        if !self.status.can_transition_to(&SessionStatus::Completed) {
            return Err(SessionError::already_completed());
        }

        self.status = SessionStatus::Completed;
        self.result = result;
        self.confidence = Some(confidence);
        self.completed_at = Some(Timestamp::now());
        Ok(())
    }

    /// Stores the user's feedback, replacing any earlier feedback.
    ///
    /// # Errors
    ///
    /// - `NotCompleted` if the session has no result yet
    pub fn attach_feedback(
        &mut self,
        is_correct: bool,
        suggested_profile: Option<String>,
        comments: impl Into<String>,
    ) -> Result<&SessionFeedback, SessionError> {
        if !self.is_completed() {
            return Err(SessionError::not_completed());
        }

        let suggested_profile = suggested_profile
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(self.feedback.insert(SessionFeedback {
            is_correct,
            suggested_profile,
            comments: comments.into(),
            submitted_at: Timestamp::now(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    fn pid(id: &str) -> ProfileId {
        ProfileId::new(id).unwrap()
    }

    fn answered_session() -> QuizSession {
        let mut session = QuizSession::new(SessionId::new());
        session.record_answer(qid("q1"), Answer::Yes, 1).unwrap();
        session.record_answer(qid("q2"), Answer::No, 2).unwrap();
        session
    }

    #[test]
    fn new_session_is_active_and_empty() {
        let session = QuizSession::new(SessionId::new());
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.answer_count(), 0);
        assert!(session.result().is_none());
    }

    #[test]
    fn record_answer_appends_in_order() {
        let session = answered_session();

        let set = session.answer_set();
        let order: Vec<&str> = set.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["q1", "q2"]);
        assert_eq!(session.answers()[1].sequence_num, 2);
        assert_eq!(session.asked_question_ids(), vec![&qid("q1"), &qid("q2")]);
    }

    #[test]
    fn same_question_cannot_be_answered_twice() {
        let mut session = answered_session();
        let result = session.record_answer(qid("q1"), Answer::No, 3);
        assert_eq!(result.unwrap_err(), SessionError::already_answered(qid("q1")));
        assert_eq!(session.answer_count(), 2);
    }

    #[test]
    fn complete_sets_result_and_confidence() {
        let mut session = answered_session();
        session.complete(Some(pid("a")), 0.85).unwrap();

        assert!(session.is_completed());
        assert_eq!(session.result(), Some(&pid("a")));
        assert_eq!(session.confidence(), Some(0.85));
        assert!(session.completed_at().is_some());
    }

    #[test]
    fn complete_accepts_empty_result() {
        let mut session = QuizSession::new(SessionId::new());
        session.complete(None, 0.0).unwrap();
        assert!(session.result().is_none());
    }

    #[test]
    fn cannot_complete_twice() {
        let mut session = answered_session();
        session.complete(Some(pid("a")), 1.0).unwrap();
        assert_eq!(session.complete(None, 0.0), Err(SessionError::AlreadyCompleted));
    }

    #[test]
    fn completed_session_rejects_answers() {
        let mut session = answered_session();
        session.complete(Some(pid("a")), 1.0).unwrap();

        let result = session.record_answer(qid("q3"), Answer::Yes, 3);
        assert_eq!(result.unwrap_err(), SessionError::AlreadyCompleted);
    }

    #[test]
    fn feedback_requires_completion() {
        let mut session = answered_session();
        let result = session.attach_feedback(true, None, "");
        assert_eq!(result.unwrap_err(), SessionError::NotCompleted);
    }

    #[test]
    fn feedback_normalizes_blank_suggestion() {
        let mut session = answered_session();
        session.complete(Some(pid("a")), 1.0).unwrap();

        let feedback = session
            .attach_feedback(false, Some("   ".to_string()), "not quite")
            .unwrap();
        assert!(!feedback.is_correct);
        assert!(feedback.suggested_profile.is_none());
        assert_eq!(feedback.comments, "not quite");
    }

    #[test]
    fn later_feedback_replaces_earlier() {
        let mut session = answered_session();
        session.complete(Some(pid("a")), 1.0).unwrap();
        session.attach_feedback(false, None, "").unwrap();
        session.attach_feedback(true, None, "actually right").unwrap();

        assert!(session.feedback().unwrap().is_correct);
    }
}
