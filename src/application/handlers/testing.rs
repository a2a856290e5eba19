//! Mock ports shared by handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::catalog::{Profile, Question};
use crate::domain::foundation::{
    Answer, DomainError, ErrorCode, ProfileId, QuestionId, SessionId,
};
use crate::domain::session::QuizSession;
use crate::ports::{
    CatalogSnapshot, CatalogSource, ProfileRepository, QuestionRepository, SessionRepository,
};

pub fn pid(id: &str) -> ProfileId {
    ProfileId::new(id).unwrap()
}

pub fn qid(id: &str) -> QuestionId {
    QuestionId::new(id).unwrap()
}

pub fn question(id: &str, order: i32) -> Question {
    Question::new(qid(id), format!("Question {}?", id), order).unwrap()
}

pub fn profile(id: &str, answers: &[(&str, Answer)]) -> Profile {
    answers.iter().fold(
        Profile::new(pid(id), format!("Profile {}", id)).unwrap(),
        |p, (q, a)| p.with_answer(qid(q), *a),
    )
}

fn storage_failure() -> DomainError {
    DomainError::new(ErrorCode::StorageError, "Simulated storage failure")
}

// ─────────────────────────────────────────────────────────────────────────────
// Profiles
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockProfileRepository {
    profiles: Mutex<Vec<Profile>>,
    calls: Mutex<usize>,
    saves: Mutex<Vec<Profile>>,
    fail_save: bool,
}

impl MockProfileRepository {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Mutex::new(profiles),
            ..Default::default()
        }
    }

    pub fn failing_save(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Mutex::new(profiles),
            fail_save: true,
            ..Default::default()
        }
    }

    /// Total number of port calls of any kind.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    pub fn saves(&self) -> Vec<Profile> {
        self.saves.lock().unwrap().clone()
    }

    pub fn get(&self, id: &str) -> Option<Profile> {
        let id = pid(id);
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id() == &id)
            .cloned()
    }

    fn touch(&self) {
        *self.calls.lock().unwrap() += 1;
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        self.touch();
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError> {
        self.touch();
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        self.touch();
        if self.fail_save {
            return Err(storage_failure());
        }
        self.saves.lock().unwrap().push(profile.clone());
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.id() == profile.id()) {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        Ok(())
    }

    async fn increment_frequency(&self, id: &ProfileId) -> Result<(), DomainError> {
        self.touch();
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;
        profile.record_match();
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Questions
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockQuestionRepository {
    questions: Mutex<Vec<Question>>,
    asked: Mutex<Vec<QuestionId>>,
}

impl MockQuestionRepository {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Mutex::new(questions),
            ..Default::default()
        }
    }

    /// Ids passed to `increment_asked_count`, in call order.
    pub fn asked(&self) -> Vec<QuestionId> {
        self.asked.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<Question> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionRepository for MockQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, DomainError> {
        let mut questions = self.questions.lock().unwrap().clone();
        questions.sort_by_key(|q| q.order());
        Ok(questions)
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id() == id)
            .cloned())
    }

    async fn save(&self, question: &Question) -> Result<(), DomainError> {
        self.questions.lock().unwrap().push(question.clone());
        Ok(())
    }

    async fn increment_asked_count(&self, id: &QuestionId) -> Result<(), DomainError> {
        self.asked.lock().unwrap().push(id.clone());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sessions
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockSessionRepository {
    sessions: Mutex<Vec<QuizSession>>,
    updates: Mutex<usize>,
    fail_save: bool,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sessions(sessions: Vec<QuizSession>) -> Self {
        Self {
            sessions: Mutex::new(sessions),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_save: true,
            ..Default::default()
        }
    }

    pub fn get(&self, id: &SessionId) -> Option<QuizSession> {
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id() == id)
            .cloned()
    }

    pub fn saved(&self) -> Vec<QuizSession> {
        self.sessions.lock().unwrap().clone()
    }

    pub fn update_count(&self) -> usize {
        *self.updates.lock().unwrap()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn save(&self, session: &QuizSession) -> Result<(), DomainError> {
        if self.fail_save {
            return Err(storage_failure());
        }
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn update(&self, session: &QuizSession) -> Result<(), DomainError> {
        *self.updates.lock().unwrap() += 1;
        let mut sessions = self.sessions.lock().unwrap();
        let slot = sessions
            .iter_mut()
            .find(|s| s.id() == session.id())
            .ok_or_else(|| DomainError::new(ErrorCode::SessionNotFound, "Session not found"))?;
        *slot = session.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<QuizSession>, DomainError> {
        Ok(self.get(id))
    }

    async fn find_with_feedback(&self) -> Result<Vec<QuizSession>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_completed() && s.feedback().is_some())
            .cloned()
            .collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

pub struct MockCatalogSource {
    snapshot: Result<CatalogSnapshot, DomainError>,
}

impl MockCatalogSource {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Ok(snapshot),
        }
    }

    pub fn failing() -> Self {
        Self {
            snapshot: Err(storage_failure()),
        }
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn load(&self) -> Result<CatalogSnapshot, DomainError> {
        self.snapshot.clone()
    }
}
