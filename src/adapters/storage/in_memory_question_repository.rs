//! In-Memory Question Repository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::Question;
use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};
use crate::ports::QuestionRepository;

/// In-memory storage for the question catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(questions)),
        }
    }

    pub async fn len(&self) -> usize {
        self.questions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.questions.read().await.is_empty()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, DomainError> {
        let mut questions = self.questions.read().await.clone();
        questions.sort_by_key(|q| q.order());
        Ok(questions)
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|q| q.id() == id).cloned())
    }

    async fn save(&self, question: &Question) -> Result<(), DomainError> {
        let mut questions = self.questions.write().await;
        match questions.iter_mut().find(|q| q.id() == question.id()) {
            Some(existing) => *existing = question.clone(),
            None => questions.push(question.clone()),
        }
        Ok(())
    }

    async fn increment_asked_count(&self, id: &QuestionId) -> Result<(), DomainError> {
        let mut questions = self.questions.write().await;
        let question = questions.iter_mut().find(|q| q.id() == id).ok_or_else(|| {
            DomainError::new(ErrorCode::QuestionNotFound, format!("Question not found: {}", id))
                .with_detail("question_id", id.as_str())
        })?;
        question.record_asked();
        Ok(())
    }
}
