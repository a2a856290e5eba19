//! The answers given so far in one session.

use crate::domain::foundation::{Answer, QuestionId};

/// Question → answer mapping that remembers asking order.
///
/// Re-answering a question replaces the value but keeps its original
/// position. Scoring never depends on the order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(QuestionId, Answer)>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier answer to the same question.
    pub fn insert(&mut self, question_id: QuestionId, answer: Answer) {
        match self.entries.iter_mut().find(|(id, _)| *id == question_id) {
            Some(entry) => entry.1 = answer,
            None => self.entries.push((question_id, answer)),
        }
    }

    /// Builder-style [`AnswerSet::insert`].
    pub fn with(mut self, question_id: QuestionId, answer: Answer) -> Self {
        self.insert(question_id, answer);
        self
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<Answer> {
        self.entries
            .iter()
            .find(|(id, _)| id == question_id)
            .map(|(_, answer)| *answer)
    }

    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.get(question_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in asking order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, Answer)> {
        self.entries.iter().map(|(id, answer)| (id, *answer))
    }
}

impl FromIterator<(QuestionId, Answer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Answer)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (question_id, answer) in iter {
            set.insert(question_id, answer);
        }
        set
    }
}
