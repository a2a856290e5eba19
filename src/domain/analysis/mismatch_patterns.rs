//! Mismatch Patterns - recurring answers behind matches users rejected.

use serde::Serialize;

use crate::domain::foundation::{Answer, ProfileId, QuestionId};
use crate::domain::session::QuizSession;

/// Occurrences a (question, answer) pair needs to count as a pattern.
pub const MIN_PATTERN_OCCURRENCES: u64 = 3;

/// Patterns kept per profile.
pub const MAX_PATTERNS_PER_PROFILE: usize = 3;

/// One answer that keeps showing up in rejected matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerPattern {
    pub question_id: QuestionId,
    pub answer: Answer,
    pub occurrences: u64,
}

/// Rejected matches for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchGroup {
    pub profile_id: ProfileId,
    pub incorrect_matches: usize,
    pub common_patterns: Vec<AnswerPattern>,
}

/// Incorrect-match analysis functions.
pub struct MismatchAnalyzer;

impl MismatchAnalyzer {
    /// Groups sessions marked incorrect by the profile they matched.
    ///
    /// Groups are ordered by size, largest first; equal sizes keep the order
    /// in which the profile was first seen. Sessions without a result are
    /// skipped.
    pub fn group(sessions: &[QuizSession]) -> Vec<MismatchGroup> {
        let mut groups: Vec<(ProfileId, Vec<&QuizSession>)> = Vec::new();

        for session in sessions {
            let incorrect = session.feedback().is_some_and(|f| !f.is_correct);
            if !incorrect {
                continue;
            }
            let Some(profile_id) = session.result() else {
                continue;
            };

            match groups.iter_mut().find(|(id, _)| id == profile_id) {
                Some((_, members)) => members.push(session),
                None => groups.push((profile_id.clone(), vec![session])),
            }
        }

        groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

        groups
            .into_iter()
            .map(|(profile_id, members)| MismatchGroup {
                profile_id,
                incorrect_matches: members.len(),
                common_patterns: Self::common_patterns(&members),
            })
            .collect()
    }

    /// Top answer patterns across `sessions`.
    fn common_patterns(sessions: &[&QuizSession]) -> Vec<AnswerPattern> {
        let mut counts: Vec<AnswerPattern> = Vec::new();

        for answer in sessions.iter().flat_map(|s| s.answers()) {
            match counts
                .iter_mut()
                .find(|p| p.question_id == answer.question_id && p.answer == answer.answer)
            {
                Some(pattern) => pattern.occurrences += 1,
                None => counts.push(AnswerPattern {
                    question_id: answer.question_id.clone(),
                    answer: answer.answer,
                    occurrences: 1,
                }),
            }
        }

        counts.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        counts
            .into_iter()
            .filter(|p| p.occurrences >= MIN_PATTERN_OCCURRENCES)
            .take(MAX_PATTERNS_PER_PROFILE)
            .collect()
    }
}
