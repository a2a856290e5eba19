//! Question Effectiveness - how often asking a question ended in a correct match.

use serde::Serialize;

use crate::domain::catalog::Question;
use crate::domain::foundation::QuestionId;
use crate::domain::session::QuizSession;

/// Minimum times a question must have been asked to be ranked.
pub const MIN_ASKED_FOR_RANKING: u64 = 5;

/// Per-question outcome counters over reviewed sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionStats {
    pub question_id: QuestionId,
    pub text: String,
    pub asked: u64,
    pub correct_matches: u64,
    pub incorrect_matches: u64,
    /// `correct_matches / asked`, 0 when never asked.
    pub effectiveness: f64,
}

impl QuestionStats {
    fn new(question: &Question) -> Self {
        Self {
            question_id: question.id().clone(),
            text: question.text().to_string(),
            asked: 0,
            correct_matches: 0,
            incorrect_matches: 0,
            effectiveness: 0.0,
        }
    }
}

/// Question effectiveness analysis functions.
pub struct QuestionEffectivenessAnalyzer;

impl QuestionEffectivenessAnalyzer {
    /// Computes stats for every catalog question, in catalog order.
    ///
    /// Only sessions carrying feedback count. Answers to questions missing
    /// from the catalog are ignored.
    pub fn compute(questions: &[Question], sessions: &[QuizSession]) -> Vec<QuestionStats> {
        let mut stats: Vec<QuestionStats> = questions.iter().map(QuestionStats::new).collect();

        for session in sessions {
            let Some(feedback) = session.feedback() else {
                continue;
            };

            for answer in session.answers() {
                let Some(entry) = stats.iter_mut().find(|s| s.question_id == answer.question_id)
                else {
                    continue;
                };
                entry.asked += 1;
                if feedback.is_correct {
                    entry.correct_matches += 1;
                } else {
                    entry.incorrect_matches += 1;
                }
            }
        }

        for entry in &mut stats {
            if entry.asked > 0 {
                entry.effectiveness = entry.correct_matches as f64 / entry.asked as f64;
            }
        }
        stats
    }

    /// Questions asked at least `min_asked` times, most effective first.
    ///
    /// Equal effectiveness keeps the input order.
    pub fn rank(stats: &[QuestionStats], min_asked: u64) -> Vec<QuestionStats> {
        let mut ranked: Vec<QuestionStats> = stats
            .iter()
            .filter(|s| s.asked >= min_asked)
            .cloned()
            .collect();
        ranked.sort_by(|a, b| b.effectiveness.total_cmp(&a.effectiveness));
        ranked
    }
}
