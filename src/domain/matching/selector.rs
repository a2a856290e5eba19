//! Question Selector - greedy choice of the most discriminating next question.

use super::{AnswerSet, MatchingError};
use crate::domain::catalog::{Profile, Question};
use crate::domain::foundation::Answer;

/// How the potential matches would answer one question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerTally {
    pub yes: usize,
    pub no: usize,
    /// Includes profiles with no expectation for the question.
    pub unsure: usize,
}

impl AnswerTally {
    /// Split quality: `-((yes/n - 0.5)² + (no/n - 0.5)²)`, higher is better.
    ///
    /// The unsure bucket only matters through the ratios it leaves out.
    pub fn split_score(&self, candidate_count: usize) -> f64 {
        let n = candidate_count as f64;
        let yes_ratio = self.yes as f64 / n;
        let no_ratio = self.no as f64 / n;
        -((yes_ratio - 0.5).powi(2) + (no_ratio - 0.5).powi(2))
    }
}

/// Next-question selection.
pub struct QuestionSelector;

impl QuestionSelector {
    /// Selects the next question to ask.
    ///
    /// # Algorithm
    /// 1. No answers yet: lowest ordering hint, earliest on ties.
    /// 2. At most one potential match: first available question.
    /// 3. Otherwise: best [`AnswerTally::split_score`] across the potential
    ///    matches, earliest on ties.
    ///
    /// Running out of questions is the caller's termination signal; this
    /// never returns "done".
    ///
    /// # Errors
    /// - `NoQuestionsAvailable` if `available` is empty
    pub fn select<'q>(
        available: &'q [Question],
        answers: &AnswerSet,
        profiles: &[Profile],
    ) -> Result<&'q Question, MatchingError> {
        let first = available.first().ok_or(MatchingError::NoQuestionsAvailable)?;

        if answers.is_empty() {
            return Ok(Self::lowest_order(available));
        }

        let candidates = Self::potential_matches(answers, profiles);
        if candidates.len() <= 1 {
            return Ok(first);
        }

        let mut best = first;
        let mut best_score = f64::NEG_INFINITY;
        for question in available {
            let score = Self::tally(question, &candidates).split_score(candidates.len());
            if score > best_score {
                best = question;
                best_score = score;
            }
        }

        Ok(best)
    }

    /// Candidates with no definite mismatch against any given answer.
    ///
    /// A profile without an expectation for a question is never ruled out
    /// by that question.
    pub fn potential_matches<'p>(answers: &AnswerSet, profiles: &'p [Profile]) -> Vec<&'p Profile> {
        profiles
            .iter()
            .filter(|profile| {
                answers.iter().all(|(question_id, given)| {
                    profile
                        .expected_answer(question_id)
                        .map_or(true, |expected| !given.is_definite_mismatch(expected))
                })
            })
            .collect()
    }

    /// Counts the expected answers of `candidates` for `question`.
    pub fn tally(question: &Question, candidates: &[&Profile]) -> AnswerTally {
        let mut tally = AnswerTally::default();
        for profile in candidates {
            match profile.expected_answer(question.id()) {
                Some(Answer::Yes) => tally.yes += 1,
                Some(Answer::No) => tally.no += 1,
                Some(Answer::Unsure) | None => tally.unsure += 1,
            }
        }
        tally
    }

    fn lowest_order(available: &[Question]) -> &Question {
        // Iterator::min_by_key keeps the first of equal minima.
        available
            .iter()
            .min_by_key(|question| question.order())
            .unwrap_or(&available[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProfileId, QuestionId};

    fn qid(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    fn question(id: &str, order: i32) -> Question {
        Question::new(qid(id), format!("Question {}?", id), order).unwrap()
    }

    fn profile(id: &str, answers: &[(&str, Answer)]) -> Profile {
        answers.iter().fold(
            Profile::new(ProfileId::new(id).unwrap(), id.to_uppercase()).unwrap(),
            |profile, (q, a)| profile.with_answer(qid(q), *a),
        )
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let result = QuestionSelector::select(&[], &AnswerSet::new(), &[]);
        assert_eq!(result, Err(MatchingError::NoQuestionsAvailable));
    }

    #[test]
    fn opening_question_has_lowest_order() {
        let available = vec![question("q3", 3), question("q1", 1), question("q2", 2)];
        let profiles = vec![profile("a", &[("q3", Answer::Yes)]), profile("b", &[("q3", Answer::No)])];

        let chosen = QuestionSelector::select(&available, &AnswerSet::new(), &profiles).unwrap();
        assert_eq!(chosen.id().as_str(), "q1");
    }

    #[test]
    fn negative_order_opens_before_zero() {
        let available = vec![question("zero", 0), question("intro", -2)];

        let chosen = QuestionSelector::select(&available, &AnswerSet::new(), &[]).unwrap();
        assert_eq!(chosen.id().as_str(), "intro");
    }

    #[test]
    fn opening_question_tie_keeps_list_order() {
        let available = vec![question("late", 5), question("first", 1), question("second", 1)];

        let chosen = QuestionSelector::select(&available, &AnswerSet::new(), &[]).unwrap();
        assert_eq!(chosen.id().as_str(), "first");
    }

    #[test]
    fn potential_matches_exclude_definite_mismatches_only() {
        let profiles = vec![
            profile("yes", &[("q1", Answer::Yes)]),
            profile("no", &[("q1", Answer::No)]),
            profile("unsure", &[("q1", Answer::Unsure)]),
            profile("silent", &[]),
        ];
        let answers = AnswerSet::new().with(qid("q1"), Answer::Yes);

        let matches = QuestionSelector::potential_matches(&answers, &profiles);
        let names: Vec<&str> = matches.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(names, vec!["yes", "unsure", "silent"]);
    }

    #[test]
    fn unsure_answer_rules_nobody_out() {
        let profiles = vec![profile("yes", &[("q1", Answer::Yes)]), profile("no", &[("q1", Answer::No)])];
        let answers = AnswerSet::new().with(qid("q1"), Answer::Unsure);

        assert_eq!(QuestionSelector::potential_matches(&answers, &profiles).len(), 2);
    }

    #[test]
    fn single_potential_match_falls_back_to_first_available() {
        let profiles = vec![
            profile("a", &[("q1", Answer::Yes), ("q3", Answer::Yes)]),
            profile("b", &[("q1", Answer::No), ("q3", Answer::No)]),
        ];
        let available = vec![question("q2", 9), question("q3", 1)];
        let answers = AnswerSet::new().with(qid("q1"), Answer::Yes);

        let chosen = QuestionSelector::select(&available, &answers, &profiles).unwrap();
        assert_eq!(chosen.id().as_str(), "q2");
    }

    #[test]
    fn no_potential_match_falls_back_to_first_available() {
        let profiles = vec![profile("a", &[("q1", Answer::No)])];
        let available = vec![question("q2", 1), question("q3", 2)];
        let answers = AnswerSet::new().with(qid("q1"), Answer::Yes);

        let chosen = QuestionSelector::select(&available, &answers, &profiles).unwrap();
        assert_eq!(chosen.id().as_str(), "q2");
    }

    #[test]
    fn prefers_even_yes_no_split() {
        let profiles = vec![
            profile("a", &[("q0", Answer::Yes), ("skewed", Answer::Yes), ("even", Answer::Yes)]),
            profile("b", &[("q0", Answer::Yes), ("skewed", Answer::Yes), ("even", Answer::No)]),
            profile("c", &[("q0", Answer::Yes), ("skewed", Answer::Yes), ("even", Answer::Yes)]),
            profile("d", &[("q0", Answer::Yes), ("skewed", Answer::No), ("even", Answer::No)]),
        ];
        let available = vec![question("skewed", 1), question("even", 2)];
        let answers = AnswerSet::new().with(qid("q0"), Answer::Yes);

        let chosen = QuestionSelector::select(&available, &answers, &profiles).unwrap();
        assert_eq!(chosen.id().as_str(), "even");
    }

    #[test]
    fn equal_split_scores_keep_first_question() {
        let profiles = vec![
            profile("a", &[("x", Answer::Yes), ("y", Answer::No)]),
            profile("b", &[("x", Answer::No), ("y", Answer::Yes)]),
        ];
        let available = vec![question("y", 2), question("x", 1)];
        let answers = AnswerSet::new().with(qid("other"), Answer::Yes);

        let chosen = QuestionSelector::select(&available, &answers, &profiles).unwrap();
        assert_eq!(chosen.id().as_str(), "y");
    }

    #[test]
    fn unknown_expectations_count_as_unsure() {
        let a = profile("a", &[("q", Answer::Yes)]);
        let b = profile("b", &[]);
        let c = profile("c", &[("q", Answer::Unsure)]);

        let tally = QuestionSelector::tally(&question("q", 1), &[&a, &b, &c]);
        assert_eq!(tally, AnswerTally { yes: 1, no: 0, unsure: 2 });
    }

    #[test]
    fn split_score_ignores_unsure_bucket_in_denominator() {
        // All-unsure scores the same as ratios (0, 0): -(0.25 + 0.25)
        let tally = AnswerTally { yes: 0, no: 0, unsure: 4 };
        assert_eq!(tally.split_score(4), -0.5);

        let even = AnswerTally { yes: 2, no: 2, unsure: 0 };
        assert_eq!(even.split_score(4), 0.0);
    }

    #[test]
    fn selection_matches_recomputation_from_scratch() {
        let profiles = vec![
            profile("a", &[("q1", Answer::Yes), ("q2", Answer::Yes), ("q3", Answer::No)]),
            profile("b", &[("q1", Answer::Yes), ("q2", Answer::No), ("q3", Answer::No)]),
            profile("c", &[("q1", Answer::No), ("q2", Answer::No), ("q3", Answer::Yes)]),
        ];
        let available = vec![question("q2", 2), question("q3", 3)];
        let answers = AnswerSet::new().with(qid("q1"), Answer::Yes);

        let first = QuestionSelector::select(&available, &answers, &profiles).unwrap();
        let second = QuestionSelector::select(&available, &answers, &profiles).unwrap();
        assert_eq!(first.id(), second.id());
        assert_eq!(first.id().as_str(), "q2");

        let candidates = QuestionSelector::potential_matches(&answers, &profiles);
        assert_eq!(candidates.len(), 2);
    }
}
