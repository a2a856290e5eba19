//! LearnFromFeedbackHandler - Folds a confirmed match back into its profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::domain::matching::{AnswerSet, LearningReport, ProfileLearner};
use crate::ports::ProfileRepository;

/// Command to learn from one session's answers.
#[derive(Debug, Clone)]
pub struct LearnFromFeedbackCommand {
    pub profile_id: ProfileId,
    pub answers: AnswerSet,
    pub was_correct: bool,
}

/// Handler for profile learning.
///
/// Each invocation is a read-modify-write of a single profile. Two concurrent
/// invocations for the same profile can lose one update; callers serialize
/// per profile when that matters.
pub struct LearnFromFeedbackHandler {
    profiles: Arc<dyn ProfileRepository>,
    learner: ProfileLearner,
}

impl LearnFromFeedbackHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, learner: ProfileLearner) -> Self {
        Self { profiles, learner }
    }

    /// Returns an empty report without touching storage when the match was
    /// not confirmed.
    ///
    /// # Errors
    ///
    /// - `ProfileNotFound` if the profile doesn't exist
    pub async fn handle(&self, cmd: LearnFromFeedbackCommand) -> Result<LearningReport, DomainError> {
        if !cmd.was_correct {
            return Ok(LearningReport::default());
        }

        // 1. Load profile
        let mut profile = self
            .profiles
            .find_by_id(&cmd.profile_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProfileNotFound,
                    format!("Profile not found: {}", cmd.profile_id),
                )
                .with_detail("profile_id", cmd.profile_id.as_str())
            })?;

        // 2. Apply counters and expectation updates
        let report = self.learner.apply(&mut profile, &cmd.answers);

        // 3. Single write for the whole pass
        self.profiles.save(&profile).await?;

        for revision in &report.revisions {
            tracing::info!(
                profile_id = %cmd.profile_id,
                question_id = %revision.question_id,
                revised = %revision.revised,
                confidence = revision.confidence,
                "Expected answer revised from feedback"
            );
        }
        tracing::debug!(
            profile_id = %cmd.profile_id,
            records_updated = report.records_updated,
            "Learning applied"
        );

        Ok(report)
    }
}
