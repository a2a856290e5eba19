//! Matching engine error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};

/// Invalid input handed to the matching engine.
///
/// An empty candidate list and a single remaining candidate are not errors;
/// they have defined outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchingError {
    #[error("No questions available to select from")]
    NoQuestionsAvailable,

    #[error("Score map refers to unknown profile '{0}'")]
    UnknownProfile(ProfileId),
}

impl From<MatchingError> for DomainError {
    fn from(err: MatchingError) -> Self {
        match &err {
            MatchingError::NoQuestionsAvailable => {
                DomainError::new(ErrorCode::NoQuestionsAvailable, err.to_string())
            }
            MatchingError::UnknownProfile(id) => {
                DomainError::new(ErrorCode::ProfileNotFound, err.to_string())
                    .with_detail("profile_id", id.as_str())
            }
        }
    }
}
