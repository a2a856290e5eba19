//! Catalog module - questions and customer profiles.
//!
//! These are the records the storage collaborator hands to the matching
//! engine. Apart from the usage counters and the learning data they are
//! read-only during a quiz.

mod learning_record;
mod profile;
mod question;

pub use learning_record::LearningRecord;
pub use profile::Profile;
pub use question::Question;
