//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, answers, errors)
//! - `catalog` - Questions and customer profiles
//! - `matching` - Scoring, match resolution, question selection and learning
//! - `session` - Quiz session lifecycle
//! - `analysis` - Pure feedback analysis over completed sessions

pub mod analysis;
pub mod catalog;
pub mod foundation;
pub mod matching;
pub mod session;
