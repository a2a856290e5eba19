//! GuessRight - Adaptive Customer Profile Questionnaire
//!
//! Asks yes/no/unsure questions, picks each next question to split the
//! remaining candidate profiles, resolves the best match with a confidence
//! value, and adjusts profiles from user feedback on the match.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
