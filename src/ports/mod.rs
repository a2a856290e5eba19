//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `ProfileRepository` - Candidate profiles and their learned state
//! - `QuestionRepository` - Question catalog and usage counters
//! - `SessionRepository` - Quiz sessions and feedback
//!
//! ## Seed Data
//!
//! - `CatalogSource` - Loads the initial question and profile catalog

mod catalog_source;
mod profile_repository;
mod question_repository;
mod session_repository;

pub use catalog_source::{CatalogSnapshot, CatalogSource};
pub use profile_repository::ProfileRepository;
pub use question_repository::QuestionRepository;
pub use session_repository::SessionRepository;
