//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - In-memory repositories for profiles, questions and sessions
//! - `catalog` - Seed data read from JSON or YAML files

pub mod catalog;
pub mod storage;

pub use catalog::{CatalogError, CatalogFormat, FileCatalogSource};
pub use storage::{InMemoryProfileRepository, InMemoryQuestionRepository, InMemorySessionRepository};
