//! Storage Adapters
//!
//! In-memory implementations of the repository ports.
//!
//! ## Available Adapters
//!
//! - **InMemoryProfileRepository** - Profiles in insertion order
//! - **InMemoryQuestionRepository** - Questions sorted by ordering hint
//! - **InMemorySessionRepository** - Quiz sessions keyed by id
//!
//! ## Usage
//!
//! ```ignore
//! use guessright::adapters::storage::InMemoryProfileRepository;
//!
//! let profiles = Arc::new(InMemoryProfileRepository::new());
//! ```

mod in_memory_profile_repository;
mod in_memory_question_repository;
mod in_memory_session_repository;

pub use in_memory_profile_repository::InMemoryProfileRepository;
pub use in_memory_question_repository::InMemoryQuestionRepository;
pub use in_memory_session_repository::InMemorySessionRepository;
