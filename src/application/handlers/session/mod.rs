//! Session command and query handlers.

mod complete_session;
mod get_session;
mod next_question;
mod record_answer;
mod start_session;

pub use complete_session::{CompleteSessionCommand, CompleteSessionHandler, CompleteSessionResult};
pub use get_session::{GetSessionHandler, GetSessionQuery, SessionDetails};
pub use next_question::{NextQuestion, NextQuestionHandler, NextQuestionQuery, TerminationReason};
pub use record_answer::{RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult};
pub use start_session::{StartSessionCommand, StartSessionHandler};
