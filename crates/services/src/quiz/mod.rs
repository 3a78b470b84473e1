//! Storage-backed quiz flow around the `QuizSession` engine.

mod attempt;
mod workflow;

pub use crate::error::QuizServiceError;
pub use attempt::{QuizAnswerResult, QuizAttempt};
pub use workflow::QuizLoopService;
