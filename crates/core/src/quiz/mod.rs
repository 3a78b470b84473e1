//! Flashcard quiz over a vocabulary list.
//!
//! A [`QuizSession`] moves through `Config → Playing → Results`; callers drive it
//! with `start`, `reveal`, `answer`, `reset` and `restart`, and read the
//! [`QuizSummary`] once it reaches `Results`.

mod config;
mod error;
mod filter;
mod session;
mod summary;

pub use config::{QuizConfigError, QuizConfiguration, QuizMode, WORD_COUNT_PRESETS, WordCount};
pub use error::{QuizError, QuizEvent};
pub use filter::{QuizFilter, apply_filters};
pub use session::{AnswerRecord, QuizCard, QuizProgress, QuizSession, QuizState};
pub use summary::{QuizSummary, accuracy_percent};
