use std::fmt;

use thiserror::Error;

use super::session::QuizState;

/// Caller-triggered events of the quiz state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizEvent {
    Configure,
    Start,
    Reveal,
    Answer,
    Restart,
}

impl fmt::Display for QuizEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configure => "configure",
            Self::Start => "start",
            Self::Reveal => "reveal",
            Self::Answer => "answer",
            Self::Restart => "restart",
        };
        f.write_str(name)
    }
}

/// Errors emitted by `QuizSession`. Neither kind changes the session state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot {event} a quiz in the {state} state")]
    InvalidTransition { event: QuizEvent, state: QuizState },

    #[error("no vocabulary available to quiz")]
    EmptySource,
}
