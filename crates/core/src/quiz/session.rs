use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::VocabularyEntry;
use crate::time::Clock;

use super::config::QuizConfiguration;
use super::error::{QuizError, QuizEvent};
use super::summary::{QuizSummary, accuracy_percent};

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizState {
    #[default]
    Config,
    Playing,
    Results,
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Config => "config",
            Self::Playing => "playing",
            Self::Results => "results",
        };
        f.write_str(name)
    }
}

/// One answered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub entry: VocabularyEntry,
    pub correct: bool,
}

/// What the presentation layer shows for the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizCard<'a> {
    /// 1-based position in the quiz.
    pub position: usize,
    pub total: usize,
    pub prompt: &'a str,
    /// `None` until the card is revealed.
    pub answer: Option<&'a str>,
    pub hint: &'static str,
    pub prompt_is_arabic: bool,
}

/// Aggregated view of quiz progress, useful for a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub answered: usize,
    pub total: usize,
    pub remaining: usize,
    pub percent: u8,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz attempt, from configuration through results.
///
/// Words are the first `word_count` entries of the source, in source order.
/// Every transition either completes or returns a `QuizError` without
/// touching the session.
#[derive(Clone)]
pub struct QuizSession {
    config: QuizConfiguration,
    clock: Clock,
    state: QuizState,
    words: Vec<VocabularyEntry>,
    current_index: usize,
    revealed: bool,
    answer_log: Vec<AnswerRecord>,
    started_at: Option<DateTime<Utc>>,
    summary: Option<QuizSummary>,
}

impl QuizSession {
    #[must_use]
    pub fn new(config: QuizConfiguration) -> Self {
        Self {
            config,
            clock: Clock::default(),
            state: QuizState::Config,
            words: Vec::new(),
            current_index: 0,
            revealed: false,
            answer_log: Vec::new(),
            started_at: None,
            summary: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Mutable access to the clock, so tests can advance a fixed clock mid-quiz.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfiguration {
        &self.config
    }

    /// Change the configuration before the quiz starts.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside the `Config` state.
    pub fn configure(&mut self, config: QuizConfiguration) -> Result<(), QuizError> {
        self.expect_state(QuizEvent::Configure, QuizState::Config)?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn words(&self) -> &[VocabularyEntry] {
        &self.words
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn answer_log(&self) -> &[AnswerRecord] {
        &self.answer_log
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Available only in the `Results` state.
    #[must_use]
    pub fn summary(&self) -> Option<&QuizSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Results
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&VocabularyEntry> {
        if self.state == QuizState::Playing {
            self.words.get(self.current_index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn current_card(&self) -> Option<QuizCard<'_>> {
        let entry = self.current_entry()?;
        let mode = self.config.mode();
        Some(QuizCard {
            position: self.current_index + 1,
            total: self.words.len(),
            prompt: mode.prompt(entry),
            answer: self.revealed.then(|| mode.answer(entry)),
            hint: mode.prompt_hint(),
            prompt_is_arabic: mode.prompt_is_arabic(),
        })
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.words.len();
        let answered = self.answer_log.len();
        let percent = match self.state {
            QuizState::Config => 0,
            QuizState::Playing => accuracy_percent(self.current_index + 1, total),
            QuizState::Results => 100,
        };
        QuizProgress {
            answered,
            total,
            remaining: total.saturating_sub(answered),
            percent,
        }
    }

    /// Select words from `source` and begin the quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside the `Config` state.
    /// Returns `QuizError::EmptySource` if `source` is empty; the session stays in `Config`.
    pub fn start(&mut self, source: &[VocabularyEntry]) -> Result<(), QuizError> {
        self.expect_state(QuizEvent::Start, QuizState::Config)?;
        self.begin(source)
    }

    /// Show the answer side of the current card. Revealing twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside the `Playing` state.
    pub fn reveal(&mut self) -> Result<(), QuizError> {
        self.expect_state(QuizEvent::Reveal, QuizState::Playing)?;
        if self.current_index >= self.words.len() {
            return Err(self.invalid(QuizEvent::Reveal));
        }
        self.revealed = true;
        Ok(())
    }

    /// Record whether the current card was answered correctly and move on.
    ///
    /// Answering the last card moves the session to `Results` and computes the summary.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside `Playing` or before the card is revealed.
    pub fn answer(&mut self, correct: bool) -> Result<&AnswerRecord, QuizError> {
        self.expect_state(QuizEvent::Answer, QuizState::Playing)?;
        if !self.revealed {
            return Err(self.invalid(QuizEvent::Answer));
        }
        let Some(entry) = self.words.get(self.current_index).cloned() else {
            return Err(self.invalid(QuizEvent::Answer));
        };

        self.answer_log.push(AnswerRecord { entry, correct });

        if self.current_index + 1 >= self.words.len() {
            self.finish();
        } else {
            self.current_index += 1;
            self.revealed = false;
        }

        self.answer_log
            .last()
            .ok_or_else(|| self.invalid(QuizEvent::Answer))
    }

    /// Abandon the attempt and return to `Config`. Valid from any state.
    pub fn reset(&mut self) {
        if self.state != QuizState::Config {
            log::debug!("quiz reset from {}", self.state);
        }
        self.state = QuizState::Config;
        self.clear();
    }

    /// Start a fresh attempt with the same configuration.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside the `Results` state.
    /// Returns `QuizError::EmptySource` if `source` is empty; the results stay untouched.
    pub fn restart(&mut self, source: &[VocabularyEntry]) -> Result<(), QuizError> {
        self.expect_state(QuizEvent::Restart, QuizState::Results)?;
        self.begin(source)
    }

    fn begin(&mut self, source: &[VocabularyEntry]) -> Result<(), QuizError> {
        if source.is_empty() {
            return Err(QuizError::EmptySource);
        }

        let count = self.config.word_count().clamp(source.len());
        self.clear();
        self.words = source.iter().take(count).cloned().collect();
        self.started_at = Some(self.clock.now());
        self.state = QuizState::Playing;

        log::debug!(
            "quiz started: {} of {} words, mode {:?}",
            self.words.len(),
            source.len(),
            self.config.mode()
        );
        Ok(())
    }

    fn finish(&mut self) {
        let completed_at = self.clock.now();
        let started_at = self.started_at.unwrap_or(completed_at);
        let summary = QuizSummary::from_answers(started_at, completed_at, &self.answer_log);
        log::debug!(
            "quiz finished: {}/{} correct",
            summary.correct_count(),
            summary.total()
        );
        self.summary = Some(summary);
        self.revealed = false;
        self.state = QuizState::Results;
    }

    fn clear(&mut self) {
        self.words.clear();
        self.current_index = 0;
        self.revealed = false;
        self.answer_log.clear();
        self.started_at = None;
        self.summary = None;
    }

    fn expect_state(&self, event: QuizEvent, expected: QuizState) -> Result<(), QuizError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(self.invalid(event))
        }
    }

    fn invalid(&self, event: QuizEvent) -> QuizError {
        QuizError::InvalidTransition {
            event,
            state: self.state,
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("words_len", &self.words.len())
            .field("current_index", &self.current_index)
            .field("revealed", &self.revealed)
            .field("answers_len", &self.answer_log.len())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
