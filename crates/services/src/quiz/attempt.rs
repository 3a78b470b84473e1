use daftar_core::model::{QuizRecordId, VocabularyId};
use daftar_core::quiz::{QuizCard, QuizError, QuizFilter, QuizProgress, QuizSession, QuizSummary};

/// A quiz in progress together with how it was sourced and whether it was stored.
#[derive(Debug, Clone)]
pub struct QuizAttempt {
    pub(super) session: QuizSession,
    pub(super) filters: Vec<QuizFilter>,
    pub(super) record_id: Option<QuizRecordId>,
}

/// Outcome of answering one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub entry_id: VocabularyId,
    pub correct: bool,
    pub is_complete: bool,
    /// Set once the finished quiz has been stored.
    pub record_id: Option<QuizRecordId>,
}

impl QuizAttempt {
    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn filters(&self) -> &[QuizFilter] {
        &self.filters
    }

    #[must_use]
    pub fn record_id(&self) -> Option<QuizRecordId> {
        self.record_id
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<QuizCard<'_>> {
        self.session.current_card()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.session.progress()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&QuizSummary> {
        self.session.summary()
    }

    /// Reveal needs no storage, so it goes straight to the engine.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside the `Playing` state.
    pub fn reveal(&mut self) -> Result<(), QuizError> {
        self.session.reveal()
    }

    /// Abandon the attempt. A stored record stays stored.
    pub fn reset(&mut self) {
        self.session.reset();
        self.record_id = None;
    }
}
