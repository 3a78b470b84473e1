use std::sync::Arc;

use rand::rng;
use rand::seq::SliceRandom;

use daftar_core::model::{QuizRecordId, VocabularyEntry};
use daftar_core::quiz::{QuizConfiguration, QuizFilter, QuizSession, apply_filters};
use storage::repository::{
    NewQuizRecord, QuizRecord, QuizResultRepository, VocabularyRepository,
};

use super::attempt::{QuizAnswerResult, QuizAttempt};
use crate::Clock;
use crate::error::QuizServiceError;

/// Orchestrates quiz start, answering and result persistence.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    vocabulary: Arc<dyn VocabularyRepository>,
    results: Arc<dyn QuizResultRepository>,
    shuffle: bool,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        vocabulary: Arc<dyn VocabularyRepository>,
        results: Arc<dyn QuizResultRepository>,
    ) -> Self {
        Self {
            clock,
            vocabulary,
            results,
            shuffle: false,
        }
    }

    /// Shuffle the filtered source before the engine takes its prefix.
    ///
    /// Ignored when a `QuizFilter::Recent` ordering was requested.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Load the vocabulary, apply `filters` and start a quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz(QuizError::EmptySource)` when no entry survives the filters.
    /// Returns `QuizServiceError::Storage` on repository failures.
    pub async fn start_quiz(
        &self,
        config: QuizConfiguration,
        filters: &[QuizFilter],
    ) -> Result<QuizAttempt, QuizServiceError> {
        let source = self.load_source(filters).await?;
        let mut session = QuizSession::new(config).with_clock(self.clock);
        session.start(&source)?;
        log::info!(
            "quiz started with {} words ({})",
            session.words().len(),
            config.mode().label()
        );

        Ok(QuizAttempt {
            session,
            filters: filters.to_vec(),
            record_id: None,
        })
    }

    /// Reload the source with `filters` and play the finished quiz again.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the quiz has not finished or the source is empty.
    /// Returns `QuizServiceError::Storage` on repository failures.
    pub async fn restart_quiz(
        &self,
        attempt: &mut QuizAttempt,
        filters: &[QuizFilter],
    ) -> Result<(), QuizServiceError> {
        let source = self.load_source(filters).await?;
        attempt.session.restart(&source)?;
        attempt.filters = filters.to_vec();
        attempt.record_id = None;
        Ok(())
    }

    /// Record the answer for the current card; store the result when the quiz finishes.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the card cannot be answered yet.
    /// Returns `QuizServiceError::Storage` if the finished quiz cannot be stored;
    /// the answer itself is kept and `finalize` can retry.
    pub async fn answer_current(
        &self,
        attempt: &mut QuizAttempt,
        correct: bool,
    ) -> Result<QuizAnswerResult, QuizServiceError> {
        let entry_id = attempt.session.answer(correct)?.entry.id().clone();

        if attempt.session.is_complete() && attempt.record_id.is_none() {
            self.finalize(attempt).await?;
        }

        Ok(QuizAnswerResult {
            entry_id,
            correct,
            is_complete: attempt.session.is_complete(),
            record_id: attempt.record_id,
        })
    }

    /// Store a finished quiz. Calling it again returns the stored id.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::NotComplete` before the quiz reaches its results.
    /// Returns `QuizServiceError::Storage` if persistence fails.
    pub async fn finalize(&self, attempt: &mut QuizAttempt) -> Result<QuizRecordId, QuizServiceError> {
        if let Some(id) = attempt.record_id {
            return Ok(id);
        }
        let Some(summary) = attempt.session.summary() else {
            return Err(QuizServiceError::NotComplete);
        };

        let record = NewQuizRecord {
            mode: attempt.session.config().mode(),
            summary: summary.clone(),
        };
        let id = self.results.append_result(&record).await?;
        attempt.record_id = Some(id);
        log::info!(
            "quiz {id} stored: {}/{} correct in {}",
            summary.correct_count(),
            summary.total(),
            summary.format_elapsed()
        );

        self.record_reviews(attempt.session.words()).await;
        Ok(id)
    }

    /// Most recent quiz records first.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` on repository failures.
    pub async fn history(&self, limit: usize) -> Result<Vec<QuizRecord>, QuizServiceError> {
        Ok(self.results.list_results(limit).await?)
    }

    async fn load_source(
        &self,
        filters: &[QuizFilter],
    ) -> Result<Vec<VocabularyEntry>, QuizServiceError> {
        let entries = self.vocabulary.list_entries().await?;
        let mut source = apply_filters(entries, filters);
        if self.shuffle && !filters.contains(&QuizFilter::Recent) {
            source.shuffle(&mut rng());
        }
        Ok(source)
    }

    // Review bookkeeping is best effort; the quiz record is already stored.
    async fn record_reviews(&self, words: &[VocabularyEntry]) {
        let now = self.clock.now();
        for word in words {
            let mut entry = match self.vocabulary.get_entry(word.id()).await {
                Ok(Some(entry)) => entry,
                Ok(None) => continue,
                Err(err) => {
                    log::warn!("could not load {} for review bookkeeping: {err}", word.id());
                    continue;
                }
            };
            entry.record_review(now);
            if let Err(err) = self.vocabulary.upsert_entry(&entry).await {
                log::warn!("could not record review for {}: {err}", word.id());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daftar_core::quiz::{QuizError, QuizMode, QuizState};
    use daftar_core::time::{fixed_clock, fixed_now};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use storage::{InMemoryRepository, StorageError, seed};

    fn service(repo: &InMemoryRepository) -> QuizLoopService {
        QuizLoopService::new(
            fixed_clock(),
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
        )
    }

    fn seeded() -> InMemoryRepository {
        InMemoryRepository::with_entries(seed::demo_vocabulary(fixed_now()))
    }

    async fn play(svc: &QuizLoopService, attempt: &mut QuizAttempt, answers: &[bool]) {
        for &correct in answers {
            attempt.reveal().unwrap();
            svc.answer_current(attempt, correct).await.unwrap();
        }
    }

    #[tokio::test]
    async fn empty_filter_result_is_empty_source() {
        let repo = seeded();
        let svc = service(&repo);
        let err = svc
            .start_quiz(
                QuizConfiguration::default(),
                &[QuizFilter::Category("Travel".into())],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, QuizServiceError::Quiz(QuizError::EmptySource)));
    }

    #[tokio::test]
    async fn finishing_stores_one_record_and_bumps_reviews() {
        let repo = seeded();
        let svc = service(&repo);
        let config = QuizConfiguration::new(2, QuizMode::ArabicToTranslation).unwrap();
        let mut attempt = svc.start_quiz(config, &[]).await.unwrap();

        attempt.reveal().unwrap();
        let first = svc.answer_current(&mut attempt, true).await.unwrap();
        assert_eq!(first.entry_id.as_str(), "1");
        assert!(!first.is_complete);
        assert_eq!(first.record_id, None);

        attempt.reveal().unwrap();
        let last = svc.answer_current(&mut attempt, false).await.unwrap();
        assert!(last.is_complete);
        let id = last.record_id.unwrap();

        assert_eq!(svc.finalize(&mut attempt).await.unwrap(), id);
        let history = svc.history(10).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].summary.accuracy_percent(), 50);

        let first_id = attempt.session().words()[0].id();
        let reviewed = repo.get_entry(first_id).await.unwrap().unwrap();
        assert_eq!(reviewed.review_count(), 1);
        assert_eq!(reviewed.last_reviewed_at(), Some(fixed_now()));
    }

    #[tokio::test]
    async fn answering_before_reveal_is_rejected() {
        let repo = seeded();
        let svc = service(&repo);
        let mut attempt = svc.start_quiz(QuizConfiguration::default(), &[]).await.unwrap();
        let err = svc.answer_current(&mut attempt, true).await.unwrap_err();
        assert!(matches!(
            err,
            QuizServiceError::Quiz(QuizError::InvalidTransition { .. })
        ));
        assert!(attempt.session().answer_log().is_empty());
    }

    #[tokio::test]
    async fn finalize_before_results_is_not_complete() {
        let repo = seeded();
        let svc = service(&repo);
        let mut attempt = svc.start_quiz(QuizConfiguration::default(), &[]).await.unwrap();
        let err = svc.finalize(&mut attempt).await.unwrap_err();
        assert!(matches!(err, QuizServiceError::NotComplete));
    }

    #[tokio::test]
    async fn restart_reloads_and_clears_record() {
        let repo = seeded();
        let svc = service(&repo);
        let mut attempt = svc
            .start_quiz(QuizConfiguration::default(), &[QuizFilter::Favorites])
            .await
            .unwrap();
        assert_eq!(attempt.session().words().len(), 2);
        play(&svc, &mut attempt, &[true, true]).await;
        assert!(attempt.record_id().is_some());

        svc.restart_quiz(&mut attempt, &[]).await.unwrap();
        assert_eq!(attempt.session().state(), QuizState::Playing);
        assert_eq!(attempt.session().words().len(), 5);
        assert_eq!(attempt.record_id(), None);
        assert!(attempt.filters().is_empty());
    }

    #[tokio::test]
    async fn restart_while_playing_is_rejected() {
        let repo = seeded();
        let svc = service(&repo);
        let mut attempt = svc.start_quiz(QuizConfiguration::default(), &[]).await.unwrap();
        let err = svc.restart_quiz(&mut attempt, &[]).await.unwrap_err();
        assert!(matches!(
            err,
            QuizServiceError::Quiz(QuizError::InvalidTransition { .. })
        ));
    }

    #[tokio::test]
    async fn recent_filter_survives_shuffle() {
        let repo = seeded();
        let svc = service(&repo).with_shuffle(true);
        let attempt = svc
            .start_quiz(QuizConfiguration::all(QuizMode::TranslationToArabic), &[QuizFilter::Recent])
            .await
            .unwrap();
        let ids: Vec<_> = attempt.session().words().iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    /// Fails the first append, then stores normally.
    struct FailOnceResults {
        inner: InMemoryRepository,
        failed: AtomicBool,
    }

    #[async_trait]
    impl QuizResultRepository for FailOnceResults {
        async fn append_result(&self, record: &NewQuizRecord) -> Result<QuizRecordId, StorageError> {
            if !self.failed.swap(true, Ordering::SeqCst) {
                return Err(StorageError::Connection("disk full".into()));
            }
            self.inner.append_result(record).await
        }

        async fn get_result(&self, id: QuizRecordId) -> Result<QuizRecord, StorageError> {
            self.inner.get_result(id).await
        }

        async fn list_results(&self, limit: usize) -> Result<Vec<QuizRecord>, StorageError> {
            self.inner.list_results(limit).await
        }
    }

    #[tokio::test]
    async fn finalize_retries_after_failed_store() {
        let repo = seeded();
        let svc = QuizLoopService::new(
            fixed_clock(),
            Arc::new(repo.clone()),
            Arc::new(FailOnceResults {
                inner: repo.clone(),
                failed: AtomicBool::new(false),
            }),
        );
        let config = QuizConfiguration::new(1, QuizMode::ArabicToTranslation).unwrap();
        let mut attempt = svc.start_quiz(config, &[]).await.unwrap();

        attempt.reveal().unwrap();
        let err = svc.answer_current(&mut attempt, true).await.unwrap_err();
        assert!(matches!(err, QuizServiceError::Storage(StorageError::Connection(_))));
        assert_eq!(attempt.session().state(), QuizState::Results);
        assert_eq!(attempt.session().answer_log().len(), 1);
        assert_eq!(attempt.record_id(), None);

        let id = svc.finalize(&mut attempt).await.unwrap();
        assert_eq!(attempt.record_id(), Some(id));
        assert_eq!(svc.finalize(&mut attempt).await.unwrap(), id);
        assert_eq!(svc.history(10).await.unwrap().len(), 1);

        let entry = repo
            .get_entry(&daftar_core::model::VocabularyId::new("1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(entry.review_count(), 1);
    }
}
