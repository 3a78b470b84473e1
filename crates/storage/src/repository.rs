use async_trait::async_trait;
use daftar_core::model::{QuizRecordId, UserPreferences, VocabularyEntry, VocabularyId};
use daftar_core::quiz::{QuizMode, QuizSummary};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),
}

/// A finished quiz ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuizRecord {
    pub mode: QuizMode,
    pub summary: QuizSummary,
}

/// Persisted shape of a finished quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub id: QuizRecordId,
    pub mode: QuizMode,
    pub summary: QuizSummary,
}

/// Repository contract for the user's vocabulary list.
///
/// Iteration order is stable: entries come back in insertion order, and an
/// upsert of an existing id keeps its position.
#[async_trait]
pub trait VocabularyRepository: Send + Sync {
    /// Persist or update an entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be stored.
    async fn upsert_entry(&self, entry: &VocabularyEntry) -> Result<(), StorageError>;

    /// Fetch an entry by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn get_entry(&self, id: &VocabularyId) -> Result<Option<VocabularyEntry>, StorageError>;

    /// All entries in stable order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_entries(&self) -> Result<Vec<VocabularyEntry>, StorageError>;

    /// Remove an entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the entry does not exist.
    async fn delete_entry(&self, id: &VocabularyId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn get_preferences(&self) -> Result<Option<UserPreferences>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the preferences cannot be stored.
    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StorageError>;
}

#[async_trait]
pub trait QuizResultRepository: Send + Sync {
    /// Append a finished quiz and return its new id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn append_result(&self, record: &NewQuizRecord) -> Result<QuizRecordId, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the record does not exist.
    async fn get_result(&self, id: QuizRecordId) -> Result<QuizRecord, StorageError>;

    /// Most recent records first, at most `limit`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_results(&self, limit: usize) -> Result<Vec<QuizRecord>, StorageError>;
}

//
// ─── IN-MEMORY ADAPTER ─────────────────────────────────────────────────────────
//

#[derive(Default)]
struct QuizResults {
    next_id: u64,
    records: Vec<QuizRecord>,
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    vocabulary: Arc<Mutex<Vec<VocabularyEntry>>>,
    preferences: Arc<Mutex<Option<UserPreferences>>>,
    quiz_results: Arc<Mutex<QuizResults>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with the given entries, in order.
    #[must_use]
    pub fn with_entries(entries: Vec<VocabularyEntry>) -> Self {
        Self {
            vocabulary: Arc::new(Mutex::new(entries)),
            ..Self::default()
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Connection(e.to_string()))
}

#[async_trait]
impl VocabularyRepository for InMemoryRepository {
    async fn upsert_entry(&self, entry: &VocabularyEntry) -> Result<(), StorageError> {
        let mut guard = lock(&self.vocabulary)?;
        match guard.iter_mut().find(|existing| existing.id() == entry.id()) {
            Some(existing) => *existing = entry.clone(),
            None => guard.push(entry.clone()),
        }
        Ok(())
    }

    async fn get_entry(&self, id: &VocabularyId) -> Result<Option<VocabularyEntry>, StorageError> {
        let guard = lock(&self.vocabulary)?;
        Ok(guard.iter().find(|entry| entry.id() == id).cloned())
    }

    async fn list_entries(&self) -> Result<Vec<VocabularyEntry>, StorageError> {
        let guard = lock(&self.vocabulary)?;
        Ok(guard.clone())
    }

    async fn delete_entry(&self, id: &VocabularyId) -> Result<(), StorageError> {
        let mut guard = lock(&self.vocabulary)?;
        let before = guard.len();
        guard.retain(|entry| entry.id() != id);
        if guard.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryRepository {
    async fn get_preferences(&self) -> Result<Option<UserPreferences>, StorageError> {
        Ok(lock(&self.preferences)?.clone())
    }

    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StorageError> {
        *lock(&self.preferences)? = Some(preferences.clone());
        Ok(())
    }
}

#[async_trait]
impl QuizResultRepository for InMemoryRepository {
    async fn append_result(&self, record: &NewQuizRecord) -> Result<QuizRecordId, StorageError> {
        let mut guard = lock(&self.quiz_results)?;
        guard.next_id += 1;
        let id = QuizRecordId::new(guard.next_id);
        guard.records.push(QuizRecord {
            id,
            mode: record.mode,
            summary: record.summary.clone(),
        });
        Ok(id)
    }

    async fn get_result(&self, id: QuizRecordId) -> Result<QuizRecord, StorageError> {
        let guard = lock(&self.quiz_results)?;
        guard
            .records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn list_results(&self, limit: usize) -> Result<Vec<QuizRecord>, StorageError> {
        let guard = lock(&self.quiz_results)?;
        Ok(guard.records.iter().rev().take(limit).cloned().collect())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub vocabulary: Arc<dyn VocabularyRepository>,
    pub preferences: Arc<dyn PreferencesRepository>,
    pub quiz_results: Arc<dyn QuizResultRepository>,
}

impl Storage {
    /// In-memory storage pre-filled with the demo vocabulary list.
    #[must_use]
    pub fn in_memory_seeded(now: chrono::DateTime<chrono::Utc>) -> Self {
        let entries = crate::seed::demo_vocabulary(now);
        log::debug!("seeding in-memory vocabulary with {} entries", entries.len());
        Self::from_repository(InMemoryRepository::with_entries(entries))
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let vocabulary: Arc<dyn VocabularyRepository> = Arc::new(repo.clone());
        let preferences: Arc<dyn PreferencesRepository> = Arc::new(repo.clone());
        let quiz_results: Arc<dyn QuizResultRepository> = Arc::new(repo);
        Self {
            vocabulary,
            preferences,
            quiz_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daftar_core::model::VocabularyDraft;
    use daftar_core::time::fixed_now;

    fn build_entry(id: &str, translation: &str) -> VocabularyEntry {
        VocabularyDraft::new("كلمة", translation)
            .validate(VocabularyId::new(id), fixed_now())
            .unwrap()
    }

    #[tokio::test]
    async fn upsert_keeps_insertion_order() {
        let repo = InMemoryRepository::new();
        repo.upsert_entry(&build_entry("b", "first")).await.unwrap();
        repo.upsert_entry(&build_entry("a", "second")).await.unwrap();
        repo.upsert_entry(&build_entry("b", "first, edited"))
            .await
            .unwrap();

        let listed = repo.list_entries().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(listed[0].translation(), "first, edited");
    }

    #[tokio::test]
    async fn delete_missing_entry_is_not_found() {
        let repo = InMemoryRepository::with_entries(vec![build_entry("1", "one")]);
        repo.delete_entry(&VocabularyId::new("1")).await.unwrap();
        let err = repo
            .delete_entry(&VocabularyId::new("1"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
        assert!(repo.get_entry(&VocabularyId::new("1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn preferences_round_trip() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_preferences().await.unwrap().is_none());
        let prefs = UserPreferences::default();
        repo.save_preferences(&prefs).await.unwrap();
        assert_eq!(repo.get_preferences().await.unwrap(), Some(prefs));
    }
}
