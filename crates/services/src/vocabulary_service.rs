use std::sync::Arc;

use daftar_core::model::{
    VocabularyDraft, VocabularyEntry, VocabularyId, VocabularyQuery, query,
};
use storage::repository::{StorageError, VocabularyRepository};

use crate::Clock;
use crate::error::VocabularyServiceError;

/// Orchestrates vocabulary list management and persistence.
#[derive(Clone)]
pub struct VocabularyService {
    clock: Clock,
    vocabulary: Arc<dyn VocabularyRepository>,
}

impl VocabularyService {
    #[must_use]
    pub fn new(clock: Clock, vocabulary: Arc<dyn VocabularyRepository>) -> Self {
        Self { clock, vocabulary }
    }

    /// Entries matching the query, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` on repository failures.
    pub async fn list(
        &self,
        query: &VocabularyQuery,
    ) -> Result<Vec<VocabularyEntry>, VocabularyServiceError> {
        let entries = self.vocabulary.list_entries().await?;
        Ok(entries
            .into_iter()
            .filter(|entry| query.matches(entry))
            .collect())
    }

    /// Distinct categories across the whole list, first-seen order.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` on repository failures.
    pub async fn categories(&self) -> Result<Vec<String>, VocabularyServiceError> {
        let entries = self.vocabulary.list_entries().await?;
        Ok(query::categories(&entries))
    }

    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` (`NotFound`) if the entry does not exist.
    pub async fn get(&self, id: &VocabularyId) -> Result<VocabularyEntry, VocabularyServiceError> {
        self.vocabulary
            .get_entry(id)
            .await?
            .ok_or(VocabularyServiceError::Storage(StorageError::NotFound))
    }

    /// Validate a draft and store it under a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Vocabulary` for invalid drafts.
    /// Returns `VocabularyServiceError::Storage` on repository failures.
    pub async fn add(&self, draft: VocabularyDraft) -> Result<VocabularyEntry, VocabularyServiceError> {
        let entry = draft.validate(VocabularyId::generate(), self.clock.now())?;
        self.vocabulary.upsert_entry(&entry).await?;
        log::info!("added vocabulary entry {}", entry.id());
        Ok(entry)
    }

    /// Replace the editable fields of an existing entry.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Vocabulary` for invalid drafts.
    /// Returns `VocabularyServiceError::Storage` if the entry is missing or cannot be stored.
    pub async fn update(
        &self,
        id: &VocabularyId,
        draft: VocabularyDraft,
    ) -> Result<VocabularyEntry, VocabularyServiceError> {
        let mut entry = self.get(id).await?;
        entry.apply_draft(draft, self.clock.now())?;
        self.vocabulary.upsert_entry(&entry).await?;
        Ok(entry)
    }

    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` if the entry is missing or cannot be stored.
    pub async fn toggle_favorite(
        &self,
        id: &VocabularyId,
    ) -> Result<VocabularyEntry, VocabularyServiceError> {
        let mut entry = self.get(id).await?;
        entry.toggle_favorite(self.clock.now());
        self.vocabulary.upsert_entry(&entry).await?;
        Ok(entry)
    }

    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` (`NotFound`) if the entry does not exist.
    pub async fn delete(&self, id: &VocabularyId) -> Result<(), VocabularyServiceError> {
        self.vocabulary.delete_entry(id).await?;
        log::info!("deleted vocabulary entry {id}");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` on repository failures.
    pub async fn count(&self) -> Result<usize, VocabularyServiceError> {
        Ok(self.vocabulary.list_entries().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daftar_core::model::{FilterScope, VocabularyError};
    use daftar_core::time::{fixed_clock, fixed_now};
    use storage::{InMemoryRepository, seed};

    fn service() -> VocabularyService {
        let repo = InMemoryRepository::with_entries(seed::demo_vocabulary(fixed_now()));
        VocabularyService::new(fixed_clock(), Arc::new(repo))
    }

    #[tokio::test]
    async fn list_applies_search_and_scope() {
        let svc = service();
        let greetings = svc
            .list(&VocabularyQuery::all().with_scope(FilterScope::Category("Greetings".into())))
            .await
            .unwrap();
        assert_eq!(greetings.len(), 2);

        let found = svc
            .list(&VocabularyQuery::all().with_search("WATER"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].arabic_text(), "ماء");

        let favorites = svc
            .list(&VocabularyQuery::all().with_scope(FilterScope::Favorites))
            .await
            .unwrap();
        assert_eq!(favorites.len(), 2);
    }

    #[tokio::test]
    async fn add_then_update_keeps_id() {
        let svc = service();
        let added = svc
            .add(VocabularyDraft::new("قلم", "Pen").with_category("Education"))
            .await
            .unwrap();
        assert_eq!(svc.count().await.unwrap(), 6);

        let mut draft = added.to_draft();
        draft.translation = "Pencil".into();
        let updated = svc.update(added.id(), draft).await.unwrap();
        assert_eq!(updated.id(), added.id());
        assert_eq!(svc.get(added.id()).await.unwrap().translation(), "Pencil");
        assert_eq!(svc.count().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn add_rejects_blank_translation() {
        let svc = service();
        let err = svc.add(VocabularyDraft::new("قلم", "  ")).await.unwrap_err();
        assert!(matches!(
            err,
            VocabularyServiceError::Vocabulary(VocabularyError::EmptyTranslation)
        ));
        assert_eq!(svc.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn toggle_and_delete() {
        let svc = service();
        let id = VocabularyId::new("2");
        assert!(svc.toggle_favorite(&id).await.unwrap().is_favorite());
        assert!(!svc.toggle_favorite(&id).await.unwrap().is_favorite());

        svc.delete(&id).await.unwrap();
        let err = svc.get(&id).await.unwrap_err();
        assert!(matches!(
            err,
            VocabularyServiceError::Storage(StorageError::NotFound)
        ));
        assert_eq!(
            svc.categories().await.unwrap(),
            vec!["Education", "Greetings", "Food & Drink", "Actions"]
        );
    }
}
