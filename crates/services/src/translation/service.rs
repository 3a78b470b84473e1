use std::sync::Arc;

use daftar_core::model::{
    TranslationDirection, TranslationRequest, TranslationResult, VocabularyDraft, VocabularyEntry,
};

use super::TranslationProvider;
use crate::error::{TranslationError, VocabularyServiceError};
use crate::vocabulary_service::VocabularyService;

/// Translator screen: runs a provider and saves results to the vocabulary list.
#[derive(Clone)]
pub struct TranslatorService {
    provider: Arc<dyn TranslationProvider>,
    vocabulary: VocabularyService,
}

impl TranslatorService {
    #[must_use]
    pub fn new(provider: Arc<dyn TranslationProvider>, vocabulary: VocabularyService) -> Self {
        Self {
            provider,
            vocabulary,
        }
    }

    /// Translate `text` in the given direction.
    ///
    /// Blank input never reaches the provider.
    ///
    /// # Errors
    ///
    /// Returns `TranslationError::EmptyInput` for blank text, or the provider's error.
    pub async fn translate(
        &self,
        text: &str,
        direction: TranslationDirection,
    ) -> Result<TranslationResult, TranslationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let request = TranslationRequest {
            text: text.to_string(),
            direction,
        };
        log::debug!("translating {} chars ({})", text.chars().count(), direction.short_label());
        let mut result = self.provider.translate(&request).await?;
        result.source_text = request.text;
        Ok(result)
    }

    /// Store a translation as a new vocabulary entry, Arabic side as the headword.
    ///
    /// Single-word results also carry the root and part of speech from the breakdown.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError` if the entry is invalid or cannot be stored.
    pub async fn save_to_vocabulary(
        &self,
        result: &TranslationResult,
    ) -> Result<VocabularyEntry, VocabularyServiceError> {
        let (arabic, other) = result.arabic_pair();
        let mut draft = VocabularyDraft::new(arabic, other);
        if let [word] = result.word_breakdown.as_slice() {
            draft.root = word.root.clone();
            draft.part_of_speech = word.part_of_speech;
        }
        if let (Some(sentence), Some(translation)) =
            (&result.example_sentence, &result.example_translation)
        {
            draft = draft.with_example(sentence, translation);
        }
        self.vocabulary.add(draft).await
    }
}
