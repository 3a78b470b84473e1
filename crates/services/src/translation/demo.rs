use async_trait::async_trait;

use daftar_core::model::{
    Language, PartOfSpeech, TranslationDirection, TranslationRequest, TranslationResult,
    WordBreakdown,
};

use super::TranslationProvider;
use crate::error::TranslationError;

/// Inputs longer than this many characters get the sentence sample.
const SENTENCE_THRESHOLD: usize = 10;

/// Offline provider returning canned samples. Used when no HTTP provider is configured.
#[derive(Clone, Debug, Default)]
pub struct DemoTranslationProvider;

impl DemoTranslationProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn word(
    arabic: &str,
    root: Option<&str>,
    part_of_speech: PartOfSpeech,
    translation: &str,
) -> WordBreakdown {
    WordBreakdown {
        arabic: arabic.to_string(),
        root: root.map(str::to_string),
        part_of_speech: Some(part_of_speech),
        translation: translation.to_string(),
    }
}

fn word_sample() -> (String, Vec<WordBreakdown>, String, String) {
    (
        "Book".into(),
        vec![word("كتاب", Some("ك-ت-ب"), PartOfSpeech::Noun, "book")],
        "هذا كتاب جميل".into(),
        "This is a beautiful book".into(),
    )
}

fn sentence_sample() -> (String, Vec<WordBreakdown>, String, String) {
    (
        "I love reading every day".into(),
        vec![
            word("أنا", None, PartOfSpeech::Pronoun, "I"),
            word("أحب", Some("ح-ب-ب"), PartOfSpeech::Verb, "love"),
            word("القراءة", Some("ق-ر-أ"), PartOfSpeech::Noun, "reading"),
            word("كل", None, PartOfSpeech::Adjective, "every"),
            word("يوم", Some("ي-و-م"), PartOfSpeech::Noun, "day"),
        ],
        "القراءة تفتح العقول".into(),
        "Reading opens minds".into(),
    )
}

#[async_trait]
impl TranslationProvider for DemoTranslationProvider {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        let (translation, word_breakdown, example_sentence, example_translation) =
            if request.text.chars().count() > SENTENCE_THRESHOLD {
                sentence_sample()
            } else {
                word_sample()
            };

        // The samples are Arabic → English; flip them for the reverse direction.
        let translation = match request.direction {
            TranslationDirection::ToArabic => word_breakdown
                .iter()
                .map(|w| w.arabic.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            _ => translation,
        };

        Ok(TranslationResult {
            source_text: request.text.clone(),
            source_language: request.direction.source().unwrap_or(Language::English),
            target_language: request.direction.target(),
            translation,
            word_breakdown,
            example_sentence: Some(example_sentence),
            example_translation: Some(example_translation),
        })
    }
}
