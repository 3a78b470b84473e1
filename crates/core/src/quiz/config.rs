use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::VocabularyEntry;

/// Word counts offered on the configuration screen.
pub const WORD_COUNT_PRESETS: [usize; 3] = [5, 10, 20];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizConfigError {
    #[error("a quiz needs at least one word")]
    ZeroWordCount,

    #[error("unknown quiz mode: {0}")]
    UnknownMode(String),
}

/// Which side of the card is the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizMode {
    /// See Arabic, recall the meaning.
    #[default]
    ArabicToTranslation,
    /// See the meaning, recall the Arabic.
    TranslationToArabic,
}

impl QuizMode {
    #[must_use]
    pub fn prompt(self, entry: &VocabularyEntry) -> &str {
        match self {
            Self::ArabicToTranslation => entry.arabic_text(),
            Self::TranslationToArabic => entry.translation(),
        }
    }

    #[must_use]
    pub fn answer(self, entry: &VocabularyEntry) -> &str {
        match self {
            Self::ArabicToTranslation => entry.translation(),
            Self::TranslationToArabic => entry.arabic_text(),
        }
    }

    #[must_use]
    pub fn prompt_is_arabic(self) -> bool {
        matches!(self, Self::ArabicToTranslation)
    }

    #[must_use]
    pub fn prompt_hint(self) -> &'static str {
        match self {
            Self::ArabicToTranslation => "What does this mean?",
            Self::TranslationToArabic => "How do you say...",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ArabicToTranslation => "Arabic → Translation",
            Self::TranslationToArabic => "Translation → Arabic",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuizMode {
    type Err = QuizConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar-tr" | "arabic-to-translation" => Ok(Self::ArabicToTranslation),
            "tr-ar" | "translation-to-arabic" => Ok(Self::TranslationToArabic),
            other => Err(QuizConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Requested number of words; clamped to what is available when the quiz starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordCount {
    Limited(NonZeroUsize),
    All,
}

impl WordCount {
    #[must_use]
    pub fn clamp(self, available: usize) -> usize {
        match self {
            Self::Limited(n) => n.get().min(available),
            Self::All => available,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{n}"),
            Self::All => f.write_str("all"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizConfiguration {
    word_count: WordCount,
    mode: QuizMode,
}

impl QuizConfiguration {
    /// # Errors
    ///
    /// Returns `QuizConfigError::ZeroWordCount` when `word_count` is zero.
    pub fn new(word_count: usize, mode: QuizMode) -> Result<Self, QuizConfigError> {
        let count = NonZeroUsize::new(word_count).ok_or(QuizConfigError::ZeroWordCount)?;
        Ok(Self {
            word_count: WordCount::Limited(count),
            mode,
        })
    }

    /// Quiz every available entry.
    #[must_use]
    pub fn all(mode: QuizMode) -> Self {
        Self {
            word_count: WordCount::All,
            mode,
        }
    }

    #[must_use]
    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    #[must_use]
    pub fn with_mode(mut self, mode: QuizMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for QuizConfiguration {
    fn default() -> Self {
        Self {
            word_count: WordCount::Limited(
                NonZeroUsize::new(WORD_COUNT_PRESETS[0]).unwrap_or(NonZeroUsize::MIN),
            ),
            mode: QuizMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{VocabularyDraft, VocabularyId};
    use crate::time::fixed_now;

    #[test]
    fn zero_word_count_is_rejected() {
        assert_eq!(
            QuizConfiguration::new(0, QuizMode::default()).unwrap_err(),
            QuizConfigError::ZeroWordCount
        );
    }

    #[test]
    fn default_uses_first_preset() {
        let config = QuizConfiguration::default();
        assert_eq!(config.word_count().clamp(100), WORD_COUNT_PRESETS[0]);
        assert_eq!(config.mode(), QuizMode::ArabicToTranslation);
    }

    #[test]
    fn word_count_clamps_to_availability() {
        let config = QuizConfiguration::new(10, QuizMode::default()).unwrap();
        assert_eq!(config.word_count().clamp(5), 5);
        assert_eq!(config.word_count().clamp(12), 10);
        assert_eq!(WordCount::All.clamp(7), 7);
    }

    #[test]
    fn mode_selects_prompt_and_answer_fields() {
        let entry = VocabularyDraft::new("ماء", "Water")
            .validate(VocabularyId::new("4"), fixed_now())
            .unwrap();
        assert_eq!(QuizMode::ArabicToTranslation.prompt(&entry), "ماء");
        assert_eq!(QuizMode::ArabicToTranslation.answer(&entry), "Water");
        assert_eq!(QuizMode::TranslationToArabic.prompt(&entry), "Water");
        assert_eq!(QuizMode::TranslationToArabic.answer(&entry), "ماء");
        assert_eq!("tr-ar".parse::<QuizMode>().unwrap(), QuizMode::TranslationToArabic);
    }
}
