use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::PartOfSpeech;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "en")]
    English,
}

impl Language {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::French => "fr",
            Self::English => "en",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Arabic => "Arabic",
            Self::French => "French",
            Self::English => "English",
        }
    }

    #[must_use]
    pub fn is_right_to_left(self) -> bool {
        matches!(self, Self::Arabic)
    }
}

/// Direction picked on the translator screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TranslationDirection {
    #[default]
    ArabicToEnglish,
    ArabicToFrench,
    /// English or French input, Arabic output.
    ToArabic,
}

impl TranslationDirection {
    pub const ALL: [Self; 3] = [Self::ArabicToEnglish, Self::ArabicToFrench, Self::ToArabic];

    /// `None` when the source may be either English or French.
    #[must_use]
    pub fn source(self) -> Option<Language> {
        match self {
            Self::ArabicToEnglish | Self::ArabicToFrench => Some(Language::Arabic),
            Self::ToArabic => None,
        }
    }

    #[must_use]
    pub fn target(self) -> Language {
        match self {
            Self::ArabicToEnglish => Language::English,
            Self::ArabicToFrench => Language::French,
            Self::ToArabic => Language::Arabic,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ArabicToEnglish => "Arabic → English",
            Self::ArabicToFrench => "Arabic → French",
            Self::ToArabic => "English/French → Arabic",
        }
    }

    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Self::ArabicToEnglish => "ar-en",
            Self::ArabicToFrench => "ar-fr",
            Self::ToArabic => "to-ar",
        }
    }
}

impl fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown translation direction: {}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for TranslationDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.short_label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub direction: TranslationDirection,
}

/// One word of the source text with its gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBreakdown {
    pub arabic: String,
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub part_of_speech: Option<PartOfSpeech>,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub source_text: String,
    pub source_language: Language,
    pub target_language: Language,
    pub translation: String,
    #[serde(default)]
    pub word_breakdown: Vec<WordBreakdown>,
    #[serde(default)]
    pub example_sentence: Option<String>,
    #[serde(default)]
    pub example_translation: Option<String>,
}

impl TranslationResult {
    /// Returns `(arabic, other)` regardless of which side was the source.
    #[must_use]
    pub fn arabic_pair(&self) -> (&str, &str) {
        if self.target_language == Language::Arabic {
            (&self.translation, &self.source_text)
        } else {
            (&self.source_text, &self.translation)
        }
    }
}
