use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::{UserId, VocabularyId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("arabic text cannot be empty")]
    EmptyArabicText,

    #[error("translation cannot be empty")]
    EmptyTranslation,

    #[error("difficulty must be between 1 and 5, got {0}")]
    InvalidDifficulty(u8),

    #[error("unknown part of speech: {0}")]
    UnknownPartOfSpeech(String),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Self-assessed difficulty of an entry, 1 (easy) to 5 (hard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    ///
    /// Returns `VocabularyError::InvalidDifficulty` outside `1..=5`.
    pub fn new(value: u8) -> Result<Self, VocabularyError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(VocabularyError::InvalidDifficulty(value))
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = VocabularyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.0
    }
}

//
// ─── PART OF SPEECH ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Pronoun,
    Conjunction,
    Interjection,
    Particle,
}

impl PartOfSpeech {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Preposition => "preposition",
            Self::Pronoun => "pronoun",
            Self::Conjunction => "conjunction",
            Self::Interjection => "interjection",
            Self::Particle => "particle",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noun" => Ok(Self::Noun),
            "verb" => Ok(Self::Verb),
            "adjective" => Ok(Self::Adjective),
            "adverb" => Ok(Self::Adverb),
            "preposition" => Ok(Self::Preposition),
            "pronoun" => Ok(Self::Pronoun),
            "conjunction" => Ok(Self::Conjunction),
            "interjection" => Ok(Self::Interjection),
            "particle" => Ok(Self::Particle),
            other => Err(VocabularyError::UnknownPartOfSpeech(other.to_string())),
        }
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated input for creating or editing a vocabulary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyDraft {
    pub user_id: Option<UserId>,
    pub arabic_text: String,
    pub translation: String,
    pub transliteration: Option<String>,
    pub part_of_speech: Option<PartOfSpeech>,
    pub root: Option<String>,
    pub example_sentence: Option<String>,
    pub example_translation: Option<String>,
    pub notes: Option<String>,
    pub category: Option<String>,
    pub difficulty: u8,
    pub is_favorite: bool,
}

impl VocabularyDraft {
    /// Minimal draft: headword + translation, difficulty 1.
    #[must_use]
    pub fn new(arabic_text: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            arabic_text: arabic_text.into(),
            translation: translation.into(),
            difficulty: Difficulty::MIN,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    #[must_use]
    pub fn with_part_of_speech(mut self, part_of_speech: PartOfSpeech) -> Self {
        self.part_of_speech = Some(part_of_speech);
        self
    }

    #[must_use]
    pub fn with_example(
        mut self,
        sentence: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.example_sentence = Some(sentence.into());
        self.example_translation = Some(translation.into());
        self
    }

    #[must_use]
    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Validate the draft into an entry with the given id, created at `now`.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError` if a required text is blank or the difficulty is out of range.
    pub fn validate(
        self,
        id: VocabularyId,
        now: DateTime<Utc>,
    ) -> Result<VocabularyEntry, VocabularyError> {
        let arabic_text = self.arabic_text.trim().to_string();
        if arabic_text.is_empty() {
            return Err(VocabularyError::EmptyArabicText);
        }
        let translation = self.translation.trim().to_string();
        if translation.is_empty() {
            return Err(VocabularyError::EmptyTranslation);
        }
        let difficulty = Difficulty::new(self.difficulty)?;

        Ok(VocabularyEntry {
            id,
            user_id: self.user_id,
            arabic_text,
            translation,
            transliteration: normalize_optional(self.transliteration),
            part_of_speech: self.part_of_speech,
            root: normalize_optional(self.root),
            example_sentence: normalize_optional(self.example_sentence),
            example_translation: normalize_optional(self.example_translation),
            notes: normalize_optional(self.notes),
            category: normalize_optional(self.category),
            difficulty,
            is_favorite: self.is_favorite,
            review_count: 0,
            last_reviewed_at: None,
            created_at: now,
            updated_at: now,
        })
    }
}

//
// ─── ENTRY ─────────────────────────────────────────────────────────────────────
//

/// A saved word or phrase with its translation and study metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    id: VocabularyId,
    user_id: Option<UserId>,
    arabic_text: String,
    translation: String,
    transliteration: Option<String>,
    part_of_speech: Option<PartOfSpeech>,
    root: Option<String>,
    example_sentence: Option<String>,
    example_translation: Option<String>,
    notes: Option<String>,
    category: Option<String>,
    difficulty: Difficulty,
    is_favorite: bool,
    review_count: u32,
    last_reviewed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl VocabularyEntry {
    /// Replace the editable fields from a draft, keeping identity and review bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError` if the draft fails validation.
    pub fn apply_draft(
        &mut self,
        draft: VocabularyDraft,
        now: DateTime<Utc>,
    ) -> Result<(), VocabularyError> {
        let validated = draft.validate(self.id.clone(), self.created_at)?;
        let review_count = self.review_count;
        let last_reviewed_at = self.last_reviewed_at;
        *self = Self {
            review_count,
            last_reviewed_at,
            updated_at: now,
            ..validated
        };
        Ok(())
    }

    pub fn toggle_favorite(&mut self, now: DateTime<Utc>) {
        self.is_favorite = !self.is_favorite;
        self.updated_at = now;
    }

    pub fn record_review(&mut self, now: DateTime<Utc>) {
        self.review_count = self.review_count.saturating_add(1);
        self.last_reviewed_at = Some(now);
    }

    #[must_use]
    pub fn id(&self) -> &VocabularyId {
        &self.id
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    #[must_use]
    pub fn arabic_text(&self) -> &str {
        &self.arabic_text
    }

    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    #[must_use]
    pub fn transliteration(&self) -> Option<&str> {
        self.transliteration.as_deref()
    }

    #[must_use]
    pub fn part_of_speech(&self) -> Option<PartOfSpeech> {
        self.part_of_speech
    }

    #[must_use]
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    #[must_use]
    pub fn example_sentence(&self) -> Option<&str> {
        self.example_sentence.as_deref()
    }

    #[must_use]
    pub fn example_translation(&self) -> Option<&str> {
        self.example_translation.as_deref()
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    #[must_use]
    pub fn review_count(&self) -> u32 {
        self.review_count
    }

    #[must_use]
    pub fn last_reviewed_at(&self) -> Option<DateTime<Utc>> {
        self.last_reviewed_at
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Convert back into an editable draft.
    #[must_use]
    pub fn to_draft(&self) -> VocabularyDraft {
        VocabularyDraft {
            user_id: self.user_id.clone(),
            arabic_text: self.arabic_text.clone(),
            translation: self.translation.clone(),
            transliteration: self.transliteration.clone(),
            part_of_speech: self.part_of_speech,
            root: self.root.clone(),
            example_sentence: self.example_sentence.clone(),
            example_translation: self.example_translation.clone(),
            notes: self.notes.clone(),
            category: self.category.clone(),
            difficulty: self.difficulty.value(),
            is_favorite: self.is_favorite,
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
