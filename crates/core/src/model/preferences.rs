use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::InterfaceLanguage;

pub const MIN_FONT_SIZE: u8 = 14;
pub const MAX_FONT_SIZE: u8 = 24;
pub const FONT_SIZE_STEP: u8 = 2;
pub const DEFAULT_FONT_SIZE: u8 = 16;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PreferencesError {
    #[error("font size must be between {MIN_FONT_SIZE} and {MAX_FONT_SIZE} in steps of {FONT_SIZE_STEP}, got {0}")]
    InvalidFontSize(u8),
}

/// Settings-panel preferences for the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    translation_language: InterfaceLanguage,
    daily_reminder: bool,
    quiz_streak: bool,
    font_size: u8,
}

#[derive(Clone, Debug)]
pub struct PreferencesDraft {
    pub translation_language: InterfaceLanguage,
    pub daily_reminder: bool,
    pub quiz_streak: bool,
    pub font_size: u8,
}

impl Default for PreferencesDraft {
    fn default() -> Self {
        UserPreferences::default().to_draft()
    }
}

impl PreferencesDraft {
    /// # Errors
    ///
    /// Returns `PreferencesError::InvalidFontSize` if the size is off the slider's grid.
    pub fn validate(self) -> Result<UserPreferences, PreferencesError> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size)
            || (self.font_size - MIN_FONT_SIZE) % FONT_SIZE_STEP != 0
        {
            return Err(PreferencesError::InvalidFontSize(self.font_size));
        }

        Ok(UserPreferences {
            translation_language: self.translation_language,
            daily_reminder: self.daily_reminder,
            quiz_streak: self.quiz_streak,
            font_size: self.font_size,
        })
    }
}

impl UserPreferences {
    #[must_use]
    pub fn translation_language(&self) -> InterfaceLanguage {
        self.translation_language
    }

    #[must_use]
    pub fn daily_reminder(&self) -> bool {
        self.daily_reminder
    }

    #[must_use]
    pub fn quiz_streak(&self) -> bool {
        self.quiz_streak
    }

    #[must_use]
    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    #[must_use]
    pub fn to_draft(&self) -> PreferencesDraft {
        PreferencesDraft {
            translation_language: self.translation_language,
            daily_reminder: self.daily_reminder,
            quiz_streak: self.quiz_streak,
            font_size: self.font_size,
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            translation_language: InterfaceLanguage::En,
            daily_reminder: true,
            quiz_streak: false,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}
