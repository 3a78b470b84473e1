use std::env;

use daftar_core::quiz::{QuizConfiguration, QuizMode, WORD_COUNT_PRESETS};

use crate::translation::HttpTranslationConfig;

pub const ENV_QUIZ_WORD_COUNT: &str = "DAFTAR_QUIZ_WORD_COUNT";
pub const ENV_QUIZ_SHUFFLE: &str = "DAFTAR_QUIZ_SHUFFLE";

/// Runtime configuration read from the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub translation: Option<HttpTranslationConfig>,
    pub quiz_word_count: usize,
    pub shuffle_quiz: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            translation: None,
            quiz_word_count: WORD_COUNT_PRESETS[0],
            shuffle_quiz: false,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Invalid values fall back to defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let quiz_word_count = lookup(ENV_QUIZ_WORD_COUNT)
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|count| *count > 0)
            .unwrap_or(defaults.quiz_word_count);
        let shuffle_quiz = lookup(ENV_QUIZ_SHUFFLE)
            .is_some_and(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"));

        Self {
            translation: HttpTranslationConfig::from_lookup(&lookup),
            quiz_word_count,
            shuffle_quiz,
        }
    }

    /// Default quiz configuration for the given mode.
    #[must_use]
    pub fn quiz_configuration(&self, mode: QuizMode) -> QuizConfiguration {
        QuizConfiguration::new(self.quiz_word_count, mode)
            .unwrap_or_else(|_| QuizConfiguration::default().with_mode(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.quiz_word_count, 5);
        assert!(!config.shuffle_quiz);
        assert!(config.translation.is_none());
    }

    #[test]
    fn reads_quiz_settings_and_ignores_garbage() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_QUIZ_WORD_COUNT, "20"),
            (ENV_QUIZ_SHUFFLE, "TRUE"),
        ]));
        assert_eq!(config.quiz_word_count, 20);
        assert!(config.shuffle_quiz);

        let config = AppConfig::from_lookup(lookup(&[(ENV_QUIZ_WORD_COUNT, "0")]));
        assert_eq!(config.quiz_word_count, 5);
    }
}
