use std::sync::Arc;

use daftar_core::model::{PreferencesDraft, UserPreferences};
use storage::repository::PreferencesRepository;

use crate::error::PreferencesServiceError;

#[derive(Clone)]
pub struct PreferencesService {
    repo: Arc<dyn PreferencesRepository>,
}

impl PreferencesService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferencesRepository>) -> Self {
        Self { repo }
    }

    /// Load stored preferences, or defaults when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesServiceError::Storage` on repository failures.
    pub async fn load(&self) -> Result<UserPreferences, PreferencesServiceError> {
        let preferences = self.repo.get_preferences().await?;
        Ok(preferences.unwrap_or_default())
    }

    /// Validate and persist new preferences.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesServiceError` if validation or persistence fails.
    pub async fn save(
        &self,
        draft: PreferencesDraft,
    ) -> Result<UserPreferences, PreferencesServiceError> {
        let preferences = draft.validate()?;
        self.repo.save_preferences(&preferences).await?;
        log::debug!("preferences saved (font size {})", preferences.font_size());
        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daftar_core::model::{InterfaceLanguage, PreferencesError};
    use storage::InMemoryRepository;

    #[tokio::test]
    async fn load_defaults_then_save() {
        let svc = PreferencesService::new(Arc::new(InMemoryRepository::new()));
        let loaded = svc.load().await.unwrap();
        assert_eq!(loaded, UserPreferences::default());
        assert!(loaded.daily_reminder());

        let mut draft = loaded.to_draft();
        draft.translation_language = InterfaceLanguage::Fr;
        draft.font_size = 20;
        svc.save(draft).await.unwrap();

        let reloaded = svc.load().await.unwrap();
        assert_eq!(reloaded.translation_language(), InterfaceLanguage::Fr);
        assert_eq!(reloaded.font_size(), 20);
    }

    #[tokio::test]
    async fn invalid_font_size_is_not_stored() {
        let svc = PreferencesService::new(Arc::new(InMemoryRepository::new()));
        let draft = PreferencesDraft {
            font_size: 15,
            ..PreferencesDraft::default()
        };
        let err = svc.save(draft).await.unwrap_err();
        assert!(matches!(
            err,
            PreferencesServiceError::Preferences(PreferencesError::InvalidFontSize(15))
        ));
        assert_eq!(svc.load().await.unwrap().font_size(), 16);
    }
}
