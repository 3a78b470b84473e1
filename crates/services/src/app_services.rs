use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::auth::{AuthService, DemoIdentityProvider};
use crate::config::AppConfig;
use crate::preferences_service::PreferencesService;
use crate::quiz::QuizLoopService;
use crate::translation::{
    DemoTranslationProvider, HttpTranslationProvider, TranslationProvider, TranslatorService,
};
use crate::vocabulary_service::VocabularyService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    config: AppConfig,
    quiz_loop: Arc<QuizLoopService>,
    vocabulary: Arc<VocabularyService>,
    translator: Arc<TranslatorService>,
    auth: Arc<AuthService>,
    preferences: Arc<PreferencesService>,
}

impl AppServices {
    /// Wire services over `storage`. The HTTP translator is used when configured,
    /// the canned demo translator otherwise.
    #[must_use]
    pub fn new(storage: &Storage, config: AppConfig, clock: Clock) -> Self {
        let vocabulary = VocabularyService::new(clock, Arc::clone(&storage.vocabulary));
        let quiz_loop = QuizLoopService::new(
            clock,
            Arc::clone(&storage.vocabulary),
            Arc::clone(&storage.quiz_results),
        )
        .with_shuffle(config.shuffle_quiz);

        let provider: Arc<dyn TranslationProvider> = match &config.translation {
            Some(http) => {
                log::info!("translating through {} ({})", http.base_url, http.model);
                Arc::new(HttpTranslationProvider::new(Some(http.clone())))
            }
            None => {
                log::info!("no translation API key set, using demo translations");
                Arc::new(DemoTranslationProvider::new())
            }
        };
        let translator = TranslatorService::new(provider, vocabulary.clone());
        let auth = AuthService::new(Arc::new(DemoIdentityProvider::new(clock)));
        let preferences = PreferencesService::new(Arc::clone(&storage.preferences));

        Self {
            config,
            quiz_loop: Arc::new(quiz_loop),
            vocabulary: Arc::new(vocabulary),
            translator: Arc::new(translator),
            auth: Arc::new(auth),
            preferences: Arc::new(preferences),
        }
    }

    /// Services over in-memory storage seeded with the demo vocabulary.
    #[must_use]
    pub fn in_memory_demo(config: AppConfig, clock: Clock) -> Self {
        let storage = Storage::in_memory_seeded(clock.now());
        Self::new(&storage, config, clock)
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn vocabulary(&self) -> Arc<VocabularyService> {
        Arc::clone(&self.vocabulary)
    }

    #[must_use]
    pub fn translator(&self) -> Arc<TranslatorService> {
        Arc::clone(&self.translator)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }
}
