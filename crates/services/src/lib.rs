#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth;
pub mod config;
pub mod error;
pub mod preferences_service;
pub mod quiz;
pub mod translation;
pub mod vocabulary_service;

pub use daftar_core::Clock;

pub use app_services::AppServices;
pub use auth::{AuthService, AuthSession, DemoIdentityProvider, IdentityProvider};
pub use config::AppConfig;
pub use error::{
    AuthError, PreferencesServiceError, QuizServiceError, TranslationError,
    VocabularyServiceError,
};
pub use preferences_service::PreferencesService;
pub use quiz::{QuizAnswerResult, QuizAttempt, QuizLoopService};
pub use translation::{
    DemoTranslationProvider, HttpTranslationConfig, HttpTranslationProvider, TranslationProvider,
    TranslatorService,
};
pub use vocabulary_service::VocabularyService;
