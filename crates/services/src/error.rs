//! Shared error types for the services crate.

use thiserror::Error;

use daftar_core::model::{CredentialsError, PreferencesError, VocabularyError};
use daftar_core::quiz::QuizError;
use storage::StorageError;

/// Errors emitted by translation providers and `TranslatorService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslationError {
    #[error("please enter some text to translate")]
    EmptyInput,
    #[error("translation provider is not configured")]
    Disabled,
    #[error("translation provider returned an empty response")]
    EmptyResponse,
    #[error("translation provider returned malformed data: {0}")]
    MalformedResponse(String),
    #[error("translation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `AuthService` and identity providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted by `VocabularyService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VocabularyServiceError {
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error("quiz has not finished yet")]
    NotComplete,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `PreferencesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PreferencesServiceError {
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
