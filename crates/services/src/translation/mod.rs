//! Translation port and its adapters.

mod demo;
mod http;
mod service;

use async_trait::async_trait;

use daftar_core::model::{TranslationRequest, TranslationResult};

use crate::error::TranslationError;

pub use demo::DemoTranslationProvider;
pub use http::{HttpTranslationConfig, HttpTranslationProvider};
pub use service::TranslatorService;

/// Capability that turns text into a translation with optional word breakdown.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate the request text in the requested direction.
    ///
    /// # Errors
    ///
    /// Returns `TranslationError` when the provider is unavailable or answers badly.
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError>;
}
