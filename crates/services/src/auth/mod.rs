//! Sign-in flow: caller-owned session state over an identity provider port.

mod demo;
mod service;

use async_trait::async_trait;

use daftar_core::model::{LoginCredentials, SignupCredentials, User};

use crate::error::AuthError;

pub use demo::DemoIdentityProvider;
pub use service::{AuthService, AuthSession};

/// Backend that turns credentials into an account profile.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns `AuthError` if the credentials are rejected or the backend is unreachable.
    async fn login(&self, credentials: &LoginCredentials) -> Result<User, AuthError>;

    /// # Errors
    ///
    /// Returns `AuthError` if the account cannot be created.
    async fn signup(&self, credentials: &SignupCredentials) -> Result<User, AuthError>;
}
