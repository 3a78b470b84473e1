use std::sync::Arc;

use daftar_core::model::{LoginCredentials, SignupCredentials, User};

use super::IdentityProvider;
use crate::error::AuthError;

/// Who is signed in. Owned by the caller; there is no global session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthSession {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl AuthSession {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Validates credentials locally, then defers to the identity provider.
#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
}

impl AuthService {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Sign in. On error `session` is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Credentials` for malformed input, or the provider's error.
    pub async fn login(
        &self,
        session: &mut AuthSession,
        credentials: &LoginCredentials,
    ) -> Result<(), AuthError> {
        credentials.validate()?;
        let user = self.provider.login(credentials).await.inspect_err(|err| {
            log::warn!("login failed for {}: {err}", credentials.email);
        })?;
        log::info!("login: {}", user.email);
        *session = AuthSession::Authenticated(user);
        Ok(())
    }

    /// Create an account and sign in. On error `session` is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Credentials` for malformed input, or the provider's error.
    pub async fn signup(
        &self,
        session: &mut AuthSession,
        credentials: &SignupCredentials,
    ) -> Result<(), AuthError> {
        credentials.validate()?;
        let user = self.provider.signup(credentials).await.inspect_err(|err| {
            log::warn!("signup failed for {}: {err}", credentials.email);
        })?;
        log::info!("signup: {} <{}>", user.name, user.email);
        *session = AuthSession::Authenticated(user);
        Ok(())
    }

    pub fn logout(&self, session: &mut AuthSession) {
        if let AuthSession::Authenticated(user) = session {
            log::info!("logout: {}", user.email);
        }
        *session = AuthSession::Anonymous;
    }
}
