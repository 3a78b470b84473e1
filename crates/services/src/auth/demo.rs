use async_trait::async_trait;

use daftar_core::model::{LoginCredentials, SignupCredentials, User, UserId};

use super::IdentityProvider;
use crate::Clock;
use crate::error::AuthError;

const DEMO_USER_ID: &str = "1";
const DEMO_USER_NAME: &str = "Test User";

/// Accepts any well-formed credentials and hands back a free-plan profile.
///
/// No passwords are stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoIdentityProvider {
    clock: Clock,
}

impl DemoIdentityProvider {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl IdentityProvider for DemoIdentityProvider {
    async fn login(&self, credentials: &LoginCredentials) -> Result<User, AuthError> {
        credentials.validate()?;
        Ok(User::new(
            UserId::new(DEMO_USER_ID),
            credentials.email.trim(),
            DEMO_USER_NAME,
            self.clock.now(),
        ))
    }

    async fn signup(&self, credentials: &SignupCredentials) -> Result<User, AuthError> {
        credentials.validate()?;
        Ok(User::new(
            UserId::new(DEMO_USER_ID),
            credentials.email.trim(),
            credentials.name.trim(),
            self.clock.now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daftar_core::model::{InterfaceLanguage, SubscriptionPlan};
    use daftar_core::time::{fixed_clock, fixed_now};

    #[tokio::test]
    async fn login_keeps_submitted_email() {
        let provider = DemoIdentityProvider::new(fixed_clock());
        let user = provider
            .login(&LoginCredentials::new("amina@example.com", "password123"))
            .await
            .unwrap();
        assert_eq!(user.email, "amina@example.com");
        assert_eq!(user.name, DEMO_USER_NAME);
        assert_eq!(user.subscription, SubscriptionPlan::Free);
        assert_eq!(user.preferred_language, InterfaceLanguage::En);
        assert_eq!(user.created_at, fixed_now());
    }

    #[tokio::test]
    async fn signup_uses_submitted_name() {
        let provider = DemoIdentityProvider::new(fixed_clock());
        let user = provider
            .signup(&SignupCredentials {
                name: " Youssef ".into(),
                email: "youssef@example.com".into(),
                password: "password123".into(),
                confirm_password: "password123".into(),
            })
            .await
            .unwrap();
        assert_eq!(user.name, "Youssef");
        assert_eq!(user.initial(), 'Y');
    }
}
