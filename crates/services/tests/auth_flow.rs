use std::sync::Arc;

use async_trait::async_trait;
use daftar_core::model::{CredentialsError, LoginCredentials, SignupCredentials, User};
use daftar_core::time::fixed_now;
use services::{AuthError, AuthService, AuthSession, Clock, DemoIdentityProvider, IdentityProvider};

struct OfflineProvider;

#[async_trait]
impl IdentityProvider for OfflineProvider {
    async fn login(&self, _credentials: &LoginCredentials) -> Result<User, AuthError> {
        Err(AuthError::Unavailable("offline".into()))
    }

    async fn signup(&self, _credentials: &SignupCredentials) -> Result<User, AuthError> {
        Err(AuthError::Unavailable("offline".into()))
    }
}

fn signup(password: &str, confirm: &str) -> SignupCredentials {
    SignupCredentials {
        name: "Layla".into(),
        email: "layla@example.com".into(),
        password: password.into(),
        confirm_password: confirm.into(),
    }
}

#[tokio::test]
async fn signup_validation_runs_before_provider() {
    let auth = AuthService::new(Arc::new(OfflineProvider));
    let mut session = AuthSession::default();

    let err = auth
        .signup(&mut session, &signup("password123", "password124"))
        .await
        .expect_err("mismatch");
    assert!(matches!(
        err,
        AuthError::Credentials(CredentialsError::PasswordMismatch)
    ));

    let err = auth
        .signup(&mut session, &signup("short", "short"))
        .await
        .expect_err("too short");
    assert!(matches!(
        err,
        AuthError::Credentials(CredentialsError::PasswordTooShort)
    ));

    let err = auth
        .signup(&mut session, &signup("password123", "password123"))
        .await
        .expect_err("offline");
    assert!(matches!(err, AuthError::Unavailable(_)));
    assert_eq!(session, AuthSession::Anonymous);
}

#[tokio::test]
async fn failed_login_keeps_existing_session() {
    let demo = AuthService::new(Arc::new(DemoIdentityProvider::new(Clock::fixed(fixed_now()))));
    let mut session = AuthSession::default();
    demo.signup(&mut session, &signup("password123", "password123"))
        .await
        .expect("signup");
    let before = session.clone();
    assert_eq!(before.user().map(|u| u.name.as_str()), Some("Layla"));

    let err = demo
        .login(&mut session, &LoginCredentials::new("", "password123"))
        .await
        .expect_err("missing email");
    assert!(matches!(
        err,
        AuthError::Credentials(CredentialsError::MissingFields)
    ));
    assert_eq!(session, before);

    let offline = AuthService::new(Arc::new(OfflineProvider));
    offline
        .login(&mut session, &LoginCredentials::new("layla@example.com", "password123"))
        .await
        .expect_err("offline");
    assert_eq!(session, before);
}
