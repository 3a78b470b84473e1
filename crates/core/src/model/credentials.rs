use std::fmt;

use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CredentialsError {
    #[error("please fill in all fields")]
    MissingFields,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    #[error("invalid email or password")]
    InvalidCredentials,
}

#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// A short password is reported as `InvalidCredentials` so the caller cannot
    /// tell which half of the pair was wrong.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError` when a field is blank or the password is too short.
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(CredentialsError::MissingFields);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsError::InvalidCredentials);
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct SignupCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupCredentials {
    /// # Errors
    ///
    /// Returns `CredentialsError` when a field is blank, the confirmation differs,
    /// or the password is too short.
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty()
        {
            return Err(CredentialsError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(CredentialsError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsError::PasswordTooShort);
        }
        Ok(())
    }
}

// Passwords stay out of debug output.
impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for SignupCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupCredentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
