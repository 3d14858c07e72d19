//! Local credential checks run before anything is sent to the service.
//!
//! Rules are evaluated in a fixed order and the first violation wins, so a user
//! only ever sees one message per attempt.

use super::credentials::CredentialInput;
use secrecy::ExposeSecret;
use std::fmt;

/// Minimum username length, counted in Unicode scalar values (`char`s), not
/// UTF-16 code units or bytes. A character outside the Basic Multilingual
/// Plane counts once.
pub const MIN_USERNAME_LENGTH: usize = 6;
/// Minimum password length, counted the same way as [`MIN_USERNAME_LENGTH`].
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The rule a credential set failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    EmptyUsername,
    ShortUsername,
    EmptyPassword,
    ShortPassword,
    Mismatch,
}

impl Rejection {
    /// User-facing message for this rule.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyUsername => "Username is a required field",
            Self::ShortUsername => "Username must be at least 6 characters",
            Self::EmptyPassword => "Password is a required field",
            Self::ShortPassword => "Password must be at least 6 characters",
            Self::Mismatch => "Passwords do not match",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(Rejection),
}

impl ValidationOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Check a credential snapshot against the registration rules.
///
/// Values are measured and compared exactly as entered, no trimming or case
/// folding.
#[must_use]
pub fn validate(input: &CredentialInput) -> ValidationOutcome {
    match check(input) {
        Ok(()) => ValidationOutcome::Accepted,
        Err(rejection) => ValidationOutcome::Rejected(rejection),
    }
}

fn check(input: &CredentialInput) -> Result<(), Rejection> {
    let username = input.username();
    if username.is_empty() {
        return Err(Rejection::EmptyUsername);
    }
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(Rejection::ShortUsername);
    }

    let password = input.password().expose_secret();
    if password.is_empty() {
        return Err(Rejection::EmptyPassword);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(Rejection::ShortPassword);
    }

    if input.confirm_password().expose_secret() != password {
        return Err(Rejection::Mismatch);
    }

    Ok(())
}
