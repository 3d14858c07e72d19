use secrecy::SecretString;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A form field of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Name used by the form front-end for this field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown registration field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "username" => Ok(Self::Username),
            "password" => Ok(Self::Password),
            "confirmPassword" | "confirm_password" | "confirm-password" => {
                Ok(Self::ConfirmPassword)
            }
            _ => Err(UnknownField(name.to_string())),
        }
    }
}

/// The username/password/confirmation triple captured from the user.
///
/// Values are stored exactly as entered. Both password fields are kept as
/// secrets so they never show up in `Debug` output or logs.
#[derive(Clone, Default)]
pub struct CredentialInput {
    username: String,
    password: SecretString,
    confirm_password: SecretString,
}

impl CredentialInput {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
            confirm_password: SecretString::from(confirm_password.into()),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    #[must_use]
    pub fn confirm_password(&self) -> &SecretString {
        &self.confirm_password
    }

    /// Replace exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = SecretString::from(value),
            Field::ConfirmPassword => self.confirm_password = SecretString::from(value),
        }
    }
}

impl fmt::Debug for CredentialInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialInput")
            .field("username", &self.username)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}
