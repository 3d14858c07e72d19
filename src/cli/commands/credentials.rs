use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_USERNAME: &str = "username";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";

/// Raw form values. Missing values are empty so the registration rules, not
/// clap, decide what is acceptable.
#[derive(Debug, Clone)]
pub struct Options {
    pub username: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let read = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();

        Self {
            username: read(ARG_USERNAME),
            password: SecretString::from(read(ARG_PASSWORD)),
            confirm_password: SecretString::from(read(ARG_CONFIRM_PASSWORD)),
        }
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_USERNAME)
                .short('u')
                .long(ARG_USERNAME)
                .help("Username to register (at least 6 characters)")
                .env("REGISTRAR_USERNAME"),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .long(ARG_PASSWORD)
                .help("Password (at least 6 characters)")
                .env("REGISTRAR_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .long(ARG_CONFIRM_PASSWORD)
                .help("Password confirmation, must match --password")
                .env("REGISTRAR_CONFIRM_PASSWORD")
                .hide_env_values(true),
        )
}
