pub mod credentials;
pub mod logging;
pub mod service;

use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("registrar")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles);

    let command = service::with_args(command);
    let command = credentials::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "registrar");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_args() {
        temp_env::with_vars_unset(
            [
                "REGISTRAR_ENDPOINT",
                "REGISTRAR_TIMEOUT_SECONDS",
                "REGISTRAR_USERNAME",
                "REGISTRAR_PASSWORD",
                "REGISTRAR_CONFIRM_PASSWORD",
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "registrar",
                    "--endpoint",
                    "https://api.tld/api/v1",
                    "--timeout",
                    "3",
                    "--username",
                    "alice1",
                    "--password",
                    "secret1",
                    "--confirm-password",
                    "secret1",
                ]);

                let service = service::Options::parse(&matches).unwrap();
                assert_eq!(service.endpoint, "https://api.tld/api/v1");
                assert_eq!(service.frontend_url, "http://localhost:3000");
                assert_eq!(service.timeout.as_secs(), 3);

                let credentials = credentials::Options::parse(&matches);
                assert_eq!(credentials.username, "alice1");
                assert_eq!(credentials.password.expose_secret(), "secret1");
                assert_eq!(credentials.confirm_password.expose_secret(), "secret1");
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("REGISTRAR_ENDPOINT", Some("http://localhost:8082/api/v1")),
                ("REGISTRAR_FRONTEND_URL", Some("https://shop.tld")),
                ("REGISTRAR_TIMEOUT_SECONDS", Some("30")),
                ("REGISTRAR_USERNAME", Some("alice1")),
                ("REGISTRAR_PASSWORD", Some("secret1")),
                ("REGISTRAR_CONFIRM_PASSWORD", Some("secret2")),
                ("REGISTRAR_LOG_LEVEL", Some("info")),
                ("REGISTRAR_LOG_FORMAT", Some("json")),
            ],
            || {
                let matches = new().get_matches_from(vec!["registrar"]);

                let service = service::Options::parse(&matches).unwrap();
                assert_eq!(service.endpoint, "http://localhost:8082/api/v1");
                assert_eq!(service.frontend_url, "https://shop.tld");
                assert_eq!(service.timeout.as_secs(), 30);

                let credentials = credentials::Options::parse(&matches);
                assert_eq!(credentials.username, "alice1");
                assert_eq!(credentials.confirm_password.expose_secret(), "secret2");

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                assert_eq!(
                    logging::Options::parse(&matches).unwrap().format,
                    crate::cli::telemetry::LogFormat::Json
                );
            },
        );
    }

    #[test]
    fn test_missing_credentials_default_to_empty() {
        temp_env::with_vars_unset(
            [
                "REGISTRAR_USERNAME",
                "REGISTRAR_PASSWORD",
                "REGISTRAR_CONFIRM_PASSWORD",
            ],
            || {
                let matches =
                    new().get_matches_from(vec!["registrar", "--endpoint", "http://api.tld"]);
                let credentials = credentials::Options::parse(&matches);
                assert_eq!(credentials.username, "");
                assert_eq!(credentials.password.expose_secret(), "");
                assert_eq!(credentials.confirm_password.expose_secret(), "");
            },
        );
    }

    #[test]
    fn test_log_format_ignores_case() {
        temp_env::with_vars_unset(["REGISTRAR_LOG_FORMAT"], || {
            let matches = new().get_matches_from(vec![
                "registrar",
                "--endpoint",
                "http://api.tld",
                "--log-format",
                "JSON",
            ]);
            assert_eq!(
                logging::Options::parse(&matches).unwrap().format,
                crate::cli::telemetry::LogFormat::Json
            );
        });

        temp_env::with_var("REGISTRAR_LOG_FORMAT", Some("Text"), || {
            let matches = new().get_matches_from(vec!["registrar", "--endpoint", "http://api.tld"]);
            assert_eq!(
                logging::Options::parse(&matches).unwrap().format,
                crate::cli::telemetry::LogFormat::Text
            );
        });
    }

    #[test]
    fn test_endpoint_is_required() {
        temp_env::with_vars_unset(["REGISTRAR_ENDPOINT"], || {
            let result = new().try_get_matches_from(vec!["registrar"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = new().try_get_matches_from(vec![
            "registrar",
            "--endpoint",
            "http://api.tld",
            "--timeout",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("REGISTRAR_LOG_LEVEL", None::<String>)], || {
                let mut args = vec![
                    "registrar".to_string(),
                    "--endpoint".to_string(),
                    "http://api.tld".to_string(),
                ];

                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
