use clap::{Arg, ArgMatches, Command};
use std::time::Duration;

pub const ARG_ENDPOINT: &str = "endpoint";
pub const ARG_FRONTEND_URL: &str = "frontend-url";
pub const ARG_TIMEOUT: &str = "timeout";

#[derive(Debug, Clone)]
pub struct Options {
    pub endpoint: String,
    pub frontend_url: String,
    pub timeout: Duration,
}

impl Options {
    /// Parse service arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the endpoint is missing or blank.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let endpoint = matches
            .get_one::<String>(ARG_ENDPOINT)
            .cloned()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --{ARG_ENDPOINT}"))?;

        let frontend_url = matches
            .get_one::<String>(ARG_FRONTEND_URL)
            .cloned()
            .unwrap_or_else(|| "http://localhost:3000".to_string());

        let timeout = matches.get_one::<u64>(ARG_TIMEOUT).copied().unwrap_or(10);

        Ok(Self {
            endpoint,
            frontend_url,
            timeout: Duration::from_secs(timeout),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_ENDPOINT)
                .short('e')
                .long(ARG_ENDPOINT)
                .help("Base endpoint of the authentication service, example: https://api.tld/api/v1")
                .env("REGISTRAR_ENDPOINT")
                .required(true),
        )
        .arg(
            Arg::new(ARG_FRONTEND_URL)
                .long(ARG_FRONTEND_URL)
                .help("Frontend base URL used to resolve the login route")
                .env("REGISTRAR_FRONTEND_URL")
                .default_value("http://localhost:3000"),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .short('t')
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds")
                .env("REGISTRAR_TIMEOUT_SECONDS")
                .default_value("10")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}
