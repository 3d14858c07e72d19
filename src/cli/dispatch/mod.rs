//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the registration action. Credential values
//! are passed through untouched; judging them is the registration rules' job.

use crate::cli::actions::{Action, register::Args};
use crate::cli::commands::{credentials, service};
use anyhow::Result;

/// Map validated CLI matches to a register action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let service_opts = service::Options::parse(matches)?;
    let credential_opts = credentials::Options::parse(matches);

    Ok(Action::Register(Args {
        endpoint: service_opts.endpoint,
        frontend_url: service_opts.frontend_url,
        timeout: service_opts.timeout,
        username: credential_opts.username,
        password: credential_opts.password,
        confirm_password: credential_opts.confirm_password,
    }))
}
