//! # Registrar (Account Self-Registration Client)
//!
//! `registrar` drives the client side of account self-registration against a
//! remote authentication service.
//!
//! ## Registration Flow
//!
//! 1. **Collect:** The front-end feeds `username`, `password` and
//!    `confirmPassword` into a [`registration::RegistrationController`] one field
//!    at a time.
//! 2. **Validate:** On submit the whole snapshot is checked locally, fail-fast,
//!    and only the first failing rule is reported.
//! 3. **Submit:** Accepted credentials are POSTed as `{ username, password }` to
//!    `{endpoint}/auth/register`. The confirmation never leaves the client.
//! 4. **Settle:** `201` means the account exists and the user is sent to
//!    `/login`; `400` means the username is taken; everything else is reported
//!    as a generic failure.
//!
//! Only one submission can be in flight per controller. Repeated submits while
//! a request is pending are ignored rather than queued.

pub mod cli;
pub mod registration;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
