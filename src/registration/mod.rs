//! Registration state machine and its collaborators.
//!
//! The [`validator`] is pure and can be reused by live-feedback UIs. The
//! [`controller`] owns the credential buffer and the submission flag, and talks
//! to the outside world only through the [`Transport`], [`Notifier`] and
//! [`Navigator`] traits.

pub mod controller;
pub mod credentials;
#[cfg(test)]
mod log_capture;
pub mod navigate;
pub mod notify;
pub mod transport;
pub mod validator;

pub use self::controller::{RegistrationController, SubmissionState, SubmitOutcome};
pub use self::credentials::{CredentialInput, Field, UnknownField};
pub use self::navigate::{ConsoleNavigator, LOGIN_ROUTE, Navigator};
pub use self::notify::{ConsoleNotifier, Notifier, Severity};
pub use self::transport::{
    EndpointError, HttpTransport, RegisterRequest, RemoteOutcome, Transport,
};
pub use self::validator::{Rejection, ValidationOutcome, validate};
