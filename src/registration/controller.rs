//! Registration controller: owns the form buffer and the submission flag and
//! turns each submit into exactly one user-facing message.
//!
//! State machine:
//!
//! | State      | Trigger                         | Next       | Side effect                 |
//! |------------|---------------------------------|------------|-----------------------------|
//! | Idle       | `submit`, validation rejects    | Idle       | warning message             |
//! | Idle       | `submit`, validation accepts    | Submitting | transport call              |
//! | Submitting | transport `Created`             | Idle       | success message, `/login`   |
//! | Submitting | transport `Rejected(400)`       | Idle       | "Username is already taken" |
//! | Submitting | any other outcome               | Idle       | "Something went wrong."     |
//! | Submitting | `submit` again                  | Submitting | none                        |

use super::{
    credentials::{CredentialInput, Field, UnknownField},
    navigate::{LOGIN_ROUTE, Navigator},
    notify::{Notifier, Severity},
    transport::{RegisterRequest, RemoteOutcome, Transport},
    validator::{Rejection, ValidationOutcome, validate},
};
use std::{
    fmt,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};
use tracing::{debug, info, instrument};

pub const REGISTERED_MESSAGE: &str = "Registered successfully";
pub const USERNAME_TAKEN_MESSAGE: &str = "Username is already taken";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong.";

/// Status the service uses for "username already taken".
pub const USERNAME_TAKEN_STATUS: u16 = 400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

/// What a single `submit` call resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight.
    Ignored,
    /// Local validation failed; nothing was sent.
    Invalid(Rejection),
    Registered,
    UsernameTaken,
    Failed,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        matches!(self, Self::Registered)
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignored => f.write_str("ignored"),
            Self::Invalid(rejection) => write!(f, "invalid: {rejection}"),
            Self::Registered => f.write_str("registered"),
            Self::UsernameTaken => f.write_str("username taken"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

/// Drives one registration form.
///
/// All methods take `&self`, so the controller can be shared with the UI while
/// a submission is pending. Field edits are accepted at any time; a submit
/// works on the snapshot taken when it started.
pub struct RegistrationController<T, N, V> {
    input: Mutex<CredentialInput>,
    submitting: AtomicBool,
    transport: T,
    notifier: N,
    navigator: V,
}

impl<T, N, V> RegistrationController<T, N, V>
where
    T: Transport,
    N: Notifier,
    V: Navigator,
{
    pub fn new(transport: T, notifier: N, navigator: V) -> Self {
        Self {
            input: Mutex::new(CredentialInput::default()),
            submitting: AtomicBool::new(false),
            transport,
            notifier,
            navigator,
        }
    }

    /// Update exactly one field. Never validates and never touches the state.
    pub fn on_field_change(&self, field: Field, value: impl Into<String>) {
        self.buffer().set(field, value.into());
    }

    /// Same as [`Self::on_field_change`], keyed by the form field name.
    ///
    /// # Errors
    /// Returns an error if `name` is not a registration field.
    pub fn on_named_field_change(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field = name.parse::<Field>()?;
        self.on_field_change(field, value);
        Ok(())
    }

    /// Snapshot of the current form buffer.
    pub fn input(&self) -> CredentialInput {
        self.buffer().clone()
    }

    pub fn state(&self) -> SubmissionState {
        if self.submitting.load(Ordering::Acquire) {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    /// Whether the submit action should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.state() == SubmissionState::Submitting
    }

    /// Run one registration attempt.
    ///
    /// Emits exactly one message unless the call is ignored, and always leaves
    /// the controller `Idle` when it returns.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_guard) = SubmitGuard::acquire(&self.submitting) else {
            debug!("registration already in flight, ignoring submit");
            return SubmitOutcome::Ignored;
        };

        let snapshot = self.input();
        if let ValidationOutcome::Rejected(rejection) = validate(&snapshot) {
            debug!(?rejection, "registration input rejected");
            self.notifier.emit(rejection.message(), Severity::Warning);
            return SubmitOutcome::Invalid(rejection);
        }

        let request = RegisterRequest::from(&snapshot);
        let outcome = self.transport.register(&request).await;

        self.settle(outcome)
    }

    fn settle(&self, outcome: RemoteOutcome) -> SubmitOutcome {
        match outcome {
            RemoteOutcome::Created => {
                info!("registration succeeded");
                self.notifier.emit(REGISTERED_MESSAGE, Severity::Success);
                self.navigator.go_to(LOGIN_ROUTE);
                SubmitOutcome::Registered
            }
            RemoteOutcome::Rejected(USERNAME_TAKEN_STATUS) => {
                self.notifier.emit(USERNAME_TAKEN_MESSAGE, Severity::Error);
                SubmitOutcome::UsernameTaken
            }
            RemoteOutcome::Rejected(status) => {
                debug!(status, "registration rejected with unexpected status");
                self.notifier.emit(GENERIC_FAILURE_MESSAGE, Severity::Error);
                SubmitOutcome::Failed
            }
            RemoteOutcome::TransportFailure => {
                self.notifier.emit(GENERIC_FAILURE_MESSAGE, Severity::Error);
                SubmitOutcome::Failed
            }
        }
    }

    fn buffer(&self) -> MutexGuard<'_, CredentialInput> {
        self.input.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, N, V> fmt::Debug for RegistrationController<T, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationController")
            .field("submitting", &self.submitting.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Holds the submission flag; clearing it on drop returns the controller to
/// `Idle` on every exit path, including a dropped or panicking transport future.
struct SubmitGuard<'a>(&'a AtomicBool);

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
