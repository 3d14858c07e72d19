//! Remote registration call. The controller only sees a [`RemoteOutcome`]; how
//! a response is classified lives here, next to the HTTP details.

use super::credentials::CredentialInput;
use crate::APP_USER_AGENT;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use std::{fmt, future::Future, sync::Arc, time::Duration};
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

/// Path appended to the base endpoint.
pub const REGISTER_PATH: &str = "/auth/register";
/// Default request timeout applied by [`HttpTransport`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Body sent to the service. The confirmation field is never part of it.
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    username: String,
    #[serde(serialize_with = "serialize_secret")]
    password: SecretString,
}

impl RegisterRequest {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

impl From<&CredentialInput> for RegisterRequest {
    fn from(input: &CredentialInput) -> Self {
        Self {
            username: input.username().to_string(),
            password: input.password().clone(),
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

fn serialize_secret<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Classified result of one registration call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteOutcome {
    Created,
    Rejected(u16),
    TransportFailure,
}

/// Performs the remote registration call.
///
/// Implementations own any timeout policy; the controller waits for whatever
/// outcome they settle on.
pub trait Transport {
    fn register(&self, request: &RegisterRequest) -> impl Future<Output = RemoteOutcome> + Send;
}

impl<T: Transport + Send + Sync + ?Sized> Transport for Arc<T> {
    fn register(&self, request: &RegisterRequest) -> impl Future<Output = RemoteOutcome> + Send {
        (**self).register(request)
    }
}

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unsupported endpoint scheme: {0}")]
    UnsupportedScheme(String),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Build the registration URL from a base endpoint, tolerating trailing slashes.
///
/// # Errors
/// Returns an error if the result is not an absolute `http` or `https` URL.
pub fn register_url(base_endpoint: &str) -> Result<Url, EndpointError> {
    let base = base_endpoint.trim().trim_end_matches('/');
    let url = Url::parse(&format!("{base}{REGISTER_PATH}"))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(EndpointError::UnsupportedScheme(scheme.to_string())),
    }
}

/// JSON over HTTP transport backed by `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    url: Url,
}

impl HttpTransport {
    /// # Errors
    /// Returns an error if the endpoint is invalid or the client cannot be built.
    pub fn new(base_endpoint: &str, timeout: Duration) -> Result<Self, EndpointError> {
        let url = register_url(base_endpoint)?;
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, url })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(url = %self.url, username = %request.username))]
    async fn register(&self, request: &RegisterRequest) -> RemoteOutcome {
        debug!("sending registration request");

        match self.client.post(self.url.clone()).json(request).send().await {
            Ok(response) => classify(response).await,
            Err(err) => {
                if err.is_timeout() {
                    warn!("Registration request timed out: {err}");
                } else {
                    warn!("Registration request failed: {err}");
                }
                RemoteOutcome::TransportFailure
            }
        }
    }
}

async fn classify(response: Response) -> RemoteOutcome {
    let status = response.status();

    if status.is_success() {
        return match response.text().await {
            Ok(body) => classify_success_body(&body),
            Err(err) => {
                warn!("Failed to read registration response: {err}");
                RemoteOutcome::TransportFailure
            }
        };
    }

    if status == StatusCode::BAD_REQUEST {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<RegisterResponse>(&body)
            .ok()
            .and_then(|response| response.message)
            .unwrap_or_default();
        debug!(status = status.as_u16(), "registration rejected: {message}");
        return RemoteOutcome::Rejected(status.as_u16());
    }

    warn!("Unexpected registration response status: {status}");
    RemoteOutcome::TransportFailure
}

fn classify_success_body(body: &str) -> RemoteOutcome {
    if body.trim().is_empty() {
        return RemoteOutcome::Created;
    }

    match serde_json::from_str::<RegisterResponse>(body) {
        Ok(RegisterResponse { success: true, .. }) => RemoteOutcome::Created,
        Ok(RegisterResponse {
            success: false,
            message,
        }) => {
            warn!(
                "Registration reported failure: {}",
                message.unwrap_or_default()
            );
            RemoteOutcome::TransportFailure
        }
        Err(err) => {
            warn!("Malformed registration response: {err}");
            RemoteOutcome::TransportFailure
        }
    }
}
