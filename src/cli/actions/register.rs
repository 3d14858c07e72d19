use crate::registration::{
    ConsoleNavigator, ConsoleNotifier, Field, HttpTransport, RegistrationController,
    SubmitOutcome,
};
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub endpoint: String,
    pub frontend_url: String,
    pub timeout: Duration,
    pub username: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Execute the register action.
/// # Errors
/// Returns an error if the endpoint or frontend URL is invalid.
pub async fn execute(args: Args) -> Result<SubmitOutcome> {
    let transport = HttpTransport::new(&args.endpoint, args.timeout)
        .with_context(|| format!("invalid REGISTRAR_ENDPOINT: {}", args.endpoint))?;
    let navigator = ConsoleNavigator::new(&args.frontend_url)
        .with_context(|| format!("invalid REGISTRAR_FRONTEND_URL: {}", args.frontend_url))?;

    debug!("registering against {}", transport.url());

    let controller = RegistrationController::new(transport, ConsoleNotifier, navigator);
    controller.on_field_change(Field::Username, args.username);
    controller.on_field_change(Field::Password, args.password.expose_secret());
    controller.on_field_change(
        Field::ConfirmPassword,
        args.confirm_password.expose_secret(),
    );

    let outcome = controller.submit().await;
    debug!(%outcome, "registration finished");

    Ok(outcome)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::registration::Rejection;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn args(endpoint: String, username: &str, password: &str, confirm: &str) -> Args {
        Args {
            endpoint,
            frontend_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(5),
            username: username.to_string(),
            password: SecretString::from(password.to_string()),
            confirm_password: SecretString::from(confirm.to_string()),
        }
    }

    #[tokio::test]
    async fn registers_against_service() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_json(json!({ "username": "alice1", "password": "secret1" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = execute(args(server.uri(), "alice1", "secret1", "secret1"))
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Registered);
    }

    #[tokio::test]
    async fn invalid_input_is_not_sent() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let outcome = execute(args(server.uri(), "alice1", "secret1", "secret2"))
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Invalid(Rejection::Mismatch));
    }

    #[tokio::test]
    async fn invalid_endpoint_is_an_error() {
        let result = execute(args("not a url".to_string(), "alice1", "secret1", "secret1")).await;
        assert!(result.is_err());
    }
}
