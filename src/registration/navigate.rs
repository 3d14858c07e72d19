use std::sync::Arc;
use tracing::{debug, error};
use url::Url;

/// Route requested after a successful registration.
pub const LOGIN_ROUTE: &str = "/login";

/// Requests a client-side route change.
pub trait Navigator {
    fn go_to(&self, route: &str);
}

impl<V: Navigator + ?Sized> Navigator for Arc<V> {
    fn go_to(&self, route: &str) {
        (**self).go_to(route);
    }
}

/// Tells a terminal user where to continue in the web frontend.
#[derive(Clone, Debug)]
pub struct ConsoleNavigator {
    frontend: Url,
}

impl ConsoleNavigator {
    /// # Errors
    /// Returns an error if `frontend_base_url` is not an absolute URL.
    pub fn new(frontend_base_url: &str) -> Result<Self, url::ParseError> {
        let frontend = Url::parse(frontend_base_url.trim())?;
        Ok(Self { frontend })
    }

    /// Resolve a route against the frontend base URL.
    ///
    /// # Errors
    /// Returns an error if the route cannot be joined onto the base URL.
    pub fn resolve(&self, route: &str) -> Result<Url, url::ParseError> {
        self.frontend.join(route)
    }
}

impl Navigator for ConsoleNavigator {
    fn go_to(&self, route: &str) {
        match self.resolve(route) {
            Ok(url) => {
                debug!("navigating to {url}");
                println!("Continue at {url}");
            }
            Err(err) => error!("Unable to resolve route {route}: {err}"),
        }
    }
}
