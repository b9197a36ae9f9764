//! Private HTTP client for the Enigma2 web interface
//!
//! This crate provides a minimal blocking client for the HTTP+XML web
//! interface plugin running on Enigma2 set-top boxes. Every request is a
//! plain GET against a fixed path below the box's base URL, authenticated
//! with HTTP basic auth.

mod error;

pub use error::WebifError;

use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

/// Username/password pair sent with every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value for the `Authorization` header
    fn basic_auth_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Transport timeouts
///
/// A slow box blocks the calling poll cycle until these elapse, so keep them short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read: Duration,
}

impl Timeouts {
    /// Same timeout for connecting and reading
    pub fn uniform(timeout: Duration) -> Self {
        Self {
            connect: timeout,
            read: timeout,
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            read: Duration::from_secs(10),
        }
    }
}

/// Build `scheme://host[:port]` for a box
///
/// IPv6 literals are wrapped in brackets.
pub fn base_url(secure: bool, host: &str, port: Option<u16>) -> String {
    let scheme = if secure { "https" } else { "http" };
    let host = if host.contains(':') && !host.starts_with('[') {
        format!("[{}]", host)
    } else {
        host.to_string()
    };

    match port {
        Some(port) => format!("{}://{}:{}", scheme, host, port),
        None => format!("{}://{}", scheme, host),
    }
}

/// A minimal blocking client bound to one box
#[derive(Clone)]
pub struct WebifClient {
    agent: ureq::Agent,
    base_url: String,
    authorization: String,
}

impl WebifClient {
    /// Create a client for the box at `base_url`
    pub fn new(base_url: impl Into<String>, credentials: &Credentials, timeouts: Timeouts) -> Self {
        let base_url: String = base_url.into();
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(timeouts.connect)
                .timeout_read(timeouts.read)
                .build(),
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization: credentials.basic_auth_header(),
        }
    }

    /// `scheme://host[:port]` this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path such as `/web/powerstate`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET and return the body of a 200 response
    ///
    /// Any other status comes back as [`WebifError::Status`] with whatever
    /// body the box sent, so callers can decide how fatal it is.
    pub fn get(&self, path: &str) -> Result<String, WebifError> {
        let url = self.url_for(path);
        debug!(url = %url, "GET");

        let response = match self
            .agent
            .get(&url)
            .set("Authorization", &self.authorization)
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                debug!(url = %url, status = code, "non-success status");
                return Err(WebifError::Status { code, body });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(WebifError::Network(transport.to_string()));
            }
        };

        let code = response.status();
        let body = response
            .into_string()
            .map_err(|e| WebifError::Io(e.to_string()))?;

        if code != 200 {
            debug!(url = %url, status = code, "non-200 success status");
            return Err(WebifError::Status { code, body });
        }

        debug!(url = %url, status = code, bytes = body.len(), "response");
        Ok(body)
    }
}

impl fmt::Debug for WebifClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebifClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
