//! HTTP transport for the TrueCoach API
//!
//! Minimal GET-only client: it attaches the credentials and returns whatever the server
//! answered. Interpreting the answer is left to [`Service`](super::Service).

use crate::Result;
use bytes::Bytes;
use core::time::Duration;
use ohno::IntoAppError;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

const LOG_TARGET: &str = "      http";

/// Raw answer to a request: the status code and the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub status: u16,
    pub body: Bytes,
}

impl Payload {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for statuses in `200..400`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 400
    }
}

/// Fetches a resource by path relative to the API origin.
pub trait Transport: Send + Sync {
    fn get(&self, path: &str) -> impl Future<Output = Result<Payload>> + Send;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    origin: String,
}

impl HttpTransport {
    /// Create a transport that authenticates with `token` and acts in the given `role`.
    pub fn new(token: &str, origin: impl Into<String>, timeout: Duration, role: &str) -> Result<Self> {
        let mut auth_val = HeaderValue::from_str(&format!("Bearer {token}")).into_app_err("API token contains invalid characters")?;
        auth_val.set_sensitive(true);

        let role_val = HeaderValue::from_str(role).into_app_err_with(|| format!("invalid role '{role}'"))?;

        let mut headers = HeaderMap::new();
        let _ = headers.insert(AUTHORIZATION, auth_val);
        let _ = headers.insert(HeaderName::from_static("role"), role_val);

        let client = reqwest::Client::builder()
            .user_agent("truecoach")
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .into_app_err("unable to create HTTP client")?;

        let origin = origin.into();

        Ok(Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
        })
    }

    /// Get the origin requests are resolved against
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Payload> {
        let url = format!("{}{path}", self.origin);
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .into_app_err_with(|| format!("failed getting resource '{path}'"))?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .into_app_err_with(|| format!("failed reading response body for '{path}'"))?;

        log::debug!(target: LOG_TARGET, "GET {url} returned {status} ({} bytes)", body.len());

        Ok(Payload { status, body })
    }
}
