//! High-level client: `OutkitClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::auth::{self, Credentials};
use crate::domain::message::client::Messages;
use crate::error::{SdkError, SdkResult};
use crate::http::OutkitHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::message::client::Messages as MessagesClient;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variables read by [`OutkitClient::from_env`].
pub const ENV_KEY: &str = "OUTKIT_KEY";
pub const ENV_SECRET: &str = "OUTKIT_SECRET";
pub const ENV_PASSPHRASE: &str = "OUTKIT_PASSPHRASE";
pub const ENV_BASE_URI: &str = "OUTKIT_BASE_URI";

/// The primary entry point for the Outkit SDK.
///
/// Configuration is fixed at construction. The client is cheap to clone and
/// safe to share across tasks; each request is signed independently.
#[derive(Debug, Clone)]
pub struct OutkitClient {
    pub(crate) http: OutkitHttp,
}

impl OutkitClient {
    /// Client against the default production endpoint.
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> SdkResult<Self> {
        Self::builder(key, secret, passphrase).build()
    }

    pub fn builder(
        key: impl Into<String>,
        secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> OutkitClientBuilder {
        OutkitClientBuilder::new(key, secret, passphrase)
    }

    /// Build from `OUTKIT_KEY`, `OUTKIT_SECRET`, `OUTKIT_PASSPHRASE` and the
    /// optional `OUTKIT_BASE_URI`.
    pub fn from_env() -> SdkResult<Self> {
        let var = |name: &str| {
            std::env::var(name)
                .map_err(|_| SdkError::InvalidArgument(format!("{} is not set", name)))
        };

        let mut builder = Self::builder(var(ENV_KEY)?, var(ENV_SECRET)?, var(ENV_PASSPHRASE)?);
        if let Ok(base_uri) = std::env::var(ENV_BASE_URI) {
            if !base_uri.trim().is_empty() {
                builder = builder.base_uri(base_uri);
            }
        }
        builder.build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn messages(&self) -> Messages<'_> {
        Messages { client: self }
    }

    /// Base URI requests are sent to (no trailing slash).
    pub fn base_uri(&self) -> &str {
        self.http.base_uri()
    }

    pub fn credentials(&self) -> &Credentials {
        self.http.credentials()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Builder for [`OutkitClient`].
#[derive(Debug, Clone)]
pub struct OutkitClientBuilder {
    key: String,
    secret: String,
    passphrase: String,
    base_uri: String,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
}

impl OutkitClientBuilder {
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            passphrase: passphrase.into(),
            base_uri: crate::network::DEFAULT_BASE_URI.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: Vec::new(),
        }
    }

    /// Override the API base URI (e.g. a staging host or a local stub).
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = uri.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a default header to all requests.
    ///
    /// The `Outkit-Access-*` headers are always set per request and take
    /// precedence over anything added here.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> SdkResult<OutkitClient> {
        let credentials = Credentials::new(self.key, self.secret, self.passphrase)?;

        let base_url = auth::parse_uri(self.base_uri.trim())?;
        if !matches!(base_url.scheme(), "http" | "https")
            || base_url.query().is_some()
            || base_url.fragment().is_some()
        {
            return Err(SdkError::InvalidArgument(format!(
                "base URI must be an http(s) URL without query or fragment, got {:?}",
                self.base_uri
            )));
        }

        let mut headers = HeaderMap::new();
        for (name, value) in self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                SdkError::InvalidArgument(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                SdkError::InvalidArgument(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(OutkitClient {
            http: OutkitHttp::new(base_url.as_str(), credentials, self.timeout, headers)?,
        })
    }
}
