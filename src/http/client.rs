//! Low-level HTTP client: `OutkitHttp`.
//!
//! Every request is signed immediately before it is sent, over the exact URL
//! and body bytes that go on the wire. Responses are decoded through the
//! shared [`Envelope`](crate::http::Envelope). No retries.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::auth::{self, Credentials, HttpMethod};
use crate::error::{SdkError, SdkResult};
use crate::http::envelope::decode_envelope;
use crate::network;

/// Low-level HTTP client for the Outkit REST API.
#[derive(Debug, Clone)]
pub struct OutkitHttp {
    base_uri: String,
    client: Client,
    credentials: Credentials,
}

impl OutkitHttp {
    pub fn new(
        base_uri: &str,
        credentials: Credentials,
        timeout: Duration,
        default_headers: HeaderMap,
    ) -> SdkResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(network::USER_AGENT)
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            base_uri: base_uri.trim_end_matches('/').to_string(),
            client,
            credentials,
        })
    }

    /// Base URI without a trailing slash.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Resolve `path` (leading `/`) against the base URI.
    ///
    /// The returned [`Url`] is the exact target that gets signed and sent.
    pub fn url(&self, path: &str) -> SdkResult<Url> {
        auth::parse_uri(&format!("{}{}", self.base_uri, path))
    }

    /// Signed GET with an empty body.
    pub async fn get(&self, url: Url) -> SdkResult<Value> {
        self.send(HttpMethod::Get, url, None).await
    }

    /// Signed POST of an already-encoded JSON body.
    ///
    /// The string is signed and sent as-is, so the server sees the same bytes
    /// the signature covers.
    pub async fn post_json(&self, url: Url, body: String) -> SdkResult<Value> {
        self.send(HttpMethod::Post, url, Some(body)).await
    }

    async fn send(&self, method: HttpMethod, url: Url, body: Option<String>) -> SdkResult<Value> {
        let bundle = auth::sign(
            &self.credentials,
            method,
            &url,
            body.as_deref().unwrap_or(""),
        )?;

        tracing::debug!(
            method = method.as_str(),
            timestamp = bundle.timestamp,
            "Sending request to {}",
            url
        );

        let mut req = self.client.request(method.into(), url.clone());
        for (name, value) in bundle.headers() {
            req = req.header(name, value);
        }
        if let Some(b) = body {
            req = req
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(b);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await?;

        match decode_envelope(status, &bytes) {
            Err(SdkError::Api(e)) => {
                tracing::warn!(status, code = %e.code, "API returned an error for {}", url);
                Err(SdkError::Api(e))
            }
            other => other,
        }
    }
}
