//! Authentication: credentials, signature bundles, request signing.
//!
//! ## Signing Scheme
//!
//! Every request is signed with HMAC-SHA256 keyed by the account secret.
//! The signed payload is the concatenation
//!
//! ```text
//! timestamp + method + path + body
//! ```
//!
//! with no separators. When the target URI carries a query string, `?query`
//! is appended to the **body** segment, not the path. The server verifies the
//! same layout, so this must be reproduced byte for byte.
//!
//! The resulting [`SignatureBundle`] is sent as four `Outkit-Access-*` headers.
//! A bundle is bound to one request and one timestamp; never reuse it.

pub mod signer;

pub use signer::{canonical_string, compute_signature, parse_uri, sign, sign_at};

use std::fmt;

use crate::error::{SdkError, SdkResult};

/// Header carrying the access key.
pub const HEADER_ACCESS_KEY: &str = "Outkit-Access-Key";
/// Header carrying the base64 HMAC signature.
pub const HEADER_ACCESS_SIGNATURE: &str = "Outkit-Access-Signature";
/// Header carrying the Unix timestamp (seconds) the signature was made at.
pub const HEADER_ACCESS_TIMESTAMP: &str = "Outkit-Access-Timestamp";
/// Header carrying the account passphrase.
pub const HEADER_ACCESS_PASSPHRASE: &str = "Outkit-Access-Passphrase";

// ============================================================================
// Credentials
// ============================================================================

/// API credentials. All three fields are required.
///
/// `Debug` output redacts the secret and passphrase.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
    passphrase: String,
}

impl Credentials {
    /// Create credentials, rejecting empty values.
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> SdkResult<Self> {
        let credentials = Self {
            key: key.into(),
            secret: secret.into(),
            passphrase: passphrase.into(),
        };
        for (name, value) in [
            ("key", &credentials.key),
            ("secret", &credentials.secret),
            ("passphrase", &credentials.passphrase),
        ] {
            if value.trim().is_empty() {
                return Err(SdkError::InvalidArgument(format!("{} is required", name)));
            }
        }
        // Key and passphrase go out as header values; the secret only keys the HMAC.
        for (name, value) in [
            ("key", &credentials.key),
            ("passphrase", &credentials.passphrase),
        ] {
            if value.chars().any(|c| c.is_control()) {
                return Err(SdkError::InvalidArgument(format!(
                    "{} contains control characters",
                    name
                )));
            }
        }
        Ok(credentials)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Request method
// ============================================================================

/// HTTP methods the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Uppercase token used both on the wire and in the signing payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "http")]
impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

// ============================================================================
// Signature bundle
// ============================================================================

/// Authentication artifact attached to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureBundle {
    pub key: String,
    pub signature: String,
    /// Unix time in whole seconds.
    pub timestamp: i64,
    pub passphrase: String,
}

impl SignatureBundle {
    /// The four `Outkit-Access-*` header pairs for this bundle.
    pub fn headers(&self) -> [(&'static str, String); 4] {
        [
            (HEADER_ACCESS_KEY, self.key.clone()),
            (HEADER_ACCESS_SIGNATURE, self.signature.clone()),
            (HEADER_ACCESS_TIMESTAMP, self.timestamp.to_string()),
            (HEADER_ACCESS_PASSPHRASE, self.passphrase.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_reject_empty_fields() {
        for (key, secret, passphrase, missing) in [
            ("", "s", "p", "key"),
            ("k", "", "p", "secret"),
            ("k", "s", "  ", "passphrase"),
            ("k\r\nX-Injected: 1", "s", "p", "key"),
        ] {
            let err = Credentials::new(key, secret, passphrase).unwrap_err();
            match err {
                SdkError::InvalidArgument(msg) => assert!(msg.starts_with(missing), "{msg}"),
                other => panic!("expected InvalidArgument, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_control_characters_only_rejected_in_header_fields() {
        let err = Credentials::new("k", "s", "pass\nphrase").unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(ref m) if m.starts_with("passphrase")));

        let creds = Credentials::new("k", "raw\tsecret\u{1}", "p").unwrap();
        assert_eq!(creds.secret(), "raw\tsecret\u{1}");
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let creds = Credentials::new("my-key", "top-secret", "open-sesame").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("my-key"));
        assert!(!debug.contains("top-secret"));
        assert!(!debug.contains("open-sesame"));
    }

    #[test]
    fn test_bundle_headers() {
        let bundle = SignatureBundle {
            key: "k".to_string(),
            signature: "c2ln".to_string(),
            timestamp: 1_700_000_000,
            passphrase: "p".to_string(),
        };
        let headers = bundle.headers();
        assert_eq!(headers[0], ("Outkit-Access-Key", "k".to_string()));
        assert_eq!(headers[1], ("Outkit-Access-Signature", "c2ln".to_string()));
        assert_eq!(headers[2], ("Outkit-Access-Timestamp", "1700000000".to_string()));
        assert_eq!(headers[3], ("Outkit-Access-Passphrase", "p".to_string()));
    }

    #[test]
    fn test_http_method_tokens() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
