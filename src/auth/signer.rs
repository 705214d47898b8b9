//! Request signer: canonical payload, HMAC-SHA256, signature bundle.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;

use crate::auth::{Credentials, HttpMethod, SignatureBundle};
use crate::error::{SdkError, SdkResult};

type HmacSha256 = Hmac<Sha256>;

/// Parse an absolute request URI into the [`Url`] that is both signed and sent.
///
/// Parsing normalizes the path (dot-segments removed, unsafe characters
/// percent-encoded), so signing must always go through the parsed form.
pub fn parse_uri(uri: &str) -> SdkResult<Url> {
    let url = Url::parse(uri)
        .map_err(|e| SdkError::InvalidArgument(format!("Malformed request URI {:?}: {}", uri, e)))?;
    if url.cannot_be_a_base() || url.host_str().map_or(true, str::is_empty) {
        return Err(SdkError::InvalidArgument(format!(
            "Request URI has no host: {:?}",
            uri
        )));
    }
    Ok(url)
}

/// Sign a request at the current wall-clock time.
///
/// `body` is the exact string sent on the wire (empty for GET).
pub fn sign(
    credentials: &Credentials,
    method: HttpMethod,
    url: &Url,
    body: &str,
) -> SdkResult<SignatureBundle> {
    sign_at(credentials, method, url, body, Utc::now().timestamp())
}

/// Sign a request with an explicit Unix timestamp (seconds).
pub fn sign_at(
    credentials: &Credentials,
    method: HttpMethod,
    url: &Url,
    body: &str,
    timestamp: i64,
) -> SdkResult<SignatureBundle> {
    // The query string rides in the body segment, not the path.
    let signed_body = match url.query().filter(|q| !q.is_empty()) {
        Some(query) => format!("{}?{}", body, query),
        None => body.to_string(),
    };

    let payload = canonical_string(timestamp, method, url.path(), &signed_body);
    let signature = compute_signature(credentials.secret(), &payload)?;

    Ok(SignatureBundle {
        key: credentials.key().to_string(),
        signature,
        timestamp,
        passphrase: credentials.passphrase().to_string(),
    })
}

/// `timestamp + method + path + body`, no delimiters.
pub fn canonical_string(timestamp: i64, method: HttpMethod, path: &str, body: &str) -> String {
    format!("{}{}{}{}", timestamp, method.as_str(), path, body)
}

/// Base64 (standard, padded) of the raw HMAC-SHA256 of `payload`.
pub fn compute_signature(secret: &str, payload: &str) -> SdkResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SdkError::InvalidArgument(format!("Invalid signing secret: {}", e)))?;
    mac.update(payload.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: i64 = 1_700_000_000;

    fn creds() -> Credentials {
        Credentials::new("test-key", "secret", "test-pass").unwrap()
    }

    #[test]
    fn test_canonical_string_has_no_separators() {
        assert_eq!(
            canonical_string(TS, HttpMethod::Post, "/v1/messages", "{}"),
            "1700000000POST/v1/messages{}"
        );
    }

    fn url(uri: &str) -> Url {
        parse_uri(uri).unwrap()
    }

    #[test]
    fn test_query_folded_into_body_segment() {
        let bundle = sign_at(
            &creds(),
            HttpMethod::Get,
            &url("https://api.outkit.io/v1/messages/42?foo=bar"),
            "",
            TS,
        )
        .unwrap();
        let expected = compute_signature("secret", "1700000000GET/v1/messages/42?foo=bar").unwrap();
        assert_eq!(bundle.signature, expected);
        assert_eq!(bundle.signature, "lUCa6oosiqU1Ct4vujjEc2toFsCBAi1jmzkyMhbTC/4=");
    }

    #[test]
    fn test_post_body_signed_verbatim() {
        let body = r#"{"message":{"text":"hi"}}"#;
        let bundle = sign_at(
            &creds(),
            HttpMethod::Post,
            &url("https://api.outkit.io/v1/messages"),
            body,
            TS,
        )
        .unwrap();
        assert_eq!(bundle.signature, "zF9IHQqAjBfROrAIkfGfAC4wbWMFp4pVr+dS7gdzcJQ=");
        assert_eq!(bundle.key, "test-key");
        assert_eq!(bundle.passphrase, "test-pass");
        assert_eq!(bundle.timestamp, TS);
    }

    #[test]
    fn test_compute_signature_known_vector() {
        let sig = compute_signature("key", "The quick brown fox jumps over the lazy dog").unwrap();
        assert_eq!(sig, "97yD9DBThCSxMpjmqm+xQ+9NWaFJRhdZl0edvC0aPNg=");
    }

    #[test]
    fn test_signature_deterministic_for_fixed_inputs() {
        let target = url("http://127.0.0.1:8080/v1/messages/abc");
        let a = sign_at(&creds(), HttpMethod::Get, &target, "", TS).unwrap();
        let b = sign_at(&creds(), HttpMethod::Get, &target, "", TS).unwrap();
        assert_eq!(a, b);

        let later = sign_at(&creds(), HttpMethod::Get, &target, "", TS + 1).unwrap();
        assert_ne!(a.signature, later.signature);
    }

    #[test]
    fn test_method_changes_signature() {
        let target = url("https://api.outkit.io/v1/messages");
        let get = sign_at(&creds(), HttpMethod::Get, &target, "", TS).unwrap();
        let post = sign_at(&creds(), HttpMethod::Post, &target, "", TS).unwrap();
        assert_ne!(get.signature, post.signature);
    }

    #[test]
    fn test_sign_uses_current_time() {
        let before = Utc::now().timestamp();
        let bundle = sign(
            &creds(),
            HttpMethod::Get,
            &url("https://api.outkit.io/v1/messages/1"),
            "",
        )
        .unwrap();
        let after = Utc::now().timestamp();
        assert!(bundle.timestamp >= before && bundle.timestamp <= after);
    }

    #[test]
    fn test_signed_path_is_normalized_path() {
        for (uri, path) in [
            ("http://127.0.0.1:4000/v1/../v1/messages", "/v1/messages"),
            ("http://127.0.0.1:4000/v1/./messages", "/v1/messages"),
            ("http://127.0.0.1:4000/v1/my box/../messages", "/v1/messages"),
            ("http://127.0.0.1:4000/v1/messages/a b", "/v1/messages/a%20b"),
            ("https://api.outkit.io", "/"),
        ] {
            let target = url(uri);
            assert_eq!(target.path(), path, "{uri}");

            let bundle = sign_at(&creds(), HttpMethod::Get, &target, "", TS).unwrap();
            let expected = compute_signature("secret", &format!("{}GET{}", TS, path)).unwrap();
            assert_eq!(bundle.signature, expected, "{uri}");
        }
    }

    #[test]
    fn test_empty_query_and_fragment_not_signed() {
        let plain = sign_at(&creds(), HttpMethod::Get, &url("https://h/v1/messages"), "", TS).unwrap();
        for uri in ["https://h/v1/messages?", "https://h/v1/messages#frag"] {
            let bundle = sign_at(&creds(), HttpMethod::Get, &url(uri), "", TS).unwrap();
            assert_eq!(bundle.signature, plain.signature, "{uri}");
        }
    }

    #[test]
    fn test_malformed_uri_fails_fast() {
        for uri in ["/v1/messages", "api.outkit.io/v1", "http://", "mailto:someone@example.com", ""] {
            let err = parse_uri(uri).unwrap_err();
            assert!(matches!(err, SdkError::InvalidArgument(_)), "{uri}: {err:?}");
        }
    }
}
