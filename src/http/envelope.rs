//! Response envelope shared by every endpoint.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ApiError, SdkError, SdkResult};

/// Response envelope: exactly one of `data` / `error` is expected.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// `Some(Value::Null)` when the server sends `"data": null`, `None` when absent.
    #[serde(default, deserialize_with = "present")]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl Envelope {
    /// `error` wins over `data`; an envelope with neither is a decode failure.
    pub fn into_result(self, status: u16) -> SdkResult<Value> {
        if let Some(error) = self.error {
            return Err(SdkError::Api(error));
        }
        self.data.ok_or_else(|| SdkError::Decode {
            status,
            reason: "response envelope has neither `data` nor `error`".to_string(),
        })
    }
}

/// Parse a raw response body into the envelope's `data` payload.
pub fn decode_envelope(status: u16, body: &[u8]) -> SdkResult<Value> {
    let envelope: Envelope = serde_json::from_slice(body).map_err(|e| SdkError::Decode {
        status,
        reason: e.to_string(),
    })?;
    envelope.into_result(status)
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_data() {
        let body = br#"{"data": {"id": "m1", "text": "hi"}}"#;
        let data = decode_envelope(200, body).unwrap();
        assert_eq!(data, json!({"id": "m1", "text": "hi"}));
    }

    #[test]
    fn test_decode_null_data_is_returned() {
        let data = decode_envelope(200, br#"{"data": null}"#).unwrap();
        assert_eq!(data, Value::Null);
    }

    #[test]
    fn test_decode_error_envelope() {
        let body = br#"{"error": {"code": "not_found", "message": "no such message"}}"#;
        match decode_envelope(404, body).unwrap_err() {
            SdkError::Api(e) => {
                assert_eq!(e.code, "not_found");
                assert_eq!(e.message, "no such message");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_takes_precedence_over_data() {
        let body = br#"{"data": {}, "error": {"code": "bad", "message": "nope"}}"#;
        let err = decode_envelope(200, body).unwrap_err();
        assert_eq!(err.api_code(), Some("bad"));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode_envelope(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, SdkError::Decode { status: 502, .. }), "{err:?}");
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let err = decode_envelope(200, br#"{"status": "ok"}"#).unwrap_err();
        assert!(matches!(err, SdkError::Decode { status: 200, .. }), "{err:?}");
    }

    #[test]
    fn test_decode_rejects_malformed_error_object() {
        let err = decode_envelope(400, br#"{"error": "boom"}"#).unwrap_err();
        assert!(matches!(err, SdkError::Decode { .. }), "{err:?}");
    }
}
