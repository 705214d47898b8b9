//! Message domain: identifiers and request bodies.
//!
//! Message payloads are opaque to the SDK: anything `Serialize` goes in, and
//! the server's `data` comes back as a [`serde_json::Value`].

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── MessageId ───────────────────────────────────────────────────────────────

/// Newtype for message identifiers as assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read the `id` field of a returned message, if it is a string or number.
    pub fn from_data(data: &serde_json::Value) -> Option<Self> {
        match data.get("id")? {
            serde_json::Value::String(s) => Some(Self(s.clone())),
            serde_json::Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for MessageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MessageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MessageId(s))
    }
}

// ─── Request bodies ──────────────────────────────────────────────────────────

/// Body of `POST /messages`: `{"message": <payload>}`.
#[derive(Debug, Serialize)]
pub struct CreateMessageRequest<'a, M: Serialize + ?Sized> {
    pub message: &'a M,
}

impl<'a, M: Serialize + ?Sized> CreateMessageRequest<'a, M> {
    pub fn new(message: &'a M) -> Self {
        Self { message }
    }
}
