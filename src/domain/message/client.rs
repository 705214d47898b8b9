//! Messages sub-client: create and fetch.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::client::OutkitClient;
use crate::domain::message::CreateMessageRequest;
use crate::error::{SdkError, SdkResult};

/// Sub-client for message operations.
pub struct Messages<'a> {
    pub(crate) client: &'a OutkitClient,
}

impl<'a> Messages<'a> {
    /// Fetch a message by id. Returns the envelope's `data` verbatim.
    ///
    /// The id is percent-encoded as a single path segment.
    pub async fn get(&self, id: impl AsRef<str>) -> SdkResult<Value> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(SdkError::InvalidArgument(
                "message id must not be empty".to_string(),
            ));
        }
        // URL normalization would collapse these into the parent path.
        if id == "." || id == ".." {
            return Err(SdkError::InvalidArgument(format!(
                "message id {:?} is not a valid path segment",
                id
            )));
        }
        let url = self.message_url(id)?;
        self.client.http.get(url).await
    }

    /// Create a message from any JSON-serializable payload.
    ///
    /// Sends `{"message": <payload>}` and returns the envelope's `data`.
    pub async fn create<M: Serialize + ?Sized>(&self, message: &M) -> SdkResult<Value> {
        let body = serde_json::to_string(&CreateMessageRequest::new(message)).map_err(|e| {
            SdkError::InvalidArgument(format!("message is not JSON-serializable: {}", e))
        })?;
        let url = self.collection_url()?;
        self.client.http.post_json(url, body).await
    }

    /// `{base}/messages`
    pub fn collection_url(&self) -> SdkResult<Url> {
        self.client.http.url("/messages")
    }

    /// `{base}/messages/{id}`, with `id` percent-encoded as one segment.
    pub fn message_url(&self, id: &str) -> SdkResult<Url> {
        self.client
            .http
            .url(&format!("/messages/{}", urlencoding::encode(id)))
    }
}
