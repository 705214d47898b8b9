//! # Outkit SDK
//!
//! A Rust client for the Outkit messaging API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Errors, network constants, message domain types
//! 2. **Auth**: Credentials and HMAC-SHA256 request signing (no I/O)
//! 3. **HTTP**: `OutkitHttp` signs, sends and decodes the response envelope
//! 4. **High-Level Client**: `OutkitClient` with a `messages()` sub-client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use outkit::prelude::*;
//! use serde_json::json;
//!
//! let client = OutkitClient::new("key", "secret", "passphrase")?;
//!
//! let created = client.messages().create(&json!({"type": "email", "text": "hi"})).await?;
//! let id = MessageId::from_data(&created).expect("server assigns an id");
//! let fetched = client.messages().get(&id).await?;
//! ```
//!
//! ## Errors
//!
//! ```rust,ignore
//! match client.messages().get("missing").await {
//!     Ok(message) => println!("{message}"),
//!     Err(SdkError::Api(e)) if e.code == "not_found" => println!("gone: {}", e.message),
//!     Err(e) => return Err(e),
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, request bodies, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credentials and request signing.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Signed HTTP transport.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `OutkitClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::message::{CreateMessageRequest, MessageId};

    // Errors
    pub use crate::error::{ApiError, SdkError, SdkResult};

    // Network
    pub use crate::network::{DEFAULT_BASE_URI, USER_AGENT};

    // Auth
    pub use crate::auth::{Credentials, HttpMethod, SignatureBundle};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{MessagesClient, OutkitClient, OutkitClientBuilder};
}
