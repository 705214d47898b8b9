//! Network constants for the Outkit SDK.

/// Default REST API base URI.
pub const DEFAULT_BASE_URI: &str = "https://api.outkit.io/v1";

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("outkit-rust-client/", env!("CARGO_PKG_VERSION"));
