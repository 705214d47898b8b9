//! HTTP transport layer: `OutkitHttp` signs, sends and decodes.

pub mod client;
pub mod envelope;

pub use client::OutkitHttp;
pub use envelope::{decode_envelope, Envelope};
