//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types and request bodies
//! - `client.rs`: Sub-client with HTTP methods

pub mod message;
