//! # Campusgrid RPC
//!
//! Read-only HTTP client for the upstream directory/timetable service.
//!
//! All endpoints return JSON with a `status` field; anything other than
//! the success sentinel fails the whole call. Transport failures on these
//! read-only lookups are retried exactly once; application-level failures
//! are never retried. Successful payloads are handed to the
//! `campusgrid-models` builders, so callers only ever see typed records
//! or typed errors — never partially-built data.

pub mod client;
pub mod error;

// Re-export commonly used types at crate root
pub use client::ApiServerClient;
pub use error::RpcError;
