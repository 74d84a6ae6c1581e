//! # Campusgrid Ident
//!
//! Opaque, integrity-protected resource identifiers for the Campusgrid API.
//!
//! Internal resource ids (student numbers, staff numbers, room and course
//! codes) must never appear verbatim in public URLs. This crate encodes a
//! `(ResourceType, raw id)` pair into an URL-safe handle carrying a keyed
//! MAC, and refuses to decode anything that was tampered with or that was
//! issued for a different resource type.
//!
//! # Example
//!
//! ```ignore
//! use campusgrid_ident::{Codec, ResourceType};
//!
//! let codec = Codec::new(b"secret-key-material");
//! let handle = codec.encode(ResourceType::Student, "3901160407");
//!
//! // Round-trips with the matching type...
//! assert_eq!(codec.decode(&handle, ResourceType::Student).unwrap(), "3901160407");
//!
//! // ...but is rejected as any other type.
//! assert!(codec.decode(&handle, ResourceType::Classroom).is_err());
//! ```

pub mod codec;

// Re-export commonly used types at crate root
pub use codec::{Codec, IdentError, ResourceType};
