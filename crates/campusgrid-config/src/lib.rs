//! # Campusgrid Config
//!
//! Configuration types for the Campusgrid API.
//!
//! Each structure is loaded from environment variables with development
//! defaults:
//!
//! - [`api_server`]: upstream directory-service endpoint and timeout
//! - [`ident`]: secret key material for the identifier codec
//! - [`session`]: viewer session token settings

pub mod api_server;
pub mod ident;
pub mod session;

// Re-export commonly used types at crate root
pub use api_server::ApiServerConfig;
pub use ident::IdentConfig;
pub use session::SessionConfig;
