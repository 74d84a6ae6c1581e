//! # Campusgrid API
//!
//! A campus directory and timetable lookup service built with Rust, Axum
//! and Redis. Users search by name, student/staff number or classroom
//! name and are routed to the matching student, teacher, classroom or
//! course timetable, subject to per-student privacy settings.
//!
//! ## Overview
//!
//! Campusgrid sits between its public JSON surface and an upstream
//! directory/timetable service:
//!
//! - **Resolver**: classifies free-text search results into a navigation
//!   decision (redirect, disambiguation list, or not-found)
//! - **Identifier codec**: tamper-evident opaque handles so raw ids never
//!   appear in URLs
//! - **Payload mappers**: normalize the upstream's loosely-shaped JSON
//!   into typed records
//! - **Privacy gate**: decides whether a viewer may see a student's
//!   timetable
//! - **Grid builder**: places course meetings on the 7-day, 6-slot grid
//!   with collapse hints for empty weekend days and late slots
//!
//! ## Architecture
//!
//! The codebase follows a modular structure:
//!
//! ```text
//! src/
//! ├── middleware/       # Optional viewer-identity extraction
//! ├── modules/          # Feature modules
//! │   ├── query/       # All-in-one search resolver
//! │   ├── students/    # Privacy-gated student timetable pages
//! │   ├── teachers/    # Teacher timetable pages
//! │   ├── classrooms/  # Classroom timetable pages
//! │   └── courses/     # Course detail pages
//! ├── docs.rs           # OpenAPI documentation setup
//! ├── logging.rs        # Request logging middleware
//! ├── router.rs         # Main application router
//! └── state.rs          # Shared application state
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: business logic
//! - `model.rs`: view models and re-exported records
//! - `router.rs`: axum router configuration
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! API_SERVER_BASE_URL=http://api.campus.internal
//! REDIS_URL=redis://localhost:6379
//! IDENT_SECRET=long-random-secret
//! SESSION_SECRET=another-long-random-secret
//! ```
//!
//! ### API Documentation
//!
//! When the server is running, documentation is served at
//! `http://localhost:3000/swagger-ui`.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use campusgrid_cache;
pub use campusgrid_config;
pub use campusgrid_core;
pub use campusgrid_ident;
pub use campusgrid_models;
pub use campusgrid_rpc;
