//! # Campusgrid Core
//!
//! Core types, errors, and utilities for the Campusgrid API.
//!
//! This crate provides foundational pieces used throughout the application:
//!
//! - [`errors`]: the application error type with HTTP response conversion
//! - [`semester`]: semester string validation, ordering and view helpers
//! - [`text`]: search keyword normalization helpers

pub mod errors;
pub mod semester;
pub mod text;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use semester::{SemesterView, is_valid_semester, latest_semester, semester_views};
pub use text::{contains_cjk, normalize_keyword};
