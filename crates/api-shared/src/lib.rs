//! # API Shared
//!
//! Shared wire types and services for filedrop APIs.
//!
//! Contains:
//! - JSON request/response bodies (`types` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`; kept separate so response shapes are defined in one place.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
