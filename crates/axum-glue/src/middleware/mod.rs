//! Middleware for `axum::Router` and HTTP request processing.
//!
//! This module provides small, independent middleware helpers for:
//! - Error translation (plain-text or JSON bodies, panic recovery)
//! - Permissive CORS
//! - HTTP Basic Authentication backed by a credential table
//! - Path blocklisting by substring
//! - Response compression gated by path suffix
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use axum::Router;
//! use axum::http::StatusCode;
//! use axum_glue::middleware::{CredentialTable, ErrorFormat, PathBlocklist, RouterExt};
//!
//! let app: Router = Router::new()
//!     .with_basic_auth(CredentialTable::new().with_user("alice", "secret"))
//!     .with_path_blocklist(
//!         PathBlocklist::new(["admin"], StatusCode::FORBIDDEN),
//!         ErrorFormat::Plain,
//!     )
//!     .with_permissive_cors()
//!     .with_suffix_compression(5, [".js", ".css"])
//!     .with_error_boundary(ErrorFormat::Plain, Duration::from_secs(30));
//! ```

mod basic_auth;
mod blocklist;
mod cors;
mod error_handling;
mod extensions;

pub use basic_auth::{CredentialTable, basic_auth_layer};
pub use blocklist::{BlockPathLayer, PathBlocklist};
pub use cors::cors_any_layer;
pub use error_handling::{ErrorFormat, ResponseFut, catch_panic, handle_error, handle_error_json};
pub use extensions::RouterExt;
