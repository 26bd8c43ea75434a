//! Transport plumbing for pyready.
//!
//! This crate provides the pieces shared by everything that talks to the
//! network: a typed error enum and a thin HTTPS client wrapper with a
//! per-request timeout and a pooled connection reuse.
//!
//! Domain logic (PyPI metadata, classification) lives in `ready-pypi`;
//! this crate knows nothing about packages.

pub mod error;
pub mod http;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use http::{DEFAULT_TIMEOUT, HttpClient};
