//! PyPI support for pyready.
//!
//! This crate provides the domain half of the readiness reporter: a PyPI
//! JSON API client, wheel filename handling, and the classification
//! procedure that turns one project's metadata into a readiness signal
//! for a target Python version.
//!
//! # Architecture
//!
//! - **Types**: `TargetVersion`, `ProjectMetadata`, `ReadyStatus`,
//!   `Verdict`
//! - **Registry**: PyPI JSON API client over `ready_core::HttpClient`
//! - **Wheel**: PEP 427 filename parsing and Python-tag decoding
//! - **Classify**: the two evidence channels and their combination
//! - **Error Handling**: typed errors with `thiserror`
//!
//! # Examples
//!
//! ```no_run
//! use ready_core::HttpClient;
//! use ready_pypi::{PypiRegistry, TargetVersion, classify};
//!
//! # #[tokio::main]
//! # async fn main() -> ready_pypi::Result<()> {
//! let target: TargetVersion = "3.11".parse()?;
//! let registry = PypiRegistry::new(HttpClient::default());
//!
//! let metadata = registry.get_project("cryptography").await?;
//! let result = classify(&target, &metadata);
//! println!("{:?}", result.verdict);
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod error;
pub mod registry;
pub mod types;
pub mod wheel;

// Re-export commonly used types
pub use classify::{
    Classification, advertised_versions, classifier_status, classify, wheel_status,
};
pub use error::{PypiError, Result};
pub use registry::{PypiRegistry, normalize_package_name, package_url};
pub use types::{ProjectMetadata, ReadyStatus, ReleaseVersion, TargetVersion, Verdict, Wheel};
pub use wheel::{WheelFilename, is_cpython_compatible, python_tag_version};
