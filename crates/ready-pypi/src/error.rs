use thiserror::Error;

/// Error types for PyPI metadata lookups and classification inputs.
///
/// Lookup errors are deliberately fine-grained: the runner treats every
/// per-project failure the same way (verdict `unknown`), but logs and
/// tests need to tell an unpublished package apart from a transport
/// failure.
#[derive(Error, Debug)]
pub enum PypiError {
    #[error("package not found on PyPI: {package}")]
    PackageNotFound { package: String },

    #[error("registry request failed for {package}: {source}")]
    Registry {
        package: String,
        #[source]
        source: ready_core::CoreError,
    },

    #[error("malformed PyPI response for {package}: {source}")]
    ApiResponse {
        package: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid target version '{input}': expected <major>.<minor>, e.g. \"3.11\"")]
    InvalidTargetVersion { input: String },
}

impl PypiError {
    /// Wraps a transport error for the given package.
    pub fn registry_error(package: &str, source: ready_core::CoreError) -> Self {
        Self::Registry {
            package: package.to_string(),
            source,
        }
    }

    /// Wraps a response-deserialization error for the given package.
    pub fn api_response_error(package: &str, source: serde_json::Error) -> Self {
        Self::ApiResponse {
            package: package.to_string(),
            source,
        }
    }
}

/// Convenience type alias for `Result<T, PypiError>`.
pub type Result<T> = std::result::Result<T, PypiError>;
