//! PyPI registry client.
//!
//! Fetches project metadata from the JSON API
//! (<https://pypi.org/pypi/{package}/json>) and reduces the response to
//! what readiness classification needs: trove classifiers and the list of
//! stable wheel-bearing releases. Every lookup is a fresh request; the
//! only reuse is reqwest's connection pool.

use crate::error::{PypiError, Result};
use crate::types::{ProjectMetadata, ReleaseVersion, Wheel};
use crate::wheel::WheelFilename;
use pep440_rs::Version;
use ready_core::HttpClient;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Base URL of the PyPI metadata API.
pub const PYPI_BASE: &str = "https://pypi.org/pypi";

/// Base URL for package pages on pypi.org.
pub const PYPI_URL: &str = "https://pypi.org/project";

/// Normalize package name according to PEP 503.
///
/// Converts package name to lowercase and replaces underscores/dots with
/// hyphens, then filters out consecutive hyphens. This ensures consistent
/// package lookups regardless of how the name is written in the dataset.
///
/// # Examples
///
/// ```
/// # use ready_pypi::registry::normalize_package_name;
/// assert_eq!(normalize_package_name("Flask"), "flask");
/// assert_eq!(normalize_package_name("typing_extensions"), "typing-extensions");
/// assert_eq!(normalize_package_name("ruamel.yaml"), "ruamel-yaml");
/// assert_eq!(normalize_package_name("my__package"), "my-package");
/// ```
pub fn normalize_package_name(name: &str) -> String {
    name.to_lowercase()
        .replace(&['_', '.'][..], "-")
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Returns the URL for a package's page on pypi.org.
///
/// Package names are normalized and URL-encoded to prevent path traversal.
pub fn package_url(name: &str) -> String {
    let normalized = normalize_package_name(name);
    format!("{}/{}", PYPI_URL, urlencoding::encode(&normalized))
}

/// Client for the PyPI metadata API.
///
/// # Examples
///
/// ```no_run
/// # use ready_pypi::PypiRegistry;
/// # use ready_core::HttpClient;
/// # #[tokio::main]
/// # async fn main() {
/// let registry = PypiRegistry::new(HttpClient::default());
///
/// let meta = registry.get_project("requests").await.unwrap();
/// assert!(!meta.classifiers.is_empty());
/// # }
/// ```
#[derive(Clone)]
pub struct PypiRegistry {
    http: HttpClient,
    base_url: String,
}

impl PypiRegistry {
    /// Creates a client against the public PyPI index.
    pub fn new(http: HttpClient) -> Self {
        Self::with_base_url(http, PYPI_BASE)
    }

    /// Creates a client against a custom metadata API base, mainly for
    /// pointing tests at a local mock server.
    pub fn with_base_url(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetches and reduces the metadata for one project.
    ///
    /// # Errors
    ///
    /// Returns `PypiError::PackageNotFound` for 404s, `PypiError::Registry`
    /// for other transport failures, and `PypiError::ApiResponse` when the
    /// body does not deserialize.
    pub async fn get_project(&self, name: &str) -> Result<ProjectMetadata> {
        let normalized = normalize_package_name(name);
        let url = format!("{}/{}/json", self.base_url, normalized);
        tracing::debug!("fetching metadata for '{}'", name);

        let data = self.http.get_bytes(&url).await.map_err(|e| {
            if e.is_status(404) {
                PypiError::PackageNotFound {
                    package: name.to_string(),
                }
            } else {
                PypiError::registry_error(name, e)
            }
        })?;

        parse_project_metadata(name, &data)
    }
}

// JSON response types

#[derive(Debug, Deserialize)]
struct PypiResponse {
    info: PypiInfo,
    #[serde(default)]
    releases: HashMap<String, Vec<PypiFile>>,
}

#[derive(Debug, Deserialize)]
struct PypiInfo {
    name: String,
    #[serde(default)]
    classifiers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PypiFile {
    filename: String,
    yanked: Option<bool>,
    packagetype: Option<String>,
}

/// Reduces a PyPI JSON response to classifiers plus the ascending list of
/// stable wheel-bearing versions.
fn parse_project_metadata(package_name: &str, data: &[u8]) -> Result<ProjectMetadata> {
    let response: PypiResponse =
        serde_json::from_slice(data).map_err(|e| PypiError::api_response_error(package_name, e))?;

    let mut versions: Vec<ReleaseVersion> = response
        .releases
        .into_iter()
        .filter_map(|(version_str, files)| {
            let Ok(version) = Version::from_str(&version_str) else {
                tracing::warn!(
                    "skipping version with invalid format: {} {}",
                    package_name,
                    version_str
                );
                return None;
            };
            if version.any_prerelease() {
                return None;
            }
            let wheels = collect_wheels(&files);
            // Versions without wheels carry no tag evidence
            if wheels.is_empty() {
                None
            } else {
                Some(ReleaseVersion { version, wheels })
            }
        })
        .collect();

    // releases is a map, so restore a deterministic ascending order
    versions.sort_by(|a, b| a.version.cmp(&b.version));

    Ok(ProjectMetadata {
        name: response.info.name,
        classifiers: response.info.classifiers,
        versions,
    })
}

fn collect_wheels(files: &[PypiFile]) -> Vec<Wheel> {
    files
        .iter()
        .filter(|f| !f.yanked.unwrap_or(false))
        .filter(|f| f.packagetype.as_deref() == Some("bdist_wheel"))
        .filter_map(|f| match WheelFilename::from_str(&f.filename) {
            Ok(parsed) => Some(Wheel {
                filename: f.filename.clone(),
                python_tags: parsed.python_tags,
                abi_tags: parsed.abi_tags,
            }),
            Err(_) => {
                tracing::warn!("skipping wheel with invalid filename: {}", f.filename);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_url() {
        assert_eq!(package_url("requests"), "https://pypi.org/project/requests");
        assert_eq!(
            package_url("typing_extensions"),
            "https://pypi.org/project/typing-extensions"
        );
    }

    const REQUESTS_JSON: &str = r#"{
        "info": {
            "name": "requests",
            "classifiers": [
                "Programming Language :: Python :: 3",
                "Programming Language :: Python :: 3.11"
            ]
        },
        "releases": {
            "2.31.0": [
                {"filename": "requests-2.31.0-py3-none-any.whl", "yanked": false, "packagetype": "bdist_wheel"},
                {"filename": "requests-2.31.0.tar.gz", "yanked": false, "packagetype": "sdist"}
            ],
            "2.30.0": [
                {"filename": "requests-2.30.0-py3-none-any.whl", "yanked": false, "packagetype": "bdist_wheel"}
            ],
            "2.29.9": [
                {"filename": "requests-2.29.9-py3-none-any.whl", "yanked": true, "packagetype": "bdist_wheel"}
            ]
        }
    }"#;

    #[test]
    fn test_parse_project_metadata() {
        let meta = parse_project_metadata("requests", REQUESTS_JSON.as_bytes()).unwrap();

        assert_eq!(meta.name, "requests");
        assert_eq!(meta.classifiers.len(), 2);
        // 2.29.9 had its only wheel yanked; the rest sort ascending
        let versions: Vec<String> = meta
            .versions
            .iter()
            .map(|v| v.version.to_string())
            .collect();
        assert_eq!(versions, vec!["2.30.0", "2.31.0"]);
    }

    #[test]
    fn test_parse_skips_sdist_only_versions() {
        let json = r#"{
            "info": {"name": "pkg", "classifiers": []},
            "releases": {
                "1.0.0": [
                    {"filename": "pkg-1.0.0.tar.gz", "yanked": false, "packagetype": "sdist"}
                ]
            }
        }"#;

        let meta = parse_project_metadata("pkg", json.as_bytes()).unwrap();
        assert!(meta.versions.is_empty());
    }

    #[test]
    fn test_parse_skips_prereleases() {
        let json = r#"{
            "info": {"name": "pkg", "classifiers": []},
            "releases": {
                "1.0.0": [
                    {"filename": "pkg-1.0.0-py3-none-any.whl", "yanked": false, "packagetype": "bdist_wheel"}
                ],
                "2.0.0rc1": [
                    {"filename": "pkg-2.0.0rc1-py3-none-any.whl", "yanked": false, "packagetype": "bdist_wheel"}
                ]
            }
        }"#;

        let meta = parse_project_metadata("pkg", json.as_bytes()).unwrap();
        assert_eq!(meta.versions.len(), 1);
        assert_eq!(meta.versions[0].version.to_string(), "1.0.0");
    }

    #[test]
    fn test_parse_skips_invalid_version_keys_and_filenames() {
        let json = r#"{
            "info": {"name": "pkg", "classifiers": []},
            "releases": {
                "not-a-version": [
                    {"filename": "pkg-x-py3-none-any.whl", "yanked": false, "packagetype": "bdist_wheel"}
                ],
                "1.0.0": [
                    {"filename": "garbage.whl", "yanked": false, "packagetype": "bdist_wheel"},
                    {"filename": "pkg-1.0.0-py3-none-any.whl", "yanked": false, "packagetype": "bdist_wheel"}
                ]
            }
        }"#;

        let meta = parse_project_metadata("pkg", json.as_bytes()).unwrap();
        assert_eq!(meta.versions.len(), 1);
        assert_eq!(meta.versions[0].wheels.len(), 1);
        assert_eq!(
            meta.versions[0].wheels[0].filename,
            "pkg-1.0.0-py3-none-any.whl"
        );
    }

    #[test]
    fn test_parse_missing_releases_field() {
        let json = r#"{"info": {"name": "pkg", "classifiers": []}}"#;

        let meta = parse_project_metadata("pkg", json.as_bytes()).unwrap();
        assert!(meta.versions.is_empty());
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_project_metadata("pkg", b"not json").unwrap_err();
        assert!(matches!(err, PypiError::ApiResponse { .. }));
    }

    #[tokio::test]
    async fn test_get_project_success() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/requests/json")
            .with_status(200)
            .with_body(REQUESTS_JSON)
            .create_async()
            .await;

        let registry = PypiRegistry::with_base_url(HttpClient::default(), server.url());
        let meta = registry.get_project("requests").await.unwrap();

        assert_eq!(meta.name, "requests");
        assert_eq!(meta.versions.len(), 2);
    }

    #[tokio::test]
    async fn test_get_project_normalizes_name_in_url() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/typing-extensions/json")
            .with_status(200)
            .with_body(r#"{"info": {"name": "typing_extensions", "classifiers": []}, "releases": {}}"#)
            .create_async()
            .await;

        let registry = PypiRegistry::with_base_url(HttpClient::default(), server.url());
        let meta = registry.get_project("Typing_Extensions").await.unwrap();

        assert_eq!(meta.name, "typing_extensions");
    }

    #[tokio::test]
    async fn test_get_project_not_found() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/no-such-package/json")
            .with_status(404)
            .create_async()
            .await;

        let registry = PypiRegistry::with_base_url(HttpClient::default(), server.url());
        let err = registry.get_project("no-such-package").await.unwrap_err();

        assert!(matches!(err, PypiError::PackageNotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_project_server_error() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/flask/json")
            .with_status(500)
            .create_async()
            .await;

        let registry = PypiRegistry::with_base_url(HttpClient::default(), server.url());
        let err = registry.get_project("flask").await.unwrap_err();

        assert!(matches!(err, PypiError::Registry { .. }));
    }
}
