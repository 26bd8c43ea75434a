use crate::error::{CoreError, Result};
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("pyready/", env!("CARGO_PKG_VERSION"));

/// Validates that a URL uses HTTPS.
///
/// Plain HTTP is accepted only for loopback hosts, so tests can point the
/// client at a local mock server.
#[inline]
fn ensure_https(url: &str) -> Result<()> {
    if url.starts_with("https://")
        || url.starts_with("http://127.0.0.1")
        || url.starts_with("http://localhost")
    {
        Ok(())
    } else {
        Err(CoreError::InsecureUrl(url.to_string()))
    }
}

/// Thin wrapper over a pooled `reqwest::Client`.
///
/// One instance is shared across all lookups in a run; reqwest reuses
/// connections internally, which is the only caching this tool does.
///
/// # Examples
///
/// ```no_run
/// use ready_core::HttpClient;
///
/// # async fn example() -> ready_core::error::Result<()> {
/// let client = HttpClient::default();
/// let body = client.get_bytes("https://pypi.org/pypi/requests/json").await?;
/// println!("fetched {} bytes", body.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    /// Fetches a URL and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InsecureUrl` for non-HTTPS, non-loopback URLs,
    /// `CoreError::Status` for non-2xx responses, and `CoreError::Request`
    /// for network failures and timeouts.
    pub async fn get_bytes(&self, url: &str) -> Result<Bytes> {
        ensure_https(url)?;
        tracing::debug!("GET {}", url);

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|e| CoreError::Request {
                    url: url.to_string(),
                    source: e,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.bytes().await.map_err(|e| CoreError::Request {
            url: url.to_string(),
            source: e,
        })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}
