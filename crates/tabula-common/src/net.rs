//! Source loading for Tabula.
//!
//! Provides a simple blocking HTTP GET wrapper and a local-file fallback used
//! by the CLI to obtain the markup that holds the table.
//!
//! Retry and backoff are deliberately absent: a failed request is reported to
//! the caller as a [`FetchError`].
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// User-Agent header sent with all requests.
///
/// Mimics a common desktop browser to avoid basic bot detection.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while acquiring the raw markup.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or timed out.
    #[error("request to {url} failed: {source}")]
    Request {
        /// URL that was requested.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP error {status} from {url}")]
    Status {
        /// URL that was requested.
        url: String,
        /// Status code returned by the server.
        status: reqwest::StatusCode,
    },

    /// The response body could not be decoded as text.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// URL that was requested.
        url: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },

    /// A local source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    File {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Returns true when `source` should be fetched over the network.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch a URL and return its body as text.
///
/// # Errors
///
/// Returns a [`FetchError`] if the HTTP client cannot be created, the request
/// fails, the response has a non-success status, or the body cannot be decoded.
pub fn fetch_text(url: &str) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(FetchError::Client)?;

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.text().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}

/// Load markup from an `http://`/`https://` URL or a local file path.
///
/// # Errors
///
/// Returns a [`FetchError`] if the remote fetch fails or the file cannot be
/// read.
pub fn load_source(source: &str) -> Result<String, FetchError> {
    if is_remote(source) {
        return fetch_text(source);
    }
    std::fs::read_to_string(source).map_err(|source_err| FetchError::File {
        path: PathBuf::from(source),
        source: source_err,
    })
}
