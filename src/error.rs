//! Error types shared by the ports and adapters.
//!
//! Fetch failures are classified the same way for every remote source
//! (transport, non-success status, undecodable body) so the use cases
//! can decide fatality without inspecting transport details.

use thiserror::Error;

use crate::domain::report::ScanReport;

/// Failure while fetching a remote resource.
#[derive(Debug, Error)]
pub enum FetchError {
  /// The HTTP client could not be constructed.
  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  /// Network-level failure (connect, timeout, body read).
  #[error("request to {url} failed: {source}")]
  Transport {
    /// Requested URL.
    url: String,
    /// Underlying reqwest error.
    #[source]
    source: reqwest::Error,
  },

  /// The endpoint answered with a non-success status.
  #[error("unexpected status {status} from {url}: {body}")]
  Status {
    /// Requested URL.
    url: String,
    /// HTTP status code.
    status: u16,
    /// Response body, as text.
    body: String,
  },

  /// The body did not match the expected shape.
  #[error("failed to decode response from {url}: {source}")]
  Decode {
    /// Requested URL.
    url: String,
    /// Underlying JSON error.
    #[source]
    source: serde_json::Error,
  },
}

impl FetchError {
  /// HTTP status code, when the failure came from a response.
  pub fn status(&self) -> Option<u16> {
    match self {
      Self::Status { status, .. } => Some(*status),
      _ => None,
    }
  }
}

/// Configuration failure detected before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// The API key environment variable is unset or blank.
  #[error("{0} environment variable is not set")]
  MissingCredential(String),
}

/// Fatal failure of a category scan.
#[derive(Debug, Error)]
pub enum ScanError {
  /// The category list could not be fetched.
  #[error("failed to fetch categories")]
  Categories(#[source] FetchError),

  /// A category's constituents could not be fetched and the scan aborts.
  #[error("failed to fetch members of category {id}")]
  Members {
    /// Category identifier.
    id: String,
    #[source]
    source: FetchError,
    /// Blocks reconciled before the failing category, in report order.
    completed: Box<ScanReport>,
  },
}

impl ScanError {
  /// Report blocks finished before the scan aborted, if any were.
  pub fn completed(&self) -> Option<&ScanReport> {
    match self {
      Self::Members { completed, .. } => Some(&**completed),
      Self::Categories(_) => None,
    }
  }
}

/// Result alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
