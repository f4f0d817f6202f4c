//! JSON HTTP Client - Shared GET-and-decode Helper
//!
//! Wraps reqwest with a request timeout and a single error taxonomy:
//! transport failure, non-success status, and body decode failure are
//! reported as distinct `FetchError` variants. No retries.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::{FetchError, FetchResult};

/// Configuration for the JSON HTTP client.
#[derive(Debug, Clone)]
pub struct JsonClientConfig {
  /// Request timeout.
  pub timeout: Duration,
  /// User agent sent with every request.
  pub user_agent: String,
}

impl Default for JsonClientConfig {
  fn default() -> Self {
    Self {
      timeout: Duration::from_secs(30),
      user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
    }
  }
}

/// GET-only JSON client shared by the provider and venue adapters.
#[derive(Debug, Clone)]
pub struct JsonClient {
  /// Underlying HTTP client (connection pool).
  http: Client,
}

impl JsonClient {
  /// Create a new client.
  pub fn new(config: &JsonClientConfig) -> FetchResult<Self> {
    let http = Client::builder()
      .timeout(config.timeout)
      .user_agent(config.user_agent.as_str())
      .pool_max_idle_per_host(5)
      .build()
      .map_err(FetchError::Client)?;

    Ok(Self { http })
  }

  /// GET `url` with query parameters and extra headers, and decode the
  /// JSON body into `T`.
  ///
  /// `Accept: application/json` is always sent.
  #[instrument(skip_all, fields(url = %url))]
  pub async fn get_json<T: DeserializeOwned>(
    &self,
    url: &str,
    query: &[(&str, &str)],
    headers: &[(&str, &str)],
  ) -> FetchResult<T> {
    let mut request = self
      .http
      .get(url)
      .query(query)
      .header(ACCEPT, "application/json");
    for (name, value) in headers {
      request = request.header(*name, *value);
    }

    let response = request.send().await.map_err(|source| FetchError::Transport {
      url: url.to_string(),
      source,
    })?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(FetchError::Status {
        url: url.to_string(),
        status: status.as_u16(),
        body,
      });
    }

    let body = response.text().await.map_err(|source| FetchError::Transport {
      url: url.to_string(),
      source,
    })?;
    debug!(bytes = body.len(), "Response received");

    serde_json::from_str(&body).map_err(|source| FetchError::Decode {
      url: url.to_string(),
      source,
    })
  }
}
