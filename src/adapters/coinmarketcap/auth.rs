//! CoinMarketCap Authentication — Static API Key
//!
//! The Pro API authenticates every request with a single key sent in the
//! `X-CMC_PRO_API_KEY` header. The key comes from an environment variable
//! (default `CMC_API_KEY`) and is never logged.

use std::fmt;

use crate::error::ConfigError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// CoinMarketCap Pro API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
  /// Wrap a key value.
  pub fn new(key: impl Into<String>) -> Self {
    Self(key.into())
  }

  /// Load the key from the named environment variable.
  ///
  /// An unset or blank variable is a configuration error.
  pub fn from_env(var: &str) -> Result<Self, ConfigError> {
    Self::from_value(var, std::env::var(var).ok())
  }

  fn from_value(var: &str, value: Option<String>) -> Result<Self, ConfigError> {
    match value {
      Some(key) if !key.trim().is_empty() => Ok(Self(key.trim().to_string())),
      _ => Err(ConfigError::MissingCredential(var.to_string())),
    }
  }

  /// Raw key for request headers.
  pub fn expose(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for ApiKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("ApiKey(***)")
  }
}
