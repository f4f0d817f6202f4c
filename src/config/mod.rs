//! Configuration Module - TOML-based Scanner Configuration
//!
//! Loads and validates configuration from `config.toml`. A default copy
//! of that file is compiled into the binary, so the scanner runs with no
//! file present. Endpoints, page size, and the category allow-list all
//! live here; nothing is hardcoded in the domain layer.

pub mod loader;

use std::time::Duration;

use serde::Deserialize;

use crate::adapters::binance::BinanceEndpoints;
use crate::adapters::coinmarketcap::CoinMarketCapConfig;
use crate::domain::allow_list::AllowList;

/// Top-level scanner configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Application identity and logging.
  #[serde(default)]
  pub app: AppSection,
  /// Market-data provider API.
  #[serde(default)]
  pub api: ApiConfig,
  /// Trading venue endpoints.
  #[serde(default)]
  pub venue: VenueConfig,
  /// Category selection and failure handling.
  #[serde(default)]
  pub scan: ScanConfig,
  /// Allow-listed categories.
  #[serde(default)]
  pub categories: Vec<AllowedCategory>,
}

impl AppConfig {
  /// Immutable allow-list built from `[[categories]]`.
  pub fn allow_list(&self) -> AllowList {
    AllowList::from_pairs(
      self
        .categories
        .iter()
        .map(|c| (c.id.clone(), c.label.clone())),
    )
  }

  /// Provider client settings.
  pub fn coinmarketcap(&self) -> CoinMarketCapConfig {
    CoinMarketCapConfig {
      base_url: self.api.base_url.clone(),
      timeout: self.api.timeout(),
      member_limit: self.api.member_limit,
      convert: self.api.convert.clone(),
    }
  }

  /// Venue endpoints.
  pub fn binance_endpoints(&self) -> BinanceEndpoints {
    BinanceEndpoints {
      spot: self.venue.spot_url.clone(),
      usd_margined: self.venue.usd_margined_url.clone(),
      coin_margined: self.venue.coin_margined_url.clone(),
    }
  }
}

/// Application identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Log output format.
  #[serde(default)]
  pub log_format: LogFormat,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
      log_format: LogFormat::default(),
    }
  }
}

/// Log output format. Logs always go to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  /// Human-readable compact lines.
  #[default]
  Pretty,
  /// One JSON object per event.
  Json,
}

/// Market-data provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
  /// Pro API base URL.
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Environment variable holding the API key.
  #[serde(default = "default_api_key_env")]
  pub api_key_env: String,
  /// Request timeout in seconds.
  #[serde(default = "default_timeout")]
  pub timeout_seconds: u64,
  /// Constituents requested per category (provider page size).
  #[serde(default = "default_member_limit")]
  pub member_limit: u32,
  /// Quote currency for constituent figures.
  #[serde(default = "default_convert")]
  pub convert: String,
}

impl ApiConfig {
  /// Request timeout.
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_seconds)
  }
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: default_base_url(),
      api_key_env: default_api_key_env(),
      timeout_seconds: default_timeout(),
      member_limit: default_member_limit(),
      convert: default_convert(),
    }
  }
}

/// Trading venue endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueConfig {
  /// Spot exchange-info URL.
  #[serde(default = "default_spot_url")]
  pub spot_url: String,
  /// USD-margined futures exchange-info URL.
  #[serde(default = "default_usd_margined_url")]
  pub usd_margined_url: String,
  /// Coin-margined futures exchange-info URL.
  #[serde(default = "default_coin_margined_url")]
  pub coin_margined_url: String,
  /// Request timeout in seconds.
  #[serde(default = "default_timeout")]
  pub timeout_seconds: u64,
}

impl VenueConfig {
  /// Request timeout.
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_seconds)
  }
}

impl Default for VenueConfig {
  fn default() -> Self {
    Self {
      spot_url: default_spot_url(),
      usd_margined_url: default_usd_margined_url(),
      coin_margined_url: default_coin_margined_url(),
      timeout_seconds: default_timeout(),
    }
  }
}

/// Category selection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
  /// Case-insensitive name substrings that exclude a category.
  #[serde(default = "default_excluded_names")]
  pub exclude_name_substrings: Vec<String>,
  /// What to do when a category's constituents cannot be fetched.
  #[serde(default)]
  pub on_member_error: MemberErrorPolicy,
}

impl Default for ScanConfig {
  fn default() -> Self {
    Self {
      exclude_name_substrings: default_excluded_names(),
      on_member_error: MemberErrorPolicy::default(),
    }
  }
}

/// Handling of a failed constituent fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberErrorPolicy {
  /// Record the failure and continue with the remaining categories.
  #[default]
  Skip,
  /// Abort the scan on the first failure.
  Abort,
}

/// One allow-listed category.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowedCategory {
  /// Provider category identifier.
  pub id: String,
  /// Human-readable label.
  #[serde(default)]
  pub label: String,
}

// Default value functions for serde

fn default_name() -> String {
  "category-scanner".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_base_url() -> String {
  "https://pro-api.coinmarketcap.com".to_string()
}

fn default_api_key_env() -> String {
  "CMC_API_KEY".to_string()
}

fn default_timeout() -> u64 {
  30
}

fn default_member_limit() -> u32 {
  100
}

fn default_convert() -> String {
  "USD".to_string()
}

fn default_spot_url() -> String {
  BinanceEndpoints::default().spot
}

fn default_usd_margined_url() -> String {
  BinanceEndpoints::default().usd_margined
}

fn default_coin_margined_url() -> String {
  BinanceEndpoints::default().coin_margined
}

fn default_excluded_names() -> Vec<String> {
  vec!["portfolio".to_string()]
}
