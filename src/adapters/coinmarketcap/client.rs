//! CoinMarketCap HTTP Client - Category Listings
//!
//! Fetches the category list and the constituents of a single category.
//! Each call is one authenticated round trip; membership is capped at
//! the configured page size.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use super::auth::{ApiKey, API_KEY_HEADER};
use super::types::{ApiStatus, CategoriesResponse, CategoryDetailResponse};
use crate::adapters::http::{JsonClient, JsonClientConfig};
use crate::domain::category::{Category, CategoryMember};
use crate::error::FetchResult;
use crate::ports::category_source::CategorySource;

/// Configuration for the CoinMarketCap client.
#[derive(Debug, Clone)]
pub struct CoinMarketCapConfig {
  /// Base URL for the Pro API.
  pub base_url: String,
  /// Request timeout.
  pub timeout: Duration,
  /// Maximum constituents requested per category.
  pub member_limit: u32,
  /// Quote currency for member figures.
  pub convert: String,
}

impl Default for CoinMarketCapConfig {
  fn default() -> Self {
    Self {
      base_url: "https://pro-api.coinmarketcap.com".to_string(),
      timeout: Duration::from_secs(30),
      member_limit: 100,
      convert: "USD".to_string(),
    }
  }
}

/// CoinMarketCap Pro API client.
pub struct CoinMarketCapClient {
  /// Shared JSON client.
  http: JsonClient,
  /// API key sent with every request.
  api_key: ApiKey,
  /// Client configuration.
  config: CoinMarketCapConfig,
}

impl CoinMarketCapClient {
  /// Create a new client.
  pub fn new(api_key: ApiKey, config: CoinMarketCapConfig) -> FetchResult<Self> {
    let http = JsonClient::new(&JsonClientConfig {
      timeout: config.timeout,
      ..JsonClientConfig::default()
    })?;

    Ok(Self {
      http,
      api_key,
      config,
    })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  fn log_status(status: &ApiStatus, endpoint: &str) {
    if let Some(msg) = status.error_message.as_deref().filter(|m| !m.is_empty()) {
      warn!(endpoint, code = status.error_code, message = msg, "CoinMarketCap reported an error");
    }
    debug!(endpoint, credits = status.credit_count, "CoinMarketCap call complete");
  }
}

#[async_trait]
impl CategorySource for CoinMarketCapClient {
  #[instrument(skip(self))]
  async fn fetch_categories(&self) -> FetchResult<Vec<Category>> {
    let url = self.url("/v1/cryptocurrency/categories");
    let response: CategoriesResponse = self
      .http
      .get_json(&url, &[], &[(API_KEY_HEADER, self.api_key.expose())])
      .await?;

    Self::log_status(&response.status, "categories");
    let categories: Vec<Category> = response.data.into_iter().map(Category::from).collect();
    info!(count = categories.len(), "Categories fetched");
    Ok(categories)
  }

  #[instrument(skip(self))]
  async fn fetch_members(&self, category_id: &str) -> FetchResult<Vec<CategoryMember>> {
    let url = self.url("/v1/cryptocurrency/category");
    let limit = self.config.member_limit.to_string();
    let response: CategoryDetailResponse = self
      .http
      .get_json(
        &url,
        &[
          ("id", category_id),
          ("limit", limit.as_str()),
          ("convert", self.config.convert.as_str()),
        ],
        &[(API_KEY_HEADER, self.api_key.expose())],
      )
      .await?;

    Self::log_status(&response.status, "category");
    let convert = self.config.convert.as_str();
    let total = response.data.num_tokens;
    let members: Vec<CategoryMember> = response
      .data
      .coins
      .into_iter()
      .map(|coin| coin.into_member(convert))
      .collect();
    debug!(count = members.len(), total, "Category members fetched");
    Ok(members)
  }
}
