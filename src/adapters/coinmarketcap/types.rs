//! CoinMarketCap API Response Types
//!
//! Wire shapes for the category endpoints. Descriptive and numeric fields
//! are optional because the API returns `null` for sparsely populated
//! categories and coins; conversion into domain types maps missing values
//! to empty strings and zero.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::category::{Category, CategoryMember};

/// Status block present on every Pro API response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiStatus {
  /// Zero on success.
  #[serde(default)]
  pub error_code: i64,
  /// Error message if any.
  pub error_message: Option<String>,
  /// API credits consumed by the call.
  pub credit_count: Option<u32>,
}

/// `GET /v1/cryptocurrency/categories` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
  #[serde(default)]
  pub status: ApiStatus,
  pub data: Vec<CategoryRecord>,
}

/// One category entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
  pub id: String,
  pub name: Option<String>,
  pub title: Option<String>,
  pub description: Option<String>,
  pub num_tokens: Option<u32>,
  pub avg_price_change: Option<f64>,
  pub market_cap: Option<f64>,
  pub market_cap_change: Option<f64>,
  pub volume: Option<f64>,
  pub volume_change: Option<f64>,
}

impl From<CategoryRecord> for Category {
  fn from(r: CategoryRecord) -> Self {
    Self {
      id: r.id,
      name: r.name.unwrap_or_default(),
      title: r.title.unwrap_or_default(),
      description: r.description.unwrap_or_default(),
      num_tokens: r.num_tokens.unwrap_or_default(),
      avg_price_change: r.avg_price_change.unwrap_or_default(),
      market_cap: r.market_cap.unwrap_or_default(),
      market_cap_change: r.market_cap_change.unwrap_or_default(),
      volume: r.volume.unwrap_or_default(),
      volume_change: r.volume_change.unwrap_or_default(),
    }
  }
}

/// `GET /v1/cryptocurrency/category` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDetailResponse {
  #[serde(default)]
  pub status: ApiStatus,
  pub data: CategoryDetail,
}

/// Category detail with its constituents.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDetail {
  /// Total constituents, which may exceed the page returned in `coins`.
  pub num_tokens: Option<u32>,
  #[serde(default)]
  pub coins: Vec<CoinRecord>,
}

/// One constituent coin.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinRecord {
  pub symbol: Option<String>,
  pub name: Option<String>,
  /// Quotes keyed by convert currency (e.g. `USD`).
  pub quote: Option<HashMap<String, CoinQuote>>,
}

/// Market figures in one convert currency.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinQuote {
  pub volume_24h: Option<f64>,
  pub market_cap: Option<f64>,
}

impl CoinRecord {
  /// Convert to a domain member using the quote for `convert`.
  pub fn into_member(self, convert: &str) -> CategoryMember {
    let quote = self
      .quote
      .and_then(|mut quotes| quotes.remove(convert))
      .unwrap_or_default();
    CategoryMember {
      symbol: self.symbol.unwrap_or_default(),
      name: self.name.unwrap_or_default(),
      volume_24h: quote.volume_24h.unwrap_or_default(),
      market_cap: quote.market_cap.unwrap_or_default(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_categories_deserialization_with_nulls() {
    let json = r#"{
      "status": {"error_code": 0, "error_message": null, "credit_count": 1},
      "data": [{
        "id": "618c0beeb7dd913155b462f9",
        "name": "Ethereum Ecosystem",
        "title": "Ethereum Ecosystem",
        "description": "Ethereum Ecosystem",
        "num_tokens": 3411,
        "avg_price_change": -1.2,
        "market_cap": 412000000000.5,
        "market_cap_change": 0.8,
        "volume": null,
        "volume_change": null,
        "last_updated": "2025-03-01T00:00:00.000Z"
      }]
    }"#;
    let resp: CategoriesResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.status.credit_count, Some(1));
    let category: Category = resp.data.into_iter().next().unwrap().into();
    assert_eq!(category.num_tokens, 3411);
    assert!((category.market_cap - 412_000_000_000.5).abs() < 1e-3);
    assert_eq!(category.volume, 0.0);
  }

  #[test]
  fn test_category_detail_members() {
    let json = r#"{
      "data": {
        "id": "x",
        "num_tokens": 2,
        "coins": [
          {"symbol": "ETH", "name": "Ethereum",
           "quote": {"USD": {"volume_24h": 1.5e10, "market_cap": 4.0e11}}},
          {"symbol": "FOO", "name": "Foo", "quote": {}}
        ]
      }
    }"#;
    let resp: CategoryDetailResponse = serde_json::from_str(json).unwrap();
    let members: Vec<_> = resp
      .data
      .coins
      .into_iter()
      .map(|c| c.into_member("USD"))
      .collect();
    assert_eq!(members[0].symbol, "ETH");
    assert!((members[0].market_cap - 4.0e11).abs() < 1.0);
    assert_eq!(members[1].volume_24h, 0.0);
  }

  #[test]
  fn test_null_strings_decode_as_empty() {
    let json = r#"{
      "data": [
        {"id": "a", "name": "A", "title": null, "description": null, "num_tokens": 4},
        {"id": "b", "name": null, "num_tokens": 1}
      ]
    }"#;
    let resp: CategoriesResponse = serde_json::from_str(json).unwrap();
    let categories: Vec<Category> = resp.data.into_iter().map(Category::from).collect();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].title, "");
    assert_eq!(categories[0].description, "");
    assert_eq!(categories[0].num_tokens, 4);
    assert_eq!(categories[1].name, "");
  }

  #[test]
  fn test_coin_with_null_name_still_decodes() {
    let json = r#"{"data": {"num_tokens": 2, "coins": [
      {"symbol": "ETH", "name": null, "quote": {"USD": {"volume_24h": null, "market_cap": 1.0}}},
      {"symbol": null, "name": "Unknown", "quote": null}
    ]}}"#;
    let resp: CategoryDetailResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.data.num_tokens, Some(2));
    let members: Vec<_> = resp
      .data
      .coins
      .into_iter()
      .map(|c| c.into_member("USD"))
      .collect();
    assert_eq!(members[0].symbol, "ETH");
    assert_eq!(members[0].name, "");
    assert_eq!(members[1].symbol, "");
  }
}
