//! Category Source Port - Market-data Provider Interface
//!
//! Defines the trait for listing provider categories and fetching the
//! constituents of a single category.

use async_trait::async_trait;

use crate::domain::category::{Category, CategoryMember};
use crate::error::FetchResult;

/// Trait for market-data providers that group assets into categories.
///
/// Implementors perform one round trip per call. Any transport, status,
/// or decode failure is returned as a `FetchError`; deciding whether it
/// is fatal is left to the caller.
#[async_trait]
pub trait CategorySource: Send + Sync + 'static {
  /// List every category with its aggregate statistics.
  async fn fetch_categories(&self) -> FetchResult<Vec<Category>>;

  /// List the constituents of one category, in provider order.
  ///
  /// The result is capped at the implementor's page size.
  async fn fetch_members(&self, category_id: &str) -> FetchResult<Vec<CategoryMember>>;
}
