//! Instrument Source Port - Trading Venue Listings Interface
//!
//! Defines the trait for listing the instruments of one venue market.

use async_trait::async_trait;

use crate::domain::venue::{Instrument, VenueMarket};
use crate::error::FetchResult;

/// Trait for trading venues exposing per-market instrument listings.
#[async_trait]
pub trait InstrumentSource: Send + Sync + 'static {
  /// List the instruments currently defined on `market`.
  async fn fetch_instruments(&self, market: VenueMarket) -> FetchResult<Vec<Instrument>>;
}
