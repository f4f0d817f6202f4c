//! Venue Collector - Tradable Asset Set Assembly
//!
//! Fetches the instrument listings of every configured venue market and
//! unions their assets into one `VenueAssetSet`:
//! - Spot and USD-margined markets contribute base and quote assets
//! - Coin-margined markets contribute base assets only
//!
//! Markets are fetched concurrently and are failure-isolated: a market
//! that cannot be fetched is logged and contributes nothing.

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{info, instrument, warn};

use crate::domain::venue::{extract_assets, VenueAssetSet, VenueMarket};
use crate::ports::instrument_source::InstrumentSource;

/// Result of fetching one market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
  /// Market fetched; number of distinct assets it contributed.
  Collected(usize),
  /// Market skipped after a fetch failure.
  Failed(String),
}

/// Assets collected across markets, with per-market outcomes.
#[derive(Debug, Clone, Default)]
pub struct VenueCollection {
  /// Union of every successful market's assets.
  pub assets: VenueAssetSet,
  /// Outcome per market, in configured order.
  pub outcomes: Vec<(VenueMarket, SourceOutcome)>,
}

impl VenueCollection {
  /// Number of markets that failed.
  pub fn failed_markets(&self) -> usize {
    self
      .outcomes
      .iter()
      .filter(|(_, o)| matches!(o, SourceOutcome::Failed(_)))
      .count()
  }
}

/// Collects the venue asset set from an instrument source.
pub struct VenueCollector<S: InstrumentSource> {
  /// Instrument listings port.
  source: Arc<S>,
  /// Markets to collect.
  markets: Vec<VenueMarket>,
}

impl<S: InstrumentSource> VenueCollector<S> {
  /// Collector over all venue markets.
  pub fn new(source: Arc<S>) -> Self {
    Self::with_markets(source, VenueMarket::ALL.to_vec())
  }

  /// Collector over a chosen subset of markets.
  pub fn with_markets(source: Arc<S>, markets: Vec<VenueMarket>) -> Self {
    Self { source, markets }
  }

  /// Fetch every market and union the results. Never fails.
  #[instrument(skip(self), fields(markets = self.markets.len()))]
  pub async fn collect(&self) -> VenueCollection {
    let fetches = self.markets.iter().map(|&market| {
      let source = Arc::clone(&self.source);
      async move { (market, source.fetch_instruments(market).await) }
    });

    let mut symbols = HashSet::new();
    let mut outcomes = Vec::with_capacity(self.markets.len());

    for (market, result) in join_all(fetches).await {
      match result {
        Ok(instruments) => {
          let assets = extract_assets(market, &instruments);
          info!(
            market = %market,
            instruments = instruments.len(),
            assets = assets.len(),
            "Venue market collected"
          );
          outcomes.push((market, SourceOutcome::Collected(assets.len())));
          symbols.extend(assets);
        }
        Err(e) => {
          warn!(market = %market, error = %e, "Venue market fetch failed, skipping");
          outcomes.push((market, SourceOutcome::Failed(e.to_string())));
        }
      }
    }

    let assets: VenueAssetSet = symbols.into_iter().collect();
    info!(assets = assets.len(), "Venue asset set assembled");

    VenueCollection { assets, outcomes }
  }
}
