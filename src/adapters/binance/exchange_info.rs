//! Binance Exchange Info - Listed Instruments per Market
//!
//! Each market exposes an unauthenticated `exchangeInfo` endpoint whose
//! `symbols` array names the base and quote asset of every instrument.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::adapters::http::{JsonClient, JsonClientConfig};
use crate::domain::venue::{Instrument, VenueMarket};
use crate::error::FetchResult;
use crate::ports::instrument_source::InstrumentSource;

/// Exchange-info endpoint per market.
#[derive(Debug, Clone)]
pub struct BinanceEndpoints {
    pub spot: String,
    pub usd_margined: String,
    pub coin_margined: String,
}

impl Default for BinanceEndpoints {
    fn default() -> Self {
        Self {
            spot: "https://api.binance.com/api/v3/exchangeInfo".to_string(),
            usd_margined: "https://fapi.binance.com/fapi/v1/exchangeInfo".to_string(),
            coin_margined: "https://dapi.binance.com/dapi/v1/exchangeInfo".to_string(),
        }
    }
}

impl BinanceEndpoints {
    /// Endpoint serving `market`.
    pub fn for_market(&self, market: VenueMarket) -> &str {
        match market {
            VenueMarket::Spot => &self.spot,
            VenueMarket::UsdMargined => &self.usd_margined,
            VenueMarket::CoinMargined => &self.coin_margined,
        }
    }
}

/// `exchangeInfo` response (only the fields we read).
#[derive(Debug, Deserialize)]
struct ExchangeInfo {
    symbols: Vec<SymbolInfo>,
}

/// One listed symbol.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymbolInfo {
    base_asset: String,
    quote_asset: String,
}

/// Binance instrument listings client.
pub struct BinanceExchangeInfo {
    /// Shared JSON client.
    http: JsonClient,
    /// Endpoint per market.
    endpoints: BinanceEndpoints,
}

impl BinanceExchangeInfo {
    /// Create a new client.
    pub fn new(endpoints: BinanceEndpoints, timeout: Duration) -> FetchResult<Self> {
        let http = JsonClient::new(&JsonClientConfig {
            timeout,
            ..JsonClientConfig::default()
        })?;
        Ok(Self { http, endpoints })
    }
}

#[async_trait]
impl InstrumentSource for BinanceExchangeInfo {
    #[instrument(skip_all, fields(market = %market))]
    async fn fetch_instruments(&self, market: VenueMarket) -> FetchResult<Vec<Instrument>> {
        let url = self.endpoints.for_market(market);
        let info: ExchangeInfo = self.http.get_json(url, &[], &[]).await?;

        debug!(symbols = info.symbols.len(), "Exchange info fetched");
        Ok(info
            .symbols
            .into_iter()
            .map(|s| Instrument::new(s.base_asset, s.quote_asset))
            .collect())
    }
}
