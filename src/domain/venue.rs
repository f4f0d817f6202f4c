//! Trading venue markets and the set of tradable assets.
//!
//! The venue lists instruments per market type. Each instrument names a
//! base and a quote asset; which legs count as tradable assets depends
//! on the market (coin-margined contracts all settle against the same
//! quote currency, so only their base asset contributes).

use std::collections::HashSet;

/// Venue market types that contribute assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VenueMarket {
    /// Spot pairs.
    Spot,
    /// USD-margined perpetuals and futures.
    UsdMargined,
    /// Coin-margined perpetuals and futures.
    CoinMargined,
}

impl VenueMarket {
    /// All markets, in collection order.
    pub const ALL: [Self; 3] = [Self::Spot, Self::UsdMargined, Self::CoinMargined];

    /// Whether the quote leg of this market's instruments is a tradable asset.
    pub const fn includes_quote(self) -> bool {
        !matches!(self, Self::CoinMargined)
    }
}

impl std::fmt::Display for VenueMarket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spot => write!(f, "spot"),
            Self::UsdMargined => write!(f, "usd-margined"),
            Self::CoinMargined => write!(f, "coin-margined"),
        }
    }
}

/// One listed instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    /// Asset being priced.
    pub base_asset: String,
    /// Pricing currency.
    pub quote_asset: String,
}

impl Instrument {
    pub fn new(base_asset: impl Into<String>, quote_asset: impl Into<String>) -> Self {
        Self {
            base_asset: base_asset.into(),
            quote_asset: quote_asset.into(),
        }
    }
}

/// Assets a market's instruments contribute, per the market's inclusion rule.
pub fn extract_assets(market: VenueMarket, instruments: &[Instrument]) -> HashSet<String> {
    let mut assets = HashSet::with_capacity(instruments.len() * 2);
    for instrument in instruments {
        assets.insert(instrument.base_asset.clone());
        if market.includes_quote() {
            assets.insert(instrument.quote_asset.clone());
        }
    }
    assets
}

/// Symbols tradable on the venue across all collected markets.
///
/// Built once; read-only membership tests afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueAssetSet {
    symbols: HashSet<String>,
}

impl VenueAssetSet {
    /// Whether the symbol is tradable on the venue.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl FromIterator<String> for VenueAssetSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for VenueAssetSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}
