//! Binance Exchange-info Adapter
//!
//! Implements `InstrumentSource` against Binance's public exchange-info
//! endpoints for spot, USD-margined, and coin-margined markets.

pub mod exchange_info;

pub use exchange_info::{BinanceExchangeInfo, BinanceEndpoints};
