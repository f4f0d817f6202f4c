//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! HTTP clients. Each sub-module groups adapters by remote service.
//!
//! Adapter categories:
//! - `http`: Shared JSON GET client and error classification
//! - `coinmarketcap`: Category listings (market-data provider)
//! - `binance`: Exchange-info instrument listings (trading venue)

pub mod binance;
pub mod coinmarketcap;
pub mod http;
