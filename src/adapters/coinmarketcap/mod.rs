//! CoinMarketCap API Adapter
//!
//! Implements `CategorySource` against the CoinMarketCap Pro REST API.
//!
//! Sub-modules:
//! - `auth`: API key loading and header injection
//! - `client`: Category and category-membership requests
//! - `types`: API response type definitions

pub mod auth;
pub mod client;
pub mod types;

pub use auth::ApiKey;
pub use client::{CoinMarketCapClient, CoinMarketCapConfig};
