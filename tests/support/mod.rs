//! Fake CoinMarketCap and Binance endpoints served by axum on localhost.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// API key the fake provider accepts.
pub const TEST_KEY: &str = "test-key";

/// Canned responses. A `None` venue listing answers 500.
#[derive(Debug, Clone, Default)]
pub struct FakeMarket {
    /// Category records (the `data` array).
    pub categories: Vec<Value>,
    /// Coins per category id. Missing ids answer 500.
    pub members: HashMap<String, Vec<Value>>,
    pub spot: Option<Vec<Value>>,
    pub usd_margined: Option<Vec<Value>>,
    pub coin_margined: Option<Vec<Value>>,
    /// Serve an undecodable categories body.
    pub garbled_categories: bool,
}

/// Running fake server.
pub struct FakeServer {
    pub addr: SocketAddr,
}

impl FakeServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn venue_url(&self, market: &str) -> String {
        format!("http://{}/{market}/exchangeInfo", self.addr)
    }
}

/// Spawn the fake server on an ephemeral port.
pub async fn serve(market: FakeMarket) -> FakeServer {
    let app = Router::new()
        .route("/v1/cryptocurrency/categories", get(categories))
        .route("/v1/cryptocurrency/category", get(category))
        .route("/spot/exchangeInfo", get(spot))
        .route("/usdm/exchangeInfo", get(usd_margined))
        .route("/coinm/exchangeInfo", get(coin_margined))
        .with_state(Arc::new(market));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeServer { addr }
}

pub fn category_json(id: &str, name: &str, num_tokens: u32, market_cap: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "title": name,
        "description": format!("{name} tokens"),
        "num_tokens": num_tokens,
        "avg_price_change": 0.5,
        "market_cap": market_cap,
        "market_cap_change": 1.5,
        "volume": 5e8,
        "volume_change": -2.0,
    })
}

pub fn coin_json(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "name": symbol.to_lowercase(),
        "quote": {"USD": {"volume_24h": 1e6, "market_cap": 1e9}},
    })
}

pub fn symbol_json(base: &str, quote: &str) -> Value {
    json!({"symbol": format!("{base}{quote}"), "baseAsset": base, "quoteAsset": quote})
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("x-cmc_pro_api_key")
        .and_then(|v| v.to_str().ok())
        == Some(TEST_KEY)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"status": {"error_code": 1001, "error_message": "This API Key is invalid."}})),
    )
        .into_response()
}

async fn categories(State(market): State<Arc<FakeMarket>>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if market.garbled_categories {
        return (StatusCode::OK, "{\"data\": [{\"id\": 42").into_response();
    }
    Json(json!({
        "status": {"error_code": 0, "error_message": null, "credit_count": 1},
        "data": market.categories,
    }))
    .into_response()
}

async fn category(
    State(market): State<Arc<FakeMarket>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let limit: usize = query
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(100);
    if query.get("convert").map(String::as_str) != Some("USD") {
        return (StatusCode::BAD_REQUEST, "convert must be USD").into_response();
    }

    match query.get("id").and_then(|id| market.members.get(id)) {
        Some(coins) => {
            let coins: Vec<_> = coins.iter().take(limit).cloned().collect();
            Json(json!({
                "status": {"error_code": 0, "credit_count": 1},
                "data": {"id": query["id"], "num_tokens": coins.len(), "coins": coins},
            }))
            .into_response()
        }
        None => (StatusCode::INTERNAL_SERVER_ERROR, "category unavailable").into_response(),
    }
}

fn listing(symbols: Option<&Vec<Value>>) -> Response {
    match symbols {
        Some(symbols) => Json(json!({"timezone": "UTC", "symbols": symbols})).into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "exchange info unavailable").into_response(),
    }
}

async fn spot(State(market): State<Arc<FakeMarket>>) -> Response {
    listing(market.spot.as_ref())
}

async fn usd_margined(State(market): State<Arc<FakeMarket>>) -> Response {
    listing(market.usd_margined.as_ref())
}

async fn coin_margined(State(market): State<Arc<FakeMarket>>) -> Response {
    listing(market.coin_margined.as_ref())
}
