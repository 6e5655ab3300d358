#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Helpers are shared by several test binaries that each use a subset"
)]

use std::time::Duration;

use asset_platform_client::{Client, Config};
use httpmock::MockServer;
use serde_json::{Value, json};

pub const API_KEY: &str = "test-api-key";
pub const BEARER: &str = "Bearer test-api-key";
pub const TUNNEL_BYPASS_HEADER: &str = "ngrok-skip-browser-warning";
pub const CREATED_AT: &str = "2026-03-01T09:30:00Z";

#[must_use]
pub fn client(server: &MockServer) -> Client {
    client_with_timeout(server, Duration::from_secs(5))
}

#[must_use]
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> Client {
    let config = Config::builder()
        .base_url(server.base_url())
        .api_key(API_KEY.to_owned())
        .timeout(timeout)
        .build();

    Client::new(config).unwrap()
}

/// Wraps `data` in a successful envelope.
#[must_use]
pub fn ok(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

/// A failed envelope with `error`.
#[must_use]
pub fn failure(error: &str) -> Value {
    json!({ "success": false, "error": error })
}

#[must_use]
pub fn account_json(id: &str) -> Value {
    json!({
        "id": id,
        "linked_account_id": "user-42",
        "account_type": "retail",
        "verified": true,
        "created_at": CREATED_AT,
        "updated_at": null
    })
}

#[must_use]
pub fn wallet_json(id: &str) -> Value {
    json!({
        "id": id,
        "account_id": "acc-1",
        "address": "0x56687bf447db6ffa42ffe2204a05edaa20f55839",
        "balances": [
            { "asset_id": "usdc", "available": "1500.25", "locked": "100" }
        ],
        "created_at": CREATED_AT
    })
}

#[must_use]
pub fn market_json(id: &str) -> Value {
    json!({
        "id": id,
        "base_asset_id": "btc",
        "quote_asset_id": "usdc",
        "market_type": "spot",
        "status": "active",
        "regulation": null,
        "tick_size": "0.01",
        "min_order_size": "0.0001",
        "created_at": CREATED_AT
    })
}

#[must_use]
pub fn order_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "wallet_id": "wallet-1",
        "market_id": "btc-usdc",
        "side": "buy",
        "order_type": "limit",
        "status": status,
        "price": "64000",
        "quantity": "0.25",
        "filled_quantity": "0",
        "created_at": CREATED_AT
    })
}

#[must_use]
pub fn pool_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "usdc-main",
        "address": "0x9c4e1703476e875070ee25b56a58b008cfb8fa78",
        "asset_id": "usdc",
        "collateral_asset_ids": ["btc", "eth"],
        "total_supplied": "1000000",
        "total_borrowed": "250000",
        "created_at": CREATED_AT
    })
}

#[must_use]
pub fn loan_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "pool_id": "pool-1",
        "wallet_id": "wallet-1",
        "borrowed_asset_id": "usdc",
        "collateral_asset_id": "btc",
        "principal": "5000",
        "collateral_amount": "0.2",
        "interest_rate": "0.045",
        "outstanding": "5012.5",
        "status": status,
        "created_at": CREATED_AT
    })
}
