//! Markets example: health probe, market listings, order book and price history.
//!
//! Requires `PLATFORM_API_KEY`; `PLATFORM_API_URL` defaults to a local backend.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example markets --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=markets.log RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example markets --features tracing
//! ```

use std::fs::File;

use asset_platform_client::platform::types::request::{
    MarketFilter, OrderFilter, TimeSeriesFilter,
};
use asset_platform_client::platform::types::{Interval, MarketStatus, MarketType, OrderStatus};
use asset_platform_client::{Client, Config};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let client = Client::new(Config::from_env()?)?;

    match client.health().await {
        Ok(health) => info!(endpoint = "health", status = %health.status, timestamp = %health.timestamp),
        Err(e) => warn!(endpoint = "health", error = %e),
    }

    let filter = MarketFilter::builder()
        .market_type(MarketType::Spot)
        .status(MarketStatus::Active)
        .build();
    let markets = client.markets(&filter).await;

    let Some(market) = markets.data().and_then(|markets| {
        info!(endpoint = "markets", count = markets.len());
        markets.first()
    }) else {
        debug!(endpoint = "markets", error = ?markets.error());
        return Ok(());
    };

    info!(
        endpoint = "markets",
        id = %market.id,
        base = %market.base_asset_id,
        quote = %market.quote_asset_id,
        tick_size = ?market.tick_size
    );

    let orders = client
        .orders(
            &OrderFilter::builder()
                .market_id(market.id.clone())
                .status(OrderStatus::Open)
                .build(),
        )
        .await;
    match orders.data() {
        Some(orders) => {
            for order in orders {
                info!(
                    endpoint = "orders",
                    id = %order.id,
                    side = %order.side,
                    price = ?order.price,
                    quantity = %order.quantity,
                    filled = %order.filled_quantity
                );
            }
        }
        None => debug!(endpoint = "orders", error = ?orders.error()),
    }

    let candles = client
        .time_series(
            &TimeSeriesFilter::builder()
                .market_id(market.id.clone())
                .interval(Interval::OneHour)
                .build(),
        )
        .await;
    match candles.data() {
        Some(candles) => {
            for candle in candles {
                info!(
                    endpoint = "time_series",
                    timestamp = %candle.timestamp,
                    open = %candle.open,
                    high = %candle.high,
                    low = %candle.low,
                    close = %candle.close,
                    volume = %candle.volume
                );
            }
        }
        None => debug!(endpoint = "time_series", error = ?candles.error()),
    }

    Ok(())
}
