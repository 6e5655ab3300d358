//! Lending example: inspects pools, then supplies liquidity and borrows against collateral.
//!
//! Requires `PLATFORM_API_KEY` and a wallet id in `PLATFORM_WALLET_ID`.
//!
//! Run with tracing enabled:
//! ```sh
//! PLATFORM_WALLET_ID=wallet-1 RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example lending --features tracing
//! ```

use asset_platform_client::platform::types::request::{BorrowAssetInput, SupplyLiquidityInput};
use asset_platform_client::types::dec;
use asset_platform_client::{Client, Config};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::new(Config::from_env()?)?;
    let wallet_id = std::env::var("PLATFORM_WALLET_ID")?;

    let pools = client.pools().await.into_result()?;
    let Some(pool) = pools.first() else {
        info!(endpoint = "pools", "no lending pools configured");
        return Ok(());
    };

    info!(
        endpoint = "pools",
        count = pools.len(),
        id = %pool.id,
        name = %pool.name,
        supplied = %pool.total_supplied,
        borrowed = %pool.total_borrowed
    );

    let rates = client.pool_interest_rates(&pool.id).await;
    match rates.data() {
        Some(rates) => info!(
            endpoint = "pool_interest_rates",
            supply = %rates.supply_rate,
            borrow = %rates.borrow_rate,
            utilization = %rates.utilization_rate
        ),
        None => debug!(endpoint = "pool_interest_rates", error = ?rates.error()),
    }

    let supplied = client
        .supply_liquidity(
            SupplyLiquidityInput::builder()
                .pool_id(pool.id.clone())
                .wallet_id(wallet_id.clone())
                .amount(dec!(1000))
                .build(),
        )
        .await;
    match supplied.data().and_then(|r| r.as_supply_liquidity()) {
        Some(tx) => info!(endpoint = "supply_liquidity", id = %tx.id, amount = %tx.amount),
        None => debug!(endpoint = "supply_liquidity", error = ?supplied.error()),
    }

    let Some(collateral_asset_id) = pool.collateral_asset_ids.first() else {
        info!(endpoint = "pools", pool = %pool.id, "pool accepts no collateral");
        return Ok(());
    };

    let borrowed = client
        .borrow_asset(
            BorrowAssetInput::builder()
                .pool_id(pool.id.clone())
                .wallet_id(wallet_id.clone())
                .amount(dec!(250))
                .collateral_asset_id(collateral_asset_id.clone())
                .collateral_amount(dec!(0.01))
                .build(),
        )
        .await;
    match borrowed.data().and_then(|r| r.as_borrow_asset()) {
        Some(loan) => info!(
            endpoint = "borrow_asset",
            loan = %loan.id,
            principal = %loan.principal,
            rate = %loan.interest_rate,
            status = %loan.status
        ),
        None => debug!(endpoint = "borrow_asset", error = ?borrowed.error()),
    }

    let position = client.user_position(&pool.id, &wallet_id).await;
    match position.data() {
        Some(position) => info!(
            endpoint = "user_position",
            supplied = %position.supplied,
            borrowed = %position.borrowed,
            health_factor = ?position.health_factor
        ),
        None => debug!(endpoint = "user_position", error = ?position.error()),
    }

    Ok(())
}
