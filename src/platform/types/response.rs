//! Entity records returned by the platform API.
//!
//! These are plain snapshots of server-side state; the client never caches or mutates them.

use bon::Builder;
use serde::Deserialize;
use serde_with::serde_as;

use super::{
    AccountType, Interval, LoanStatus, MarketStatus, MarketType, OrderSide, OrderStatus,
    OrderType, PoolTransactionType,
};
use crate::serde_helpers::StringFromAny;
use crate::types::{DateTime, Decimal, Utc};

/// A platform account, linked to an identity held by an external system.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Account {
    pub id: String,
    /// Identifier of the account in the linked external system.
    pub linked_account_id: String,
    pub account_type: AccountType,
    #[serde(default)]
    #[builder(default)]
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A wallet owned by an account.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Wallet {
    pub id: String,
    pub account_id: String,
    /// On-chain address, when the wallet has one.
    pub address: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub balances: Vec<WalletBalance>,
    pub created_at: DateTime<Utc>,
}

/// Holdings of one asset inside a wallet.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct WalletBalance {
    pub asset_id: String,
    pub available: Decimal,
    #[serde(default)]
    #[builder(default)]
    pub locked: Decimal,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Free-form classification (e.g. `crypto`, `stablecoin`, `tokenized_security`).
    pub asset_type: Option<String>,
    /// Token identifier assigned when the asset is registered.
    pub token_id: Option<String>,
    /// Identifier of the party managing the asset.
    pub manager_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A trading pair.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Market {
    pub id: String,
    pub base_asset_id: String,
    pub quote_asset_id: String,
    pub market_type: MarketType,
    pub status: MarketStatus,
    /// Regulatory regime the market operates under, if any.
    pub regulation: Option<String>,
    pub tick_size: Option<Decimal>,
    pub min_order_size: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Order {
    pub id: String,
    pub wallet_id: String,
    pub market_id: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub status: OrderStatus,
    /// Limit price. Absent for market orders.
    pub price: Option<Decimal>,
    pub quantity: Decimal,
    #[serde(default)]
    #[builder(default)]
    pub filled_quantity: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One OHLCV candle of a market's price history.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct TimeSeriesRecord {
    pub id: String,
    pub market_id: String,
    pub asset_id: Option<String>,
    pub interval: Interval,
    /// Source of the price data.
    pub provider: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    #[serde(default)]
    #[builder(default)]
    pub volume: Decimal,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct LendingPool {
    pub id: String,
    pub name: String,
    /// Contract address of the pool, when deployed on-chain.
    pub address: Option<String>,
    /// Asset supplied to and borrowed from the pool.
    pub asset_id: String,
    #[serde(default)]
    #[builder(default)]
    pub collateral_asset_ids: Vec<String>,
    pub total_supplied: Decimal,
    pub total_borrowed: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Point-in-time view of a pool's balances and rates.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct PoolSnapshot {
    pub pool_id: String,
    pub total_supplied: Decimal,
    pub total_borrowed: Decimal,
    pub available_liquidity: Decimal,
    pub utilization_rate: Decimal,
    pub supply_rate: Decimal,
    pub borrow_rate: Decimal,
    pub timestamp: DateTime<Utc>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct PoolTransaction {
    pub id: String,
    pub pool_id: String,
    pub wallet_id: String,
    pub transaction_type: PoolTransactionType,
    pub asset_id: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct PoolInterestRates {
    pub pool_id: String,
    pub supply_rate: Decimal,
    pub borrow_rate: Decimal,
    pub utilization_rate: Decimal,
    /// Borrow rate at zero utilization.
    pub base_rate: Option<Decimal>,
    /// Utilization above which the borrow rate curve steepens.
    pub optimal_utilization: Option<Decimal>,
}

/// Collateral parameters of a pool.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct PoolCollateralInfo {
    pub pool_id: String,
    #[serde(default)]
    #[builder(default)]
    pub collateral_asset_ids: Vec<String>,
    /// Share of collateral value that may be borrowed against.
    pub collateral_factor: Decimal,
    /// Loan-to-value ratio at which positions become liquidatable.
    pub liquidation_threshold: Decimal,
    pub liquidation_penalty: Decimal,
    #[serde(default)]
    #[builder(default)]
    pub total_collateral: Decimal,
}

/// Aggregate activity figures for a pool.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct PoolStatistics {
    pub pool_id: String,
    pub total_supplied: Decimal,
    pub total_borrowed: Decimal,
    pub utilization_rate: Decimal,
    #[serde(default)]
    #[builder(default)]
    pub active_loans: u64,
    #[serde(default)]
    #[builder(default)]
    pub suppliers: u64,
    #[serde(default)]
    #[builder(default)]
    pub borrowers: u64,
}

/// A wallet's standing in one pool.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct UserPosition {
    pub pool_id: String,
    pub wallet_id: String,
    pub supplied: Decimal,
    pub borrowed: Decimal,
    #[serde(default)]
    #[builder(default)]
    pub collateral: Decimal,
    /// Ratio of liquidation-adjusted collateral to debt. Absent when nothing is borrowed.
    pub health_factor: Option<Decimal>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Loan {
    pub id: String,
    pub pool_id: String,
    pub wallet_id: String,
    pub borrowed_asset_id: String,
    pub collateral_asset_id: String,
    pub principal: Decimal,
    pub collateral_amount: Decimal,
    pub interest_rate: Decimal,
    /// Principal plus accrued interest still owed.
    pub outstanding: Decimal,
    pub status: LoanStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct LoanRepayment {
    pub id: String,
    pub loan_id: String,
    pub amount: Decimal,
    #[serde(default)]
    #[builder(default)]
    pub interest_paid: Decimal,
    pub created_at: DateTime<Utc>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct LoanLiquidation {
    pub id: String,
    pub loan_id: String,
    pub liquidator_wallet_id: Option<String>,
    pub collateral_seized: Decimal,
    pub debt_covered: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Liveness probe result. The timestamp is kept as the backend sent it.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct HealthResponse {
    pub status: String,
    #[serde_as(as = "StringFromAny")]
    pub timestamp: String,
}

/// Result of a faucet airdrop into an account.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct FaucetResponse {
    pub account_id: String,
    pub asset_id: String,
    pub amount: Decimal,
    /// Wallet credited with the airdrop.
    pub wallet_id: Option<String>,
}
