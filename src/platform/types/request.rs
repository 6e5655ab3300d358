//! Query filters and mutation inputs for the platform API.
//!
//! Filters serialize into query strings through [`crate::ToQueryParams`]: only fields that are
//! set are sent, in the order they are declared here. Mutation inputs are the flat payloads
//! carried inside a [`super::mutation::MutationAction`].

#![allow(
    clippy::module_name_repetitions,
    reason = "Input and Filter suffixes are intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use super::{AccountType, Interval, MarketStatus, MarketType, OrderSide, OrderStatus, OrderType};
use crate::serde_helpers::serialize_blank;
use crate::types::{DateTime, Decimal, Utc};

/// Query parameters for the `/markets` listing.
///
/// # Example
///
/// ```
/// use asset_platform_client::ToQueryParams as _;
/// use asset_platform_client::platform::types::request::MarketFilter;
/// use asset_platform_client::platform::types::{MarketStatus, MarketType};
///
/// let filter = MarketFilter::builder()
///     .market_type(MarketType::Spot)
///     .status(MarketStatus::Active)
///     .build();
///
/// assert_eq!(filter.query_params(), "?market_type=spot&status=active");
/// ```
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Builder, Serialize)]
pub struct MarketFilter {
    pub market_type: Option<MarketType>,
    pub status: Option<MarketStatus>,
    #[builder(into)]
    pub regulation: Option<String>,
}

/// Query parameters for the `/orders` listing.
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Builder, Serialize)]
pub struct OrderFilter {
    #[builder(into)]
    pub wallet_id: Option<String>,
    #[builder(into)]
    pub market_id: Option<String>,
    pub status: Option<OrderStatus>,
    pub order_type: Option<OrderType>,
    /// Earliest creation time to include.
    pub start_date: Option<DateTime<Utc>>,
    /// Latest creation time to include.
    pub end_date: Option<DateTime<Utc>>,
}

/// Query parameters for the `/time-series` listing.
///
/// The backend receives a time window as an empty `duration_sec` key: setting `start_time`
/// adds `duration_sec=` to the query and neither timestamp is sent. `end_time` is accepted for
/// symmetry but never reaches the wire.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Builder, Serialize)]
pub struct TimeSeriesFilter {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_id: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    // TODO: send start_time/end_time once the backend's expected window parameters are confirmed
    #[serde(
        rename = "duration_sec",
        serialize_with = "serialize_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub end_time: Option<DateTime<Utc>>,
}

/// Body of the `/faucet` airdrop request.
#[non_exhaustive]
#[derive(Debug, Clone, Builder, Serialize)]
#[builder(on(String, into))]
pub struct FaucetRequest {
    pub account_id: String,
    pub asset_id: String,
}

/// Opens a new platform account.
///
/// # Example
///
/// ```
/// use asset_platform_client::platform::types::AccountType;
/// use asset_platform_client::platform::types::request::CreateAccountInput;
///
/// let input = CreateAccountInput::builder()
///     .linked_account_id("user-1")
///     .account_type(AccountType::Retail)
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct CreateAccountInput {
    pub linked_account_id: String,
    pub account_type: AccountType,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct VerifyAccountInput {
    pub account_id: String,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct CreateWalletInput {
    pub account_id: String,
}

#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct CreateAssetInput {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub asset_type: Option<String>,
    pub manager_id: Option<String>,
}

/// Binds an existing asset to its token and managing party.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct RegisterAssetInput {
    pub asset_id: String,
    pub token_id: String,
    pub manager_id: String,
}

#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct CreateMarketInput {
    pub base_asset_id: String,
    pub quote_asset_id: String,
    pub market_type: MarketType,
    pub regulation: Option<String>,
    pub tick_size: Option<Decimal>,
    pub min_order_size: Option<Decimal>,
}

/// Changes to an existing market. Unset fields are left as they are.
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct UpdateMarketInput {
    pub market_id: String,
    pub status: Option<MarketStatus>,
    pub regulation: Option<String>,
    pub tick_size: Option<Decimal>,
    pub min_order_size: Option<Decimal>,
}

#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct PlaceOrderInput {
    pub wallet_id: String,
    pub market_id: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: Decimal,
    /// Required by the backend for limit orders.
    pub price: Option<Decimal>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct CancelOrderInput {
    pub order_id: String,
}

/// One candle to append to a market's time series.
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct AppendRecordInput {
    pub market_id: String,
    pub asset_id: Option<String>,
    pub interval: Interval,
    pub provider: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct CreateLendingPoolInput {
    pub name: String,
    pub asset_id: String,
    #[builder(default)]
    pub collateral_asset_ids: Vec<String>,
    pub collateral_factor: Decimal,
    pub liquidation_threshold: Decimal,
    pub liquidation_penalty: Option<Decimal>,
    pub address: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct SupplyLiquidityInput {
    pub pool_id: String,
    pub wallet_id: String,
    pub amount: Decimal,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct WithdrawLiquidityInput {
    pub pool_id: String,
    pub wallet_id: String,
    pub amount: Decimal,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct BorrowAssetInput {
    pub pool_id: String,
    pub wallet_id: String,
    pub amount: Decimal,
    pub collateral_asset_id: String,
    pub collateral_amount: Decimal,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct RepayBorrowInput {
    pub loan_id: String,
    pub wallet_id: String,
    pub amount: Decimal,
}

/// Records a repayment made outside the pool flow against a loan.
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct RecordRepaymentInput {
    pub loan_id: String,
    pub amount: Decimal,
    pub interest_paid: Option<Decimal>,
}

#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct RecordLiquidationInput {
    pub loan_id: String,
    pub liquidator_wallet_id: Option<String>,
    pub collateral_seized: Decimal,
    pub debt_covered: Decimal,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;
    use crate::ToQueryParams as _;

    #[test]
    fn empty_filters_should_produce_no_query() {
        assert_eq!(MarketFilter::default().query_params(), "");
        assert_eq!(OrderFilter::default().query_params(), "");
        assert_eq!(TimeSeriesFilter::default().query_params(), "");
    }

    #[test]
    fn market_filter_should_skip_unset_fields() {
        let filter = MarketFilter::builder()
            .market_type(MarketType::Spot)
            .status(MarketStatus::Active)
            .build();

        assert_eq!(filter.query_params(), "?market_type=spot&status=active");
    }

    #[test]
    fn market_filter_should_keep_declaration_order() {
        let filter = MarketFilter::builder()
            .regulation("mica")
            .market_type(MarketType::Futures)
            .build();

        assert_eq!(filter.query_params(), "?market_type=futures&regulation=mica");
        assert_eq!(filter.query_params(), filter.query_params());
    }

    #[test]
    fn order_filter_should_encode_values() {
        let filter = OrderFilter::builder()
            .wallet_id("wallet 1")
            .status(OrderStatus::PartiallyFilled)
            .order_type(OrderType::Limit)
            .start_date(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap())
            .build();

        assert_eq!(
            filter.query_params(),
            "?wallet_id=wallet+1&status=partially_filled&order_type=limit&start_date=2026-01-02T03%3A04%3A05Z"
        );
    }

    #[test]
    fn time_series_filter_should_send_blank_duration_for_start_time() {
        let filter = TimeSeriesFilter::builder()
            .market_id("mkt-1")
            .interval(Interval::OneHour)
            .start_time(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
            .end_time(Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap())
            .build();

        assert_eq!(
            filter.query_params(),
            "?market_id=mkt-1&interval=1h&duration_sec="
        );
    }

    #[test]
    fn time_series_filter_should_ignore_lone_end_time() {
        let filter = TimeSeriesFilter::builder()
            .provider("binance")
            .end_time(Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap())
            .build();

        assert_eq!(filter.query_params(), "?provider=binance");
    }

    #[test]
    fn optional_input_fields_should_be_omitted() {
        let input = PlaceOrderInput::builder()
            .wallet_id("w-1")
            .market_id("m-1")
            .side(OrderSide::Buy)
            .order_type(OrderType::Market)
            .quantity(dec!(2.5))
            .build();

        assert_eq!(
            serde_json::to_value(&input).expect("serialize"),
            json!({
                "wallet_id": "w-1",
                "market_id": "m-1",
                "side": "buy",
                "order_type": "market",
                "quantity": "2.5"
            })
        );
    }
}
