//! The two-level tagged union accepted and returned by `POST /process`.
//!
//! On the wire an action is `{ "<Subsystem>": { "<Operation>": { ...input } } }` and a response
//! has the same shape with the operation's result in place of the input. Both are closed Rust
//! enums, so a value always carries exactly one subsystem and one operation.
//!
//! ```
//! use asset_platform_client::platform::types::AccountType;
//! use asset_platform_client::platform::types::mutation::MutationAction;
//! use asset_platform_client::platform::types::request::CreateAccountInput;
//!
//! let action = MutationAction::from(
//!     CreateAccountInput::builder()
//!         .linked_account_id("user-1")
//!         .account_type(AccountType::Retail)
//!         .build(),
//! );
//!
//! assert_eq!(action.subsystem(), "Accounts");
//! assert_eq!(action.operation(), "CreateAccount");
//! ```

use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

use super::request::{
    AppendRecordInput, BorrowAssetInput, CancelOrderInput, CreateAccountInput, CreateAssetInput,
    CreateLendingPoolInput, CreateMarketInput, CreateWalletInput, PlaceOrderInput,
    RecordLiquidationInput, RecordRepaymentInput, RegisterAssetInput, RepayBorrowInput,
    SupplyLiquidityInput, UpdateMarketInput, VerifyAccountInput, WithdrawLiquidityInput,
};
use super::response::{
    Account, Asset, LendingPool, Loan, LoanLiquidation, LoanRepayment, Market, Order,
    PoolTransaction, TimeSeriesRecord, Wallet,
};

/// A state-changing request for one platform subsystem.
#[expect(
    clippy::exhaustive_enums,
    reason = "The mutation protocol is a closed union that callers match exhaustively"
)]
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
pub enum MutationAction {
    Accounts(AccountsAction),
    Assets(AssetsAction),
    Markets(MarketsAction),
    OrderBook(OrderBookAction),
    MarketTimeSeries(MarketTimeSeriesAction),
    Pool(PoolAction),
    Loans(LoansAction),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
pub enum AccountsAction {
    CreateAccount(CreateAccountInput),
    VerifyAccount(VerifyAccountInput),
    CreateWallet(CreateWalletInput),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
pub enum AssetsAction {
    CreateAsset(CreateAssetInput),
    RegisterAsset(RegisterAssetInput),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
pub enum MarketsAction {
    CreateMarket(CreateMarketInput),
    UpdateMarket(UpdateMarketInput),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
pub enum OrderBookAction {
    PlaceOrder(PlaceOrderInput),
    CancelOrder(CancelOrderInput),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
pub enum MarketTimeSeriesAction {
    AppendRecord(AppendRecordInput),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
pub enum PoolAction {
    CreateLendingPool(CreateLendingPoolInput),
    SupplyLiquidity(SupplyLiquidityInput),
    WithdrawLiquidity(WithdrawLiquidityInput),
    BorrowAsset(BorrowAssetInput),
    RepayBorrow(RepayBorrowInput),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
pub enum LoansAction {
    RecordRepayment(RecordRepaymentInput),
    RecordLiquidation(RecordLiquidationInput),
}

/// The outcome of a [`MutationAction`], tagged by the backend.
///
/// The tags are expected to mirror the submitted action but the client does not check this.
/// Use the `is_*` predicates or `as_*` accessors to reach the typed payload.
#[expect(
    clippy::exhaustive_enums,
    reason = "The mutation protocol is a closed union that callers match exhaustively"
)]
#[derive(Debug, Clone, PartialEq, Deserialize, IntoStaticStr)]
pub enum MutationResponse {
    Accounts(AccountsResponse),
    Assets(AssetsResponse),
    Markets(MarketsResponse),
    OrderBook(OrderBookResponse),
    MarketTimeSeries(MarketTimeSeriesResponse),
    Pool(PoolResponse),
    Loans(LoansResponse),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Deserialize, IntoStaticStr)]
pub enum AccountsResponse {
    CreateAccount(Account),
    VerifyAccount(Account),
    CreateWallet(Wallet),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Deserialize, IntoStaticStr)]
pub enum AssetsResponse {
    CreateAsset(Asset),
    RegisterAsset(Asset),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Deserialize, IntoStaticStr)]
pub enum MarketsResponse {
    CreateMarket(Market),
    UpdateMarket(Market),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Deserialize, IntoStaticStr)]
pub enum OrderBookResponse {
    PlaceOrder(Order),
    CancelOrder(Order),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Deserialize, IntoStaticStr)]
pub enum MarketTimeSeriesResponse {
    AppendRecord(TimeSeriesRecord),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Deserialize, IntoStaticStr)]
pub enum PoolResponse {
    CreateLendingPool(LendingPool),
    SupplyLiquidity(PoolTransaction),
    WithdrawLiquidity(PoolTransaction),
    BorrowAsset(Loan),
    RepayBorrow(Loan),
}

#[expect(clippy::exhaustive_enums, reason = "Closed mutation union")]
#[derive(Debug, Clone, PartialEq, Deserialize, IntoStaticStr)]
pub enum LoansResponse {
    RecordRepayment(LoanRepayment),
    RecordLiquidation(LoanLiquidation),
}

impl MutationAction {
    /// Outer tag, e.g. `"Accounts"`.
    #[must_use]
    pub fn subsystem(&self) -> &'static str {
        self.into()
    }

    /// Inner tag, e.g. `"CreateAccount"`.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            MutationAction::Accounts(action) => action.into(),
            MutationAction::Assets(action) => action.into(),
            MutationAction::Markets(action) => action.into(),
            MutationAction::OrderBook(action) => action.into(),
            MutationAction::MarketTimeSeries(action) => action.into(),
            MutationAction::Pool(action) => action.into(),
            MutationAction::Loans(action) => action.into(),
        }
    }
}

impl MutationResponse {
    /// Outer tag, e.g. `"Accounts"`.
    #[must_use]
    pub fn subsystem(&self) -> &'static str {
        self.into()
    }

    /// Inner tag, e.g. `"CreateAccount"`.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            MutationResponse::Accounts(response) => response.into(),
            MutationResponse::Assets(response) => response.into(),
            MutationResponse::Markets(response) => response.into(),
            MutationResponse::OrderBook(response) => response.into(),
            MutationResponse::MarketTimeSeries(response) => response.into(),
            MutationResponse::Pool(response) => response.into(),
            MutationResponse::Loans(response) => response.into(),
        }
    }
}

/// Wires each operation's input into its action branch and generates the matching
/// `is_*`/`as_*` narrowing methods on [`MutationResponse`].
macro_rules! operations {
    ($(
        $outer:ident($action:ident, $response:ident)::$inner:ident($input:ty => $payload:ty),
        $predicate:ident, $accessor:ident;
    )+) => {
        $(
            impl From<$input> for MutationAction {
                fn from(input: $input) -> Self {
                    MutationAction::$outer($action::$inner(input))
                }
            }
        )+

        impl MutationResponse {
            $(
                #[doc = concat!(
                    "Whether this is the result of `", stringify!($outer), "::",
                    stringify!($inner), "`."
                )]
                #[must_use]
                pub fn $predicate(&self) -> bool {
                    matches!(self, MutationResponse::$outer($response::$inner(_)))
                }

                #[doc = concat!(
                    "The payload of a `", stringify!($outer), "::", stringify!($inner),
                    "` result, or `None` for any other response."
                )]
                #[must_use]
                pub fn $accessor(&self) -> Option<&$payload> {
                    match self {
                        MutationResponse::$outer($response::$inner(payload)) => Some(payload),
                        _ => None,
                    }
                }
            )+
        }
    };
}

operations! {
    Accounts(AccountsAction, AccountsResponse)::CreateAccount(CreateAccountInput => Account),
        is_create_account, as_create_account;
    Accounts(AccountsAction, AccountsResponse)::VerifyAccount(VerifyAccountInput => Account),
        is_verify_account, as_verify_account;
    Accounts(AccountsAction, AccountsResponse)::CreateWallet(CreateWalletInput => Wallet),
        is_create_wallet, as_create_wallet;
    Assets(AssetsAction, AssetsResponse)::CreateAsset(CreateAssetInput => Asset),
        is_create_asset, as_create_asset;
    Assets(AssetsAction, AssetsResponse)::RegisterAsset(RegisterAssetInput => Asset),
        is_register_asset, as_register_asset;
    Markets(MarketsAction, MarketsResponse)::CreateMarket(CreateMarketInput => Market),
        is_create_market, as_create_market;
    Markets(MarketsAction, MarketsResponse)::UpdateMarket(UpdateMarketInput => Market),
        is_update_market, as_update_market;
    OrderBook(OrderBookAction, OrderBookResponse)::PlaceOrder(PlaceOrderInput => Order),
        is_place_order, as_place_order;
    OrderBook(OrderBookAction, OrderBookResponse)::CancelOrder(CancelOrderInput => Order),
        is_cancel_order, as_cancel_order;
    MarketTimeSeries(MarketTimeSeriesAction, MarketTimeSeriesResponse)::AppendRecord(
        AppendRecordInput => TimeSeriesRecord
    ),
        is_append_record, as_append_record;
    Pool(PoolAction, PoolResponse)::CreateLendingPool(CreateLendingPoolInput => LendingPool),
        is_create_lending_pool, as_create_lending_pool;
    Pool(PoolAction, PoolResponse)::SupplyLiquidity(SupplyLiquidityInput => PoolTransaction),
        is_supply_liquidity, as_supply_liquidity;
    Pool(PoolAction, PoolResponse)::WithdrawLiquidity(WithdrawLiquidityInput => PoolTransaction),
        is_withdraw_liquidity, as_withdraw_liquidity;
    Pool(PoolAction, PoolResponse)::BorrowAsset(BorrowAssetInput => Loan),
        is_borrow_asset, as_borrow_asset;
    Pool(PoolAction, PoolResponse)::RepayBorrow(RepayBorrowInput => Loan),
        is_repay_borrow, as_repay_borrow;
    Loans(LoansAction, LoansResponse)::RecordRepayment(RecordRepaymentInput => LoanRepayment),
        is_record_repayment, as_record_repayment;
    Loans(LoansAction, LoansResponse)::RecordLiquidation(
        RecordLiquidationInput => LoanLiquidation
    ),
        is_record_liquidation, as_record_liquidation;
}
