//! Endpoint surface of the platform API.

use super::types::mutation::{MutationAction, MutationResponse};
use super::types::request::{
    AppendRecordInput, BorrowAssetInput, CancelOrderInput, CreateAccountInput, CreateAssetInput,
    CreateLendingPoolInput, CreateMarketInput, CreateWalletInput, FaucetRequest, MarketFilter,
    OrderFilter, PlaceOrderInput, RecordLiquidationInput, RecordRepaymentInput,
    RegisterAssetInput, RepayBorrowInput, SupplyLiquidityInput, TimeSeriesFilter,
    UpdateMarketInput, VerifyAccountInput, WithdrawLiquidityInput,
};
use super::types::response::{
    Account, Asset, FaucetResponse, HealthResponse, LendingPool, Loan, LoanLiquidation,
    LoanRepayment, Market, Order, PoolCollateralInfo, PoolInterestRates, PoolSnapshot,
    PoolStatistics, PoolTransaction, TimeSeriesRecord, UserPosition, Wallet,
};
use super::types::LoanStatus;
use crate::envelope::Envelope;
use crate::transport::{Config, Transport};
use crate::{Result, ToQueryParams as _};

/// Path of the tagged mutation endpoint.
const PROCESS_PATH: &str = "process";

/// HTTP client for the platform API.
///
/// Cloning is cheap and clones share one connection pool; the configuration is fixed at
/// construction, so a single client can serve any number of concurrent tasks.
///
/// # Example
///
/// ```no_run
/// use asset_platform_client::platform::Client;
/// use asset_platform_client::transport::Config;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(Config::from_env()?)?;
///
/// let account = client.account("acc-1").await;
/// match account.data() {
///     Some(account) => println!("{} verified={}", account.id, account.verified),
///     None => println!("lookup failed: {:?}", account.error()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Creates a client for the given connection profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails to build.
    pub fn new(config: Config) -> Result<Client> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Returns the underlying transport, e.g. to reach endpoints this client doesn't model.
    #[must_use]
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Checks that the backend is reachable.
    ///
    /// Unlike every other method this sends no credentials and does not wrap failures in an
    /// envelope: an unreachable host or a non-2xx status is returned as an error.
    pub async fn health(&self) -> Result<HealthResponse> {
        self.transport.get_raw("health").await
    }

    /// Airdrops test funds of `asset_id` into `account_id`.
    pub async fn faucet(&self, request: &FaucetRequest) -> Envelope<FaucetResponse> {
        self.transport.post("faucet", request).await
    }

    // Accounts and wallets

    pub async fn account(&self, id: &str) -> Envelope<Account> {
        self.transport.get(&format!("accounts/{id}")).await
    }

    /// Looks up the account bound to an identity in the linked external system.
    pub async fn account_by_linked_id(&self, linked_account_id: &str) -> Envelope<Account> {
        self.transport
            .get(&format!("accounts/linked/{linked_account_id}"))
            .await
    }

    /// Retrieves all wallets owned by an account.
    pub async fn account_wallets(&self, account_id: &str) -> Envelope<Vec<Wallet>> {
        self.transport
            .get(&format!("accounts/{account_id}/wallets"))
            .await
    }

    pub async fn wallet(&self, id: &str) -> Envelope<Wallet> {
        self.transport.get(&format!("wallets/{id}")).await
    }

    /// Retrieves the wallet of an account as a single record.
    ///
    /// This targets the same path as [`Self::account_wallets`]; the two are kept separate
    /// because the backend's response shape for this lookup is not guaranteed to be a list.
    pub async fn wallet_by_account_id(&self, account_id: &str) -> Envelope<Wallet> {
        self.transport
            .get(&format!("accounts/{account_id}/wallets"))
            .await
    }

    // Assets

    pub async fn asset(&self, id: &str) -> Envelope<Asset> {
        self.transport.get(&format!("assets/{id}")).await
    }

    pub async fn asset_by_token_id(&self, token_id: &str) -> Envelope<Asset> {
        self.transport.get(&format!("assets/token/{token_id}")).await
    }

    /// Retrieves every asset managed by `manager_id`.
    pub async fn assets_by_manager_id(&self, manager_id: &str) -> Envelope<Vec<Asset>> {
        self.transport
            .get(&format!("assets/manager/{manager_id}"))
            .await
    }

    pub async fn assets(&self) -> Envelope<Vec<Asset>> {
        self.transport.get("assets").await
    }

    // Markets, orders and time series

    pub async fn market(&self, id: &str) -> Envelope<Market> {
        self.transport.get(&format!("markets/{id}")).await
    }

    /// Lists markets matching `filter`. Pass [`MarketFilter::default`] for all markets.
    pub async fn markets(&self, filter: &MarketFilter) -> Envelope<Vec<Market>> {
        self.transport
            .get(&format!("markets{}", filter.query_params()))
            .await
    }

    pub async fn order(&self, id: &str) -> Envelope<Order> {
        self.transport.get(&format!("orders/{id}")).await
    }

    /// Lists orders matching `filter`.
    pub async fn orders(&self, filter: &OrderFilter) -> Envelope<Vec<Order>> {
        self.transport
            .get(&format!("orders{}", filter.query_params()))
            .await
    }

    pub async fn time_series_record(&self, id: &str) -> Envelope<TimeSeriesRecord> {
        self.transport.get(&format!("time-series/{id}")).await
    }

    /// Lists time-series records matching `filter`.
    ///
    /// See [`TimeSeriesFilter`] for how the time window reaches the backend.
    pub async fn time_series(&self, filter: &TimeSeriesFilter) -> Envelope<Vec<TimeSeriesRecord>> {
        self.transport
            .get(&format!("time-series{}", filter.query_params()))
            .await
    }

    // Lending pools

    pub async fn pool(&self, id: &str) -> Envelope<LendingPool> {
        self.transport.get(&format!("pools/{id}")).await
    }

    pub async fn pool_by_name(&self, name: &str) -> Envelope<LendingPool> {
        self.transport.get(&format!("pools/name/{name}")).await
    }

    pub async fn pool_by_address(&self, address: &str) -> Envelope<LendingPool> {
        self.transport.get(&format!("pools/address/{address}")).await
    }

    pub async fn pools(&self) -> Envelope<Vec<LendingPool>> {
        self.transport.get("pools").await
    }

    /// Current balances, utilization and rates of a pool.
    pub async fn pool_snapshot(&self, pool_id: &str) -> Envelope<PoolSnapshot> {
        self.transport
            .get(&format!("pools/{pool_id}/snapshot"))
            .await
    }

    pub async fn pool_transactions(&self, pool_id: &str) -> Envelope<Vec<PoolTransaction>> {
        self.transport
            .get(&format!("pools/{pool_id}/transactions"))
            .await
    }

    pub async fn pool_interest_rates(&self, pool_id: &str) -> Envelope<PoolInterestRates> {
        self.transport
            .get(&format!("pools/{pool_id}/interest-rates"))
            .await
    }

    pub async fn pool_collateral_info(&self, pool_id: &str) -> Envelope<PoolCollateralInfo> {
        self.transport
            .get(&format!("pools/{pool_id}/collateral"))
            .await
    }

    pub async fn pool_statistics(&self, pool_id: &str) -> Envelope<PoolStatistics> {
        self.transport
            .get(&format!("pools/{pool_id}/statistics"))
            .await
    }

    /// The supplied, borrowed and collateral amounts of one wallet in one pool.
    pub async fn user_position(&self, pool_id: &str, wallet_id: &str) -> Envelope<UserPosition> {
        self.transport
            .get(&format!("pools/{pool_id}/positions/{wallet_id}"))
            .await
    }

    // Loans

    pub async fn loan(&self, id: &str) -> Envelope<Loan> {
        self.transport.get(&format!("loans/{id}")).await
    }

    pub async fn loans_by_pool(&self, pool_id: &str) -> Envelope<Vec<Loan>> {
        self.transport.get(&format!("loans/pool/{pool_id}")).await
    }

    pub async fn loans_by_wallet(&self, wallet_id: &str) -> Envelope<Vec<Loan>> {
        self.transport
            .get(&format!("loans/wallet/{wallet_id}"))
            .await
    }

    pub async fn loans_by_status(&self, status: &LoanStatus) -> Envelope<Vec<Loan>> {
        self.transport.get(&format!("loans/status/{status}")).await
    }

    pub async fn loans(&self) -> Envelope<Vec<Loan>> {
        self.transport.get("loans").await
    }

    pub async fn loan_repayments(&self) -> Envelope<Vec<LoanRepayment>> {
        self.transport.get("loan-repayments").await
    }

    pub async fn repayments_by_loan(&self, loan_id: &str) -> Envelope<Vec<LoanRepayment>> {
        self.transport
            .get(&format!("loans/{loan_id}/repayments"))
            .await
    }

    pub async fn loan_liquidations(&self) -> Envelope<Vec<LoanLiquidation>> {
        self.transport.get("loan-liquidations").await
    }

    pub async fn liquidations_by_loan(&self, loan_id: &str) -> Envelope<Vec<LoanLiquidation>> {
        self.transport
            .get(&format!("loans/{loan_id}/liquidations"))
            .await
    }

    // Mutations

    /// Submits a tagged mutation to `POST /process`.
    ///
    /// The response tags are chosen by the backend and are not checked against `action`; use
    /// the narrowing methods on [`MutationResponse`] to reach the payload.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use asset_platform_client::platform::Client;
    /// use asset_platform_client::platform::types::mutation::MutationAction;
    /// use asset_platform_client::platform::types::request::CancelOrderInput;
    /// use asset_platform_client::transport::Config;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new(Config::from_env()?)?;
    ///
    /// let action = MutationAction::from(CancelOrderInput::builder().order_id("ord-7").build());
    /// let response = client.process(&action).await;
    ///
    /// if let Some(order) = response.data().and_then(|r| r.as_cancel_order()) {
    ///     println!("order {} is now {}", order.id, order.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn process(&self, action: &MutationAction) -> Envelope<MutationResponse> {
        self.transport.post(PROCESS_PATH, action).await
    }

    pub async fn create_account(&self, input: CreateAccountInput) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn verify_account(&self, input: VerifyAccountInput) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn create_wallet(&self, input: CreateWalletInput) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn create_asset(&self, input: CreateAssetInput) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn register_asset(&self, input: RegisterAssetInput) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn create_market(&self, input: CreateMarketInput) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn update_market(&self, input: UpdateMarketInput) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn place_order(&self, input: PlaceOrderInput) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn cancel_order(&self, input: CancelOrderInput) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn append_time_series_record(
        &self,
        input: AppendRecordInput,
    ) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn create_lending_pool(
        &self,
        input: CreateLendingPoolInput,
    ) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn supply_liquidity(
        &self,
        input: SupplyLiquidityInput,
    ) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn withdraw_liquidity(
        &self,
        input: WithdrawLiquidityInput,
    ) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn borrow_asset(&self, input: BorrowAssetInput) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn repay_borrow(&self, input: RepayBorrowInput) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn record_loan_repayment(
        &self,
        input: RecordRepaymentInput,
    ) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }

    pub async fn record_loan_liquidation(
        &self,
        input: RecordLiquidationInput,
    ) -> Envelope<MutationResponse> {
        self.process(&input.into()).await
    }
}
