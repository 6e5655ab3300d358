//! Platform API client and types.
//!
//! Every method issues exactly one request through the shared [`crate::transport::Transport`]
//! and returns an [`crate::Envelope`]. Reads are `GET`s against resource paths; every
//! state-changing operation goes through the single `POST /process` endpoint as a
//! [`types::mutation::MutationAction`].
//!
//! ## Read endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/accounts/{id}` | Account by id |
//! | `/accounts/linked/{linked_account_id}` | Account by external linked id |
//! | `/accounts/{id}/wallets` | Wallets of an account |
//! | `/wallets/{id}` | Wallet by id |
//! | `/assets`, `/assets/{id}` | Asset listing and lookup |
//! | `/assets/token/{token_id}` | Asset by token identifier |
//! | `/assets/manager/{manager_id}` | Assets of a manager |
//! | `/markets`, `/markets/{id}` | Filtered market listing and lookup |
//! | `/orders`, `/orders/{id}` | Filtered order listing and lookup |
//! | `/time-series`, `/time-series/{id}` | Filtered candle listing and lookup |
//! | `/pools`, `/pools/{id}` | Lending pool listing and lookup |
//! | `/pools/name/{name}`, `/pools/address/{address}` | Pool by name or address |
//! | `/pools/{id}/snapshot` | Current pool balances and rates |
//! | `/pools/{id}/transactions` | Pool supply/withdraw/borrow history |
//! | `/pools/{id}/interest-rates` | Pool rate model |
//! | `/pools/{id}/collateral` | Pool collateral parameters |
//! | `/pools/{id}/statistics` | Pool activity aggregates |
//! | `/pools/{id}/positions/{wallet_id}` | A wallet's position in a pool |
//! | `/loans`, `/loans/{id}` | Loan listing and lookup |
//! | `/loans/pool/{id}`, `/loans/wallet/{id}`, `/loans/status/{status}` | Loans by pool, wallet or status |
//! | `/loan-repayments`, `/loans/{id}/repayments` | Repayments, global or per loan |
//! | `/loan-liquidations`, `/loans/{id}/liquidations` | Liquidations, global or per loan |
//! | `/health` | Unauthenticated liveness probe |
//!
//! ## Write endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/faucet` | POST | Airdrop an asset into an account |
//! | `/process` | POST | Tagged mutation dispatch |
//!
//! # Example
//!
//! ```no_run
//! use asset_platform_client::platform::Client;
//! use asset_platform_client::platform::types::request::MarketFilter;
//! use asset_platform_client::platform::types::{MarketStatus, MarketType};
//! use asset_platform_client::transport::Config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(Config::builder().api_key("api-key".to_owned()).build())?;
//!
//! let filter = MarketFilter::builder()
//!     .market_type(MarketType::Spot)
//!     .status(MarketStatus::Active)
//!     .build();
//!
//! let markets = client.markets(&filter).await;
//! if let Some(markets) = markets.data() {
//!     for market in markets {
//!         println!("{}: {}/{}", market.id, market.base_asset_id, market.quote_asset_id);
//!     }
//! } else {
//!     println!("failed: {:?}", markets.error());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
