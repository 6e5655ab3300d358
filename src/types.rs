//! Re-exported types from external crates for convenience.
//!
//! These types appear throughout the request and response models, so they are
//! re-exported here and callers don't need to add the crates to their `Cargo.toml`.

/// Date and time types for timestamps in API responses and filters.
pub use chrono::{DateTime, Utc};
/// Arbitrary precision decimal type for prices, quantities, amounts and rates.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use asset_platform_client::types::dec;
/// let amount = dec!(250.5);
/// ```
pub use rust_decimal_macros::dec;
/// Secret string type that redacts the API key in debug output.
pub use secrecy::{ExposeSecret, SecretString};
