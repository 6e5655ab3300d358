#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod envelope;
pub mod error;
pub mod platform;
pub(crate) mod serde_helpers;
pub mod transport;
pub mod types;

use serde::Serialize;

pub use crate::envelope::Envelope;
use crate::error::Error;
pub use crate::platform::Client;
pub use crate::transport::Config;

pub type Result<T> = std::result::Result<T, Error>;

/// Trait for converting filter types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string, in field
/// declaration order. Arrays are serialized as repeated keys (`key=val1&key=val2`).
pub trait ToQueryParams: Serialize {
    /// Converts the filter to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}
