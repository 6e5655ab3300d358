//! The uniform `{ success, data, error }` wrapper returned by every platform endpoint.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Result;
use crate::error::Error;

/// Message used when a failed envelope carries no error text of its own.
pub const BACKEND_FAILURE_FALLBACK: &str = "request failed without an error message";

/// Message used when a successful envelope arrives without a payload.
pub const MISSING_DATA_MESSAGE: &str = "response reported success but carried no data";

/// Response envelope.
///
/// `success()` is `true` exactly when `data()` is present and `error()` is absent. The
/// constructors and the transport uphold this, so callers can branch on [`Envelope::success`]
/// alone or convert with [`Envelope::into_result`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

/// Envelope as it arrives on the wire, with `data` left undecoded until `success` is known.
#[derive(Debug, Deserialize)]
pub(crate) struct WireEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

impl WireEnvelope {
    /// Decodes `data` with `decode` only when the backend reported success.
    pub(crate) fn decode<T, E, F>(self, decode: F) -> std::result::Result<Envelope<T>, E>
    where
        F: FnOnce(Value) -> std::result::Result<T, E>,
    {
        let data = match self.data {
            Some(value) if self.success && !value.is_null() => Some(decode(value)?),
            _ => None,
        };

        Ok(Envelope {
            success: self.success,
            data,
            error: self.error,
        })
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        WireEnvelope::deserialize(deserializer)?
            .decode(|value| T::deserialize(value).map_err(D::Error::custom))
    }
}

impl<T> Envelope<T> {
    /// A successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// A failed envelope. An empty `message` is replaced by [`BACKEND_FAILURE_FALLBACK`].
    pub fn failure<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        Self {
            success: false,
            data: None,
            error: Some(if message.trim().is_empty() {
                BACKEND_FAILURE_FALLBACK.to_owned()
            } else {
                message
            }),
        }
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Converts into a [`Result`], mapping a failed envelope to an error of kind
    /// [`crate::error::Kind::Backend`].
    pub fn into_result(self) -> Result<T> {
        match self.data {
            Some(data) if self.success => Ok(data),
            _ => Err(Error::backend(
                self.error
                    .unwrap_or_else(|| BACKEND_FAILURE_FALLBACK.to_owned()),
            )),
        }
    }

    /// Re-establishes the success/data/error invariant on an envelope decoded from the wire.
    pub(crate) fn normalize(self) -> Self {
        match (self.success, self.data) {
            (true, Some(data)) => Self::ok(data),
            (true, None) => Self::failure(MISSING_DATA_MESSAGE),
            (false, _) => Self::failure(self.error.unwrap_or_default()),
        }
    }
}
