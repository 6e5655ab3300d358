//! Connection profile and the normalized request primitive shared by every endpoint.
//!
//! [`Transport::request`] never returns an error: a call that fails before the backend produces
//! an envelope (connection refused, timeout, DNS failure, a body that is not an envelope) is
//! turned into a failed [`Envelope`] so callers branch on [`Envelope::success`] only.

use std::time::Duration;

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::envelope::{Envelope, WireEnvelope};
use crate::error::Error;
use crate::{Result, serde_helpers};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Environment variable holding the base URL for [`Config::from_env`].
pub const BASE_URL_VAR: &str = "PLATFORM_API_URL";

/// Environment variable holding the API key for [`Config::from_env`].
pub const API_KEY_VAR: &str = "PLATFORM_API_KEY";

/// Environment variable holding the timeout in milliseconds for [`Config::from_env`].
pub const TIMEOUT_MS_VAR: &str = "PLATFORM_TIMEOUT_MS";

/// Error text used when a transport failure carries no message.
pub const TRANSPORT_FAILURE_FALLBACK: &str = "request failed before a response was received";

/// Header that skips the interstitial page tunnelling proxies put in front of local backends.
const TUNNEL_BYPASS_HEADER: &str = "ngrok-skip-browser-warning";

/// Connection profile for a [`Transport`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use asset_platform_client::transport::Config;
///
/// let config = Config::builder()
///     .base_url("https://api.example.com")
///     .api_key("secret-key".to_owned())
///     .timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(config.base_url(), "https://api.example.com");
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    #[builder(into, default = DEFAULT_BASE_URL.to_owned())]
    base_url: String,
    /// Bearer token sent with every authenticated request.
    #[builder(into)]
    api_key: SecretString,
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
}

impl Config {
    /// Reads [`BASE_URL_VAR`], [`API_KEY_VAR`] and [`TIMEOUT_MS_VAR`] from the environment.
    ///
    /// Only the API key is required.
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Config> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::validation(format!("{API_KEY_VAR} is not set")))?;

        let timeout = match lookup(TIMEOUT_MS_VAR) {
            Some(raw) => Duration::from_millis(raw.trim().parse().map_err(|e| {
                Error::validation(format!("{TIMEOUT_MS_VAR} must be milliseconds: {e}"))
            })?),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Config::builder()
            .maybe_base_url(lookup(BASE_URL_VAR))
            .api_key(api_key)
            .timeout(timeout)
            .build())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Owns the connection profile and issues every platform request.
///
/// The profile is immutable after construction; clones share the underlying connection pool
/// and can be used from any number of tasks concurrently.
#[derive(Clone, Debug)]
pub struct Transport {
    host: Url,
    api_key: SecretString,
    client: ReqwestClient,
}

impl Transport {
    /// Builds the HTTP client for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails to build.
    pub fn new(config: Config) -> Result<Transport> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("asset_platform_client"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        headers.insert(TUNNEL_BYPASS_HEADER, HeaderValue::from_static("true"));
        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        // Paths are appended to the host, so the host must end in a slash.
        let mut base = config.base_url;
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            host: Url::parse(&base)?,
            api_key: config.api_key,
            client,
        })
    }

    /// Returns the host URL for the transport.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Issues an authenticated `GET` and normalizes the outcome.
    pub async fn get<Res: DeserializeOwned>(&self, path: &str) -> Envelope<Res> {
        self.request::<(), Res>(Method::GET, path, None).await
    }

    /// Issues an authenticated `POST` with a JSON body and normalizes the outcome.
    pub async fn post<Body, Res>(&self, path: &str, body: &Body) -> Envelope<Res>
    where
        Body: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Issues an authenticated request against `path` (relative to the host, query included)
    /// and returns the backend envelope, or a synthesized failure when no envelope arrived.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, body), fields(status_code))
    )]
    pub async fn request<Body, Res>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Body>,
    ) -> Envelope<Res>
    where
        Body: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        match self.execute(method, path, body).await {
            Ok(envelope) => envelope.normalize(),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "request failed without a backend envelope");

                Envelope::failure(transport_message(&e))
            }
        }
    }

    async fn execute<Body, Res>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Body>,
    ) -> Result<Envelope<Res>>
    where
        Body: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let mut builder = self
            .client
            .request(method.clone(), format!("{}{path}", self.host))
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.api_key.expose_secret()),
            );
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status_code = response.status();

        #[cfg(feature = "tracing")]
        tracing::Span::current().record("status_code", status_code.as_u16());

        let text = response.text().await?;
        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(value) => serde_helpers::deserialize_with_warnings::<WireEnvelope>(value)?
                .decode(serde_helpers::deserialize_with_warnings),
            Err(e) if status_code.is_success() => Err(e.into()),
            Err(_) => Err(Error::status(status_code, method, format!("/{path}"), text)),
        }
    }

    /// Raw, unauthenticated `GET` used by liveness probes. Errors are returned, not normalized.
    pub(crate) async fn get_raw<Res: DeserializeOwned>(&self, path: &str) -> Result<Res> {
        let request = self
            .client
            .request(Method::GET, format!("{}{path}", self.host))
            .build()?;

        let response = self.client.execute(request).await?;
        let status_code = response.status();

        if !status_code.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::status(
                status_code,
                Method::GET,
                format!("/{path}"),
                message,
            ));
        }

        Ok(response.json::<Res>().await?)
    }
}

fn transport_message(error: &Error) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        TRANSPORT_FAILURE_FALLBACK.to_owned()
    } else {
        message
    }
}
