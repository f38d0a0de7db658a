use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::{admits, decode};
use crate::data::FetchOptions;
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Fetches a URL and decodes the body as JSON.
///
/// A fetcher holds no per-call state: every call issues exactly one request,
/// and two calls never observe each other. Share it by reference or behind an
/// `Arc` across tasks.
pub struct Fetcher<C: HttpClient> {
    client: C,
    options: FetchOptions,
}

impl<C: HttpClient> Fetcher<C> {
    /// Create a new fetcher over the provided HTTP client.
    pub fn new(client: C) -> Self {
        Self {
            client,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetch `url` and decode the body into `T`.
    ///
    /// The call suspends twice: once for the response head, once for the
    /// body. Nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] if the request or the body transfer fails.
    /// - [`FetchError::Status`] if the status is rejected by the configured
    ///   [`StatusPolicy`](crate::StatusPolicy).
    /// - [`FetchError::Parse`] if the body is not JSON or does not fit `T`.
    pub async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.read_body(url).await?;
        trace!(url, bytes = body.len(), "decoding body");
        decode(url, &body)
    }

    /// Fetch `url` and return the body as an untyped JSON value.
    pub async fn get_value(&self, url: &str) -> Result<Value> {
        self.get_data(url).await
    }

    async fn read_body(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "sending request");
        let response = self
            .client
            .get(url, &self.options.headers)
            .await
            .map_err(|e| FetchError::network(url, e))?;

        debug!(url, status = response.status, "response received");
        if !admits(self.options.status_policy, response.status) {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status: response.status,
            });
        }

        let mut stream = response.body;
        let mut body = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::network(url, e))?;
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}

#[cfg(feature = "reqwest")]
impl Fetcher<crate::effects::http::ReqwestClient> {
    /// Build a reqwest-backed fetcher from a client setting.
    pub fn from_setting(
        setting: &crate::config::ClientSetting,
    ) -> std::result::Result<Self, crate::error::ClientSettingError> {
        Ok(Self::new(crate::effects::http::ReqwestClient::from_setting(
            setting,
        )?))
    }
}
