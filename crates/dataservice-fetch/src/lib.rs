//! Fetch a URL and decode its body as JSON.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable options and the example response schema
//! - [`core`] - Pure transformations (status checks, JSON decoding)
//! - [`effects`] - I/O behind the [`HttpClient`] trait
//!
//! # Behavior
//!
//! - **One request per call**: no retries, no caching, no timeout of its own
//! - **Caller-chosen shape**: decode into any `DeserializeOwned` type, or
//!   [`serde_json::Value`] when the shape is unknown
//! - **Failures propagate**: transport problems are [`FetchError::Network`],
//!   malformed bodies are [`FetchError::Parse`]
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), dataservice_fetch::FetchError> {
//! use dataservice_fetch::{Actor, Fetcher, ReqwestClient};
//!
//! let fetcher = Fetcher::new(ReqwestClient::new());
//! let luke: Actor = fetcher.get_data("https://swapi.co/api/people/1/").await?;
//! println!("{} is {} cm tall", luke.name, luke.height);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use self::config::ClientSetting;
pub use self::data::{Actor, FetchOptions, StatusPolicy};
pub use self::effects::{BoxStream, Fetcher, HttpClient, HttpResponse};
pub use self::error::{BoxError, FailureKind, FetchError, Result};

#[cfg(feature = "reqwest")]
pub use self::effects::ReqwestClient;
#[cfg(feature = "reqwest")]
pub use self::error::ClientSettingError;

/// Fetch `url` once with a default reqwest client and decode the body into `T`.
///
/// Builds a fresh client per call. Hold a [`Fetcher`] instead when making
/// more than one request.
#[cfg(feature = "reqwest")]
pub async fn get_data<T: serde::de::DeserializeOwned>(url: &str) -> Result<T> {
    Fetcher::new(ReqwestClient::new()).get_data(url).await
}
