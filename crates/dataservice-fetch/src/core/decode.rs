use serde::de::DeserializeOwned;

use crate::error::{FetchError, Result};

/// Decode a complete response body as JSON into `T`.
///
/// `url` only labels the error. An empty body is not JSON and fails like any
/// other malformed body.
pub fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| FetchError::Parse {
        url: url.to_owned(),
        source,
    })
}
