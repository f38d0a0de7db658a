use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// How a fetch treats the HTTP status of the response.
///
/// The status is never consulted under [`StatusPolicy::Ignore`]: a `404` whose
/// body is valid JSON returns that body, and a `500` with an HTML page fails
/// while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPolicy {
    /// Decode whatever body arrives.
    #[default]
    Ignore,

    /// Fail with [`FetchError::Status`](crate::FetchError::Status) on any
    /// non-2xx status, before the body is read.
    RequireSuccess,
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusPolicy::Ignore => write!(f, "ignore"),
            StatusPolicy::RequireSuccess => write!(f, "require-success"),
        }
    }
}

/// Per-fetcher request options.
///
/// # Examples
///
/// ```
/// use dataservice_fetch::{FetchOptions, StatusPolicy};
///
/// let options = FetchOptions::default()
///     .header("Accept", "application/json")
///     .status_policy(StatusPolicy::RequireSuccess);
/// assert_eq!(options.headers.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Extra headers sent with every request.
    ///
    /// Default: empty
    pub headers: Arc<[(String, String)]>,

    /// Default: [`StatusPolicy::Ignore`]
    pub status_policy: StatusPolicy,
}

impl FetchOptions {
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers = self.headers.to_vec();
        headers.push((key.into(), value.into()));
        self.headers = headers.into();
        self
    }

    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }
}
