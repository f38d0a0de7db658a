//! Error types for dataservice-fetch.

use thiserror::Error;

/// Boxed transport error, as produced by any [`HttpClient`](crate::HttpClient).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request or the body transfer did not complete.
    Network,
    /// The body was not JSON, or not JSON of the requested shape.
    Parse,
    /// The server answered with a non-success status under
    /// [`StatusPolicy::RequireSuccess`](crate::StatusPolicy::RequireSuccess).
    Status,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network failure fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("response from {url} is not valid JSON: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    pub(crate) fn network(url: &str, source: impl Into<BoxError>) -> Self {
        FetchError::Network {
            url: url.to_owned(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Network { .. } => FailureKind::Network,
            FetchError::Parse { .. } => FailureKind::Parse,
            FetchError::Status { .. } => FailureKind::Status,
        }
    }

    /// The URL the failed call was made with.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Network { url, .. }
            | FetchError::Parse { url, .. }
            | FetchError::Status { url, .. } => url,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors raised while turning a [`ClientSetting`](crate::ClientSetting) into a client.
#[cfg(feature = "reqwest")]
#[derive(Debug, Error)]
pub enum ClientSettingError {
    #[error("invalid proxy URL {url}: {source}")]
    Proxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid default header {name}")]
    Header { name: String },

    #[error("failed to build client: {0}")]
    Build(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FetchError::Parse {
            url: "http://a.test/".into(),
            source: parse_err,
        };
        assert_eq!(err.kind(), FailureKind::Parse);
        assert_eq!(err.url(), "http://a.test/");

        let err = FetchError::network("http://b.test/", "connection refused");
        assert_eq!(err.kind(), FailureKind::Network);
        assert!(err.to_string().contains("connection refused"));

        let err = FetchError::Status {
            url: "http://c.test/".into(),
            status: 404,
        };
        assert_eq!(err.kind(), FailureKind::Status);
        assert_eq!(err.to_string(), "unexpected HTTP status 404 from http://c.test/");
    }
}
