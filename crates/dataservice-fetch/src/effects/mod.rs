//! I/O for fetching.
//!
//! The transport trait, its reqwest implementation, and the [`Fetcher`] that
//! drives one request through the pure [`core`](crate::core) functions.

mod fetcher;
mod http;

pub use fetcher::Fetcher;
pub use http::{BoxStream, HttpClient, HttpResponse};
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
