//! Immutable data types for fetching.
//!
//! Request options and the example response schema. Nothing here performs
//! I/O.

pub mod actor;
pub mod options;

pub use actor::Actor;
pub use options::{FetchOptions, StatusPolicy};
