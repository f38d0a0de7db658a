//! Pure transformations for fetching.
//!
//! Status classification and body decoding. These functions take bytes and
//! numbers in and hand values or errors out without touching the network.

mod decode;
mod status;

pub use decode::decode;
pub use status::{admits, is_success};
