use crate::data::StatusPolicy;

/// Returns `true` if the HTTP status code is in the 2xx range.
///
/// # Examples
///
/// ```
/// use dataservice_fetch::core::is_success;
///
/// assert!(is_success(200));
/// assert!(is_success(204));
/// assert!(!is_success(304));
/// assert!(!is_success(404));
/// ```
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Returns `true` if a response with `status` may go on to be decoded.
pub fn admits(policy: StatusPolicy, status: u16) -> bool {
    match policy {
        StatusPolicy::Ignore => true,
        StatusPolicy::RequireSuccess => is_success(status),
    }
}
