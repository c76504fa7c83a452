pub mod account;
pub mod appointment;
pub mod auth;
pub mod blog;
pub mod health;
pub mod notification;
pub mod portfolio;
pub mod stats;

use crate::error::ConsoleError;

/// Optional status filter from a query string. Unknown values are rejected
/// rather than silently widening the list.
pub(crate) fn status_filter<T>(
    value: Option<&str>,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, ConsoleError> {
    value
        .map(|v| parse(v).ok_or(ConsoleError::InvalidStatus))
        .transpose()
}
