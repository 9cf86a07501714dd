use crate::api::ApiError;

/// Listing loads are never user-initiated: a failure is logged and the page
/// carries on with nothing to show.
pub fn or_empty<T>(what: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            log::error!("Error fetching {}: {}", what, err);
            Vec::new()
        }
    }
}
