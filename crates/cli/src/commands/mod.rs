//! Command implementations.

pub mod orders;
pub mod products;
pub mod store;

use serde::Serialize;
use woodash_core::ApiResponse;

/// Print an envelope as pretty JSON, or fail with its error string.
pub(crate) fn render<T: Serialize>(
    response: &ApiResponse<T>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !response.success {
        let error = response
            .error
            .clone()
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(error.into());
    }
    if let Some(message) = &response.message {
        println!("{message}");
    }
    if let Some(data) = &response.data {
        println!("{}", serde_json::to_string_pretty(data)?);
    }
    Ok(())
}
