//! WooCommerce REST API client.
//!
//! Split by resource the way the remote API is: `products`, `variations`,
//! `attributes`, `orders`, `media`, and `system` each cover one endpoint
//! family, all funneling through the shared request core in `client`.
//! `wire` holds the private snake_case wire schema and `conversions`
//! translates wire records into domain types.

mod attributes;
mod client;
mod conversions;
mod inputs;
mod media;
mod orders;
mod products;
mod system;
mod variations;
mod wire;

pub use client::WooClient;
pub use inputs::{
    AttributeInput, CategoryInput, OrderPatch, ProductPatch, TagInput, TermInput, VariationPatch,
};
pub use system::{StoreInfo, WordPressInfo};

use thiserror::Error;
use woodash_core::{Capability, ConnectionError};

// =============================================================================
// Errors
// =============================================================================

/// Everything that can go wrong when talking to a store.
///
/// The public operation surface converts these into the
/// [`ApiResponse`](woodash_core::ApiResponse) envelope; the `Display`
/// output of each variant is exactly the `error` string operators see.
#[derive(Debug, Error)]
pub enum WooError {
    /// The connection is misconfigured (missing credentials, bad URL).
    /// Fatal for the client instance, never retried.
    #[error("{0}")]
    Config(String),

    /// The active authentication mode does not grant the capability the
    /// operation requires. Raised locally, before any request is sent.
    #[error("{}", .0.denial_message())]
    Permission(Capability),

    /// The request never produced an HTTP response (DNS, refused
    /// connection, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// The store answered with a non-success status. `message` is the
    /// best explanation extractable from the error body.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The store answered 2xx but the body did not match the expected
    /// schema.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<ConnectionError> for WooError {
    fn from(err: ConnectionError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_matches_envelope_contract() {
        let err = WooError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = WooError::Remote {
            status: 404,
            message: "HTTP 404: woocommerce_rest_product_invalid_id".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 404: woocommerce_rest_product_invalid_id"
        );

        let err = WooError::Parse("expected value at line 1".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to parse response: expected value at line 1"
        );
    }

    #[test]
    fn test_permission_error_uses_denial_message() {
        let err = WooError::Permission(Capability::UploadMedia);
        assert_eq!(
            err.to_string(),
            "Image upload requires WordPress authentication"
        );
        let err = WooError::Permission(Capability::ManageAttributes);
        assert_eq!(
            err.to_string(),
            "Product attribute management requires WordPress authentication"
        );
    }

    #[test]
    fn test_connection_error_converts_to_config() {
        let err: WooError = ConnectionError::MissingKeyPair.into();
        assert!(matches!(err, WooError::Config(_)));
        assert_eq!(
            err.to_string(),
            "WooCommerce consumer key or consumer secret is missing"
        );
    }
}
