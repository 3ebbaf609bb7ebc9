//! Store connection and capability types.
//!
//! A [`StoreConnection`] identifies one WooCommerce store and the way we
//! authenticate against it. The two authentication modes grant different
//! capability sets: WordPress application passwords unlock the full admin
//! surface (media upload, attribute and variation management), while a
//! WooCommerce consumer key pair is limited to the core product/order API.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors produced when validating a store connection.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("WordPress username or application password is missing")]
    MissingWordPressCredentials,
    #[error("WooCommerce consumer key or consumer secret is missing")]
    MissingKeyPair,
}

/// Operations that only some authentication modes may perform.
///
/// Gated operations check `auth.can(capability)` *before* dispatching any
/// request; a denied capability is a local, non-retryable rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Upload files through the WordPress media endpoint.
    UploadMedia,
    /// Create, update, or delete product attributes and attribute terms.
    ManageAttributes,
    /// Create, update, delete, or batch-edit product variations.
    ManageVariations,
}

impl Capability {
    /// Fixed rejection message shown when the active connection lacks
    /// this capability.
    #[must_use]
    pub const fn denial_message(self) -> &'static str {
        match self {
            Self::UploadMedia => "Image upload requires WordPress authentication",
            Self::ManageAttributes => {
                "Product attribute management requires WordPress authentication"
            }
            Self::ManageVariations => {
                "Product variations management requires WordPress authentication"
            }
        }
    }
}

/// Credentials for one of the two supported authentication modes.
///
/// The enum shape guarantees credentials always match the mode; empty
/// strings are still rejected by [`StoreAuth::validate`].
#[derive(Clone)]
pub enum StoreAuth {
    /// WordPress application password (full admin capability set).
    WordPressBasic {
        username: String,
        app_password: SecretString,
    },
    /// WooCommerce REST consumer key pair (core product/order API only).
    WooCommerceKeyPair {
        consumer_key: String,
        consumer_secret: SecretString,
    },
}

impl StoreAuth {
    /// Check that the credentials are actually present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectionError`] naming the missing credential. This is
    /// a fatal configuration error, not a retryable one.
    pub fn validate(&self) -> Result<(), ConnectionError> {
        match self {
            Self::WordPressBasic {
                username,
                app_password,
            } => {
                if username.is_empty() || app_password.expose_secret().is_empty() {
                    return Err(ConnectionError::MissingWordPressCredentials);
                }
            }
            Self::WooCommerceKeyPair {
                consumer_key,
                consumer_secret,
            } => {
                if consumer_key.is_empty() || consumer_secret.expose_secret().is_empty() {
                    return Err(ConnectionError::MissingKeyPair);
                }
            }
        }
        Ok(())
    }

    /// Whether this authentication mode grants the given capability.
    #[must_use]
    pub const fn can(&self, _capability: Capability) -> bool {
        // All gated operations currently require the WordPress admin surface;
        // the key pair mode grants none of them.
        matches!(self, Self::WordPressBasic { .. })
    }

    /// The HTTP Basic user for this mode.
    #[must_use]
    pub fn basic_user(&self) -> &str {
        match self {
            Self::WordPressBasic { username, .. } => username,
            Self::WooCommerceKeyPair { consumer_key, .. } => consumer_key,
        }
    }

    /// The HTTP Basic password for this mode.
    #[must_use]
    pub fn basic_password(&self) -> &str {
        match self {
            Self::WordPressBasic { app_password, .. } => app_password.expose_secret(),
            Self::WooCommerceKeyPair {
                consumer_secret, ..
            } => consumer_secret.expose_secret(),
        }
    }
}

impl std::fmt::Debug for StoreAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WordPressBasic { username, .. } => f
                .debug_struct("WordPressBasic")
                .field("username", username)
                .field("app_password", &"[REDACTED]")
                .finish(),
            Self::WooCommerceKeyPair { consumer_key, .. } => f
                .debug_struct("WooCommerceKeyPair")
                .field("consumer_key", consumer_key)
                .field("consumer_secret", &"[REDACTED]")
                .finish(),
        }
    }
}

/// One WooCommerce store and how to reach it.
#[derive(Debug, Clone)]
pub struct StoreConnection {
    /// Site root, e.g. `https://shop.example.com` (no trailing slash needed;
    /// the adapter normalizes it).
    pub base_url: Url,
    /// Authentication mode and credentials.
    pub auth: StoreAuth,
}

impl StoreConnection {
    /// Create a connection from a base URL and credentials.
    #[must_use]
    pub const fn new(base_url: Url, auth: StoreAuth) -> Self {
        Self { base_url, auth }
    }

    /// Validate that credentials are present for the declared mode.
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectionError`] if either credential is empty.
    pub fn validate(&self) -> Result<(), ConnectionError> {
        self.auth.validate()
    }
}

/// A store's last observed status, as reported by connection tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStatus {
    pub is_online: bool,
    pub last_checked: String,
    pub product_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp_auth(username: &str, password: &str) -> StoreAuth {
        StoreAuth::WordPressBasic {
            username: username.to_string(),
            app_password: SecretString::from(password.to_string()),
        }
    }

    fn key_pair(key: &str, secret: &str) -> StoreAuth {
        StoreAuth::WooCommerceKeyPair {
            consumer_key: key.to_string(),
            consumer_secret: SecretString::from(secret.to_string()),
        }
    }

    #[test]
    fn test_wordpress_auth_grants_all_capabilities() {
        let auth = wp_auth("admin", "pass");
        assert!(auth.can(Capability::UploadMedia));
        assert!(auth.can(Capability::ManageAttributes));
        assert!(auth.can(Capability::ManageVariations));
    }

    #[test]
    fn test_key_pair_grants_no_gated_capability() {
        let auth = key_pair("ck_123", "cs_456");
        assert!(!auth.can(Capability::UploadMedia));
        assert!(!auth.can(Capability::ManageAttributes));
        assert!(!auth.can(Capability::ManageVariations));
    }

    #[test]
    fn test_empty_wordpress_password_is_invalid() {
        let auth = wp_auth("admin", "");
        assert!(matches!(
            auth.validate(),
            Err(ConnectionError::MissingWordPressCredentials)
        ));
    }

    #[test]
    fn test_empty_consumer_key_is_invalid() {
        let auth = key_pair("", "cs_456");
        assert!(matches!(
            auth.validate(),
            Err(ConnectionError::MissingKeyPair)
        ));
    }

    #[test]
    fn test_valid_credentials_pass_validation() {
        assert!(wp_auth("admin", "app-pass").validate().is_ok());
        assert!(key_pair("ck_123", "cs_456").validate().is_ok());
    }

    #[test]
    fn test_basic_credentials_follow_mode() {
        let auth = key_pair("ck_123", "cs_456");
        assert_eq!(auth.basic_user(), "ck_123");
        assert_eq!(auth.basic_password(), "cs_456");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let auth = wp_auth("admin", "super-secret-password");
        let output = format!("{auth:?}");
        assert!(output.contains("admin"));
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("super-secret-password"));
    }

    #[test]
    fn test_denial_messages_are_fixed() {
        assert_eq!(
            Capability::UploadMedia.denial_message(),
            "Image upload requires WordPress authentication"
        );
        assert_eq!(
            Capability::ManageVariations.denial_message(),
            "Product variations management requires WordPress authentication"
        );
    }
}
