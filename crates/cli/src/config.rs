//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `WOODASH_STORE_URL` - Store site root (e.g., `https://shop.example.com`)
//!
//! ## Authentication (one pair required)
//! - `WOODASH_USERNAME` / `WOODASH_APP_PASSWORD` - WordPress application
//!   password (full capability set: media, attributes, variations)
//! - `WOODASH_CONSUMER_KEY` / `WOODASH_CONSUMER_SECRET` - WooCommerce REST
//!   key pair (core product/order API only)
//!
//! ## Optional
//! - `WOODASH_AUTH` - `wordpress` or `keypair`, to pick a mode explicitly
//!   when both credential pairs are present (default: WordPress if
//!   `WOODASH_USERNAME` is set)

use std::env;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;
use woodash_core::{StoreAuth, StoreConnection};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Resolved CLI configuration.
#[derive(Debug)]
pub struct CliConfig {
    pub connection: StoreConnection,
}

impl CliConfig {
    /// Load the store connection from the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first missing or malformed
    /// variable.
    pub fn load() -> Result<Self, ConfigError> {
        let raw_url = require("WOODASH_STORE_URL")?;
        let base_url = Url::parse(&raw_url)
            .map_err(|err| ConfigError::InvalidEnvVar("WOODASH_STORE_URL".into(), err.to_string()))?;

        let auth = match env::var("WOODASH_AUTH").ok().as_deref() {
            Some("wordpress") => wordpress_auth()?,
            Some("keypair") => key_pair_auth()?,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "WOODASH_AUTH".into(),
                    format!("expected 'wordpress' or 'keypair', got '{other}'"),
                ));
            }
            None if env::var("WOODASH_USERNAME").is_ok() => wordpress_auth()?,
            None => key_pair_auth()?,
        };

        Ok(Self {
            connection: StoreConnection::new(base_url, auth),
        })
    }
}

fn wordpress_auth() -> Result<StoreAuth, ConfigError> {
    Ok(StoreAuth::WordPressBasic {
        username: require("WOODASH_USERNAME")?,
        app_password: SecretString::from(require("WOODASH_APP_PASSWORD")?),
    })
}

fn key_pair_auth() -> Result<StoreAuth, ConfigError> {
    Ok(StoreAuth::WooCommerceKeyPair {
        consumer_key: require("WOODASH_CONSUMER_KEY")?,
        consumer_secret: SecretString::from(require("WOODASH_CONSUMER_SECRET")?),
    })
}

fn require(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
