//! Integration tests for Woodash.
//!
//! Each test spins up a fresh in-memory store (`woodash-mock-store`) on
//! an ephemeral port and drives it through `WooClient`, so the full
//! request/translation/error path is exercised without a real
//! WordPress installation.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p woodash-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use secrecy::SecretString;
use url::Url;
use woodash_client::WooClient;
use woodash_core::{StoreAuth, StoreConnection};
use woodash_mock_store::MockStore;

/// Start a mock store on an ephemeral port.
pub async fn spawn_store() -> (MockStore, SocketAddr) {
    let store = MockStore::new();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(woodash_mock_store::run(listener, store.clone()));
    (store, addr)
}

/// Client authenticated with a WordPress application password
/// (full capability set).
#[must_use]
pub fn wordpress_client(addr: SocketAddr) -> WooClient {
    client_for(
        addr,
        StoreAuth::WordPressBasic {
            username: "admin".to_string(),
            app_password: SecretString::from("app-password".to_string()),
        },
    )
}

/// Client authenticated with a WooCommerce consumer key pair
/// (core API only, no gated capabilities).
#[must_use]
pub fn key_pair_client(addr: SocketAddr) -> WooClient {
    client_for(
        addr,
        StoreAuth::WooCommerceKeyPair {
            consumer_key: "ck_test".to_string(),
            consumer_secret: SecretString::from("cs_test".to_string()),
        },
    )
}

fn client_for(addr: SocketAddr, auth: StoreAuth) -> WooClient {
    let base_url = Url::parse(&format!("http://{addr}/")).expect("base url");
    WooClient::new(StoreConnection::new(base_url, auth)).expect("client")
}
