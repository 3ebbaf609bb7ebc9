//! Connection probes and store diagnostics.

use serde_json::json;
use woodash_integration_tests::{key_pair_client, spawn_store, wordpress_client};

#[tokio::test]
async fn test_connection_succeeds_in_both_auth_modes() {
    let (_store, addr) = spawn_store().await;

    let wp = wordpress_client(addr).test_connection().await;
    assert!(wp.success);
    assert_eq!(wp.message.as_deref(), Some("Connection successful"));
    assert_eq!(wp.data, Some(true));

    let kp = key_pair_client(addr).test_connection().await;
    assert!(kp.success);
    assert_eq!(kp.data, Some(true));
}

#[tokio::test]
async fn test_store_info_aggregates_versions() {
    let (_store, addr) = spawn_store().await;
    let client = wordpress_client(addr);

    let info = client.store_info().await.data.expect("store info");
    assert_eq!(info.woocommerce_version.as_deref(), Some("9.0.0"));
    assert_eq!(info.wordpress_version.as_deref(), Some("6.5.1"));
    assert_eq!(info.php_version.as_deref(), Some("8.3.6"));
    assert!(info.errors.is_empty(), "unexpected errors: {:?}", info.errors);
    let site = info.site.expect("site info");
    assert_eq!(site.name, "Mock Store");
    assert!(site.namespaces.contains(&"wc/v3".to_string()));
}

#[tokio::test]
async fn test_store_status_counts_products() {
    let (store, addr) = spawn_store().await;
    let client = wordpress_client(addr);

    for i in 0..3 {
        store
            .seed_product(json!({"name": format!("P{i}"), "regular_price": "5.00"}))
            .await;
    }

    let status = client.store_status().await.data.expect("status");
    assert!(status.is_online);
    assert_eq!(status.product_count, 3);
    assert!(status.error.is_none());
}

#[tokio::test]
async fn test_store_status_reports_offline_stores() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let status = wordpress_client(addr)
        .store_status()
        .await
        .data
        .expect("status");
    assert!(!status.is_online);
    assert_eq!(status.product_count, 0);
    assert!(status.error.expect("error").starts_with("Network error:"));
}
