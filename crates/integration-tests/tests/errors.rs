//! Error normalization: every failure class lands in the same envelope
//! shape with a human-readable string.

use woodash_core::FilterParams;
use woodash_integration_tests::{spawn_store, wordpress_client};

#[tokio::test]
async fn test_remote_error_surfaces_body_message() {
    let (_store, addr) = spawn_store().await;
    let client = wordpress_client(addr);

    let response = client.get_product(9999).await;
    assert!(!response.success);
    assert!(response.data.is_none());
    assert!(response.message.is_none());
    assert_eq!(response.error.as_deref(), Some("Invalid ID."));
}

#[tokio::test]
async fn test_transport_error_is_prefixed_and_enveloped() {
    // Bind a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = wordpress_client(addr);
    let response = client.list_products(&FilterParams::default()).await;
    assert!(!response.success);
    assert!(response.data.is_none());
    let error = response.error.expect("error string");
    assert!(
        error.starts_with("Network error:"),
        "unexpected error: {error}"
    );
}

#[tokio::test]
async fn test_failure_envelopes_share_one_shape() {
    let (_store, addr) = spawn_store().await;
    let client = wordpress_client(addr);

    // Remote 404 and a local capability denial produce identically
    // shaped envelopes, distinguishable only by the string.
    let remote = client.get_order(12345).await;
    let local = woodash_integration_tests::key_pair_client(addr)
        .upload_media("x.png", vec![0], "image/png")
        .await;

    for response in [
        serde_json::to_value(&remote).expect("serialize"),
        serde_json::to_value(&local).expect("serialize"),
    ] {
        assert_eq!(response["success"], false);
        assert!(response.get("data").is_none());
        assert!(response["error"].is_string());
        assert!(response.get("message").is_none());
    }
}
