//! Capability gating: key-pair connections are rejected locally for
//! privileged operations, WordPress connections get the full surface.

use rust_decimal::Decimal;
use woodash_client::{AttributeInput, TermInput, VariationPatch};
use woodash_core::{BatchRequest, Product, ProductType, VariationAttribute};
use woodash_integration_tests::{key_pair_client, spawn_store, wordpress_client};

fn dec(s: &str) -> Decimal {
    s.parse().expect("decimal literal")
}

#[tokio::test]
async fn test_key_pair_denials_never_touch_the_network() {
    let (store, addr) = spawn_store().await;
    let client = key_pair_client(addr);

    let upload = client.upload_media("pixel.png", vec![0u8; 4], "image/png").await;
    assert!(!upload.success);
    assert_eq!(
        upload.error.as_deref(),
        Some("Image upload requires WordPress authentication")
    );

    let attribute = client.create_attribute(&AttributeInput::named("Color")).await;
    assert!(!attribute.success);
    assert_eq!(
        attribute.error.as_deref(),
        Some("Product attribute management requires WordPress authentication")
    );

    let variation = client.create_variation(1, &VariationPatch::default()).await;
    assert!(!variation.success);
    assert_eq!(
        variation.error.as_deref(),
        Some("Product variations management requires WordPress authentication")
    );

    let batch = client
        .batch_variations(1, &BatchRequest::default())
        .await;
    assert!(!batch.success);
    assert_eq!(
        batch.error.as_deref(),
        Some("Product variations management requires WordPress authentication")
    );

    let terms = client
        .create_attribute_terms(1, &[TermInput::named("Red")])
        .await;
    assert!(!terms.success);

    // Every one of those failed before a request was dispatched.
    assert_eq!(store.request_count(), 0);
}

#[tokio::test]
async fn test_key_pair_reads_are_allowed() {
    let (store, addr) = spawn_store().await;
    let client = key_pair_client(addr);

    let products = client.list_products(&woodash_core::FilterParams::default()).await;
    assert!(products.success);
    let attributes = client.list_attributes().await;
    assert!(attributes.success);
    let variations = client.list_variations(1).await;
    assert!(variations.success);
    assert!(store.request_count() >= 3);
}

#[tokio::test]
async fn test_wordpress_attribute_and_term_management() {
    let (_store, addr) = spawn_store().await;
    let client = wordpress_client(addr);

    let created = client.create_attribute(&AttributeInput::named("Color")).await;
    assert!(created.success);
    assert_eq!(
        created.message.as_deref(),
        Some("Product attribute created successfully")
    );
    let attribute = created.data.expect("attribute");
    assert_eq!(attribute.slug.as_deref(), Some("pa_color"));
    assert_eq!(attribute.kind, "select");
    let attribute_id = attribute.id.expect("id");

    // All-settled fan-out: the duplicate fails, the rest still land.
    let settled = client
        .create_attribute_terms(
            attribute_id,
            &[
                TermInput::named("Red"),
                TermInput::named("Blue"),
                TermInput::named("Red"),
            ],
        )
        .await
        .data
        .expect("settled batch");
    assert_eq!(settled.succeeded.len(), 2);
    assert_eq!(settled.failed.len(), 1);
    assert!(settled.failed[0].contains("already exists"));

    let terms = client
        .list_attribute_terms(attribute_id)
        .await
        .data
        .expect("terms");
    assert_eq!(terms.len(), 2);

    let deleted = client.delete_attribute(attribute_id).await;
    assert!(deleted.success);
    assert!(client.list_attributes().await.data.expect("attributes").is_empty());
}

#[tokio::test]
async fn test_wordpress_variation_management() {
    let (_store, addr) = spawn_store().await;
    let client = wordpress_client(addr);

    let parent = client
        .create_product(&Product {
            name: "Variable Widget".to_string(),
            product_type: ProductType::Variable,
            regular_price: dec("24.99"),
            ..Product::default()
        })
        .await
        .data
        .expect("parent product");
    let product_id = parent.id.expect("id");

    let created = client
        .create_variation(
            product_id,
            &VariationPatch {
                sku: Some("VW-RED".to_string()),
                regular_price: Some(dec("19.99")),
                sale_price: Some(dec("14.99")),
                attributes: Some(vec![VariationAttribute {
                    id: None,
                    name: "Color".to_string(),
                    option: "Red".to_string(),
                }]),
                ..VariationPatch::default()
            },
        )
        .await;
    assert!(created.success);
    assert_eq!(
        created.message.as_deref(),
        Some("Product variation created successfully")
    );
    let variation = created.data.expect("variation");
    assert_eq!(variation.price, dec("14.99"));
    let variation_id = variation.id.expect("id");

    // Clearing the variation's sale works the same as for products.
    let updated = client
        .update_variation(
            product_id,
            variation_id,
            &VariationPatch {
                sale_price: Some(Decimal::ZERO),
                ..VariationPatch::default()
            },
        )
        .await
        .data
        .expect("updated variation");
    assert_eq!(updated.price, dec("19.99"));
    assert_eq!(updated.sale_price, Decimal::ZERO);

    let batch = client
        .batch_variations(
            product_id,
            &BatchRequest {
                create: vec![VariationPatch {
                    sku: Some("VW-BLUE".to_string()),
                    regular_price: Some(dec("21.99")),
                    ..VariationPatch::default()
                }],
                update: vec![],
                delete: vec![variation_id],
            },
        )
        .await
        .data
        .expect("batch result");
    assert_eq!(batch.create.len(), 1);
    assert_eq!(batch.delete.len(), 1);

    let remaining = client.list_variations(product_id).await.data.expect("variations");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].sku, "VW-BLUE");
}

#[tokio::test]
async fn test_wordpress_media_upload() {
    let (_store, addr) = spawn_store().await;
    let client = wordpress_client(addr);

    let uploaded = client
        .upload_media("pixel.png", vec![0u8; 16], "image/png")
        .await;
    assert!(uploaded.success, "upload failed: {:?}", uploaded.error);
    assert_eq!(uploaded.message.as_deref(), Some("Image uploaded successfully"));
    let media = uploaded.data.expect("media item");
    assert_eq!(media.title, "pixel.png");
    assert_eq!(media.mime_type, "image/png");
    assert!(media.source_url.ends_with("pixel.png"));
    assert_eq!(media.width, Some(800));
}
