//! Product, variation, attribute, and media conversions.

use rust_decimal::Decimal;
use woodash_core::{
    AttributeDefinition, AttributeTerm, Dimensions, MediaItem, Product, ProductAttribute,
    ProductCategory, ProductImage, ProductTag, ProductVariation, VariationAttribute,
};

use crate::woocommerce::inputs::{
    AttributeInput, CategoryInput, ProductPatch, TagInput, TermInput, VariationPatch,
};
use crate::woocommerce::wire::{
    AttributePayload, CategoryPayload, ProductPayload, TagPayload, TermPayload, VariationPayload,
    WireAttributeDefinition, WireAttributeTerm, WireDimensions, WireImage, WireMedia, WireProduct,
    WireProductAttribute, WireTermRef, WireVariation, WireVariationAttribute,
};

// =============================================================================
// Inbound
// =============================================================================

pub(crate) fn product_from_wire(wire: WireProduct) -> Product {
    Product {
        id: Some(wire.id),
        name: wire.name,
        description: wire.description,
        short_description: wire.short_description,
        sku: wire.sku,
        price: wire.price,
        regular_price: wire.regular_price,
        sale_price: wire.sale_price,
        stock_quantity: wire.stock_quantity,
        manage_stock: wire.manage_stock,
        stock_status: wire.stock_status,
        status: wire.status,
        product_type: wire.product_type,
        tax_status: wire.tax_status,
        reviews_allowed: wire.reviews_allowed,
        purchase_note: wire.purchase_note,
        weight: wire.weight,
        dimensions: dimensions_from_wire(wire.dimensions),
        categories: wire.categories.into_iter().map(category_from_wire).collect(),
        tags: wire.tags.into_iter().map(tag_from_wire).collect(),
        images: wire
            .images
            .into_iter()
            .enumerate()
            .map(|(index, image)| image_from_wire(image, index))
            .collect(),
        attributes: wire
            .attributes
            .into_iter()
            .map(product_attribute_from_wire)
            .collect(),
        date_created: wire.date_created,
        date_modified: wire.date_modified,
    }
}

pub(crate) fn variation_from_wire(wire: WireVariation) -> ProductVariation {
    ProductVariation {
        id: Some(wire.id),
        description: wire.description,
        sku: wire.sku,
        price: wire.price,
        regular_price: wire.regular_price,
        sale_price: wire.sale_price,
        stock_quantity: wire.stock_quantity,
        manage_stock: wire.manage_stock,
        stock_status: wire.stock_status,
        tax_status: wire.tax_status,
        weight: wire.weight,
        dimensions: dimensions_from_wire(wire.dimensions),
        image: wire.image.map(|image| image_from_wire(image, 0)),
        attributes: wire
            .attributes
            .into_iter()
            .map(variation_attribute_from_wire)
            .collect(),
        date_created: wire.date_created,
        date_modified: wire.date_modified,
    }
}

/// Images missing a name or position inherit one from their list slot.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn image_from_wire(wire: WireImage, index: usize) -> ProductImage {
    ProductImage {
        id: wire.id,
        src: wire.src,
        name: if wire.name.is_empty() {
            format!("Image {}", index + 1)
        } else {
            wire.name
        },
        alt: wire.alt,
        position: wire.position.unwrap_or(index as i64),
    }
}

pub(crate) fn category_from_wire(wire: WireTermRef) -> ProductCategory {
    ProductCategory {
        id: wire.id,
        name: wire.name,
        slug: wire.slug,
    }
}

pub(crate) fn tag_from_wire(wire: WireTermRef) -> ProductTag {
    ProductTag {
        id: wire.id,
        name: wire.name,
        slug: wire.slug,
    }
}

pub(crate) fn product_attribute_from_wire(wire: WireProductAttribute) -> ProductAttribute {
    ProductAttribute {
        id: wire.id,
        name: wire.name,
        slug: wire.slug,
        position: wire.position,
        visible: wire.visible,
        variation: wire.variation,
        options: wire.options,
    }
}

pub(crate) fn variation_attribute_from_wire(wire: WireVariationAttribute) -> VariationAttribute {
    VariationAttribute {
        id: wire.id,
        name: wire.name,
        option: wire.option,
    }
}

pub(crate) fn attribute_definition_from_wire(wire: WireAttributeDefinition) -> AttributeDefinition {
    AttributeDefinition {
        id: wire.id,
        name: wire.name,
        slug: wire.slug,
        kind: wire.kind,
        order_by: wire.order_by,
        has_archives: wire.has_archives,
    }
}

pub(crate) fn attribute_term_from_wire(wire: WireAttributeTerm) -> AttributeTerm {
    AttributeTerm {
        id: wire.id,
        name: wire.name,
        slug: wire.slug,
        description: wire.description,
        menu_order: wire.menu_order,
        count: wire.count,
    }
}

pub(crate) fn media_from_wire(wire: WireMedia) -> MediaItem {
    MediaItem {
        id: wire.id,
        date: wire.date,
        slug: wire.slug,
        link: wire.link,
        title: wire.title.rendered,
        alt_text: wire.alt_text,
        media_type: wire.media_type,
        mime_type: wire.mime_type,
        source_url: wire.source_url,
        width: wire.media_details.width,
        height: wire.media_details.height,
    }
}

pub(crate) fn dimensions_from_wire(wire: WireDimensions) -> Dimensions {
    Dimensions {
        length: wire.length,
        width: wire.width,
        height: wire.height,
    }
}

// =============================================================================
// Outbound
// =============================================================================

/// Decimal to the remote string form; zero comes out as `"0"`.
pub(crate) fn price_string(price: Decimal) -> String {
    price.normalize().to_string()
}

/// Full create body. Every field is populated, including a `sale_price`
/// of `"0"` when the product has no sale, because `"0"` is the documented
/// way to clear one.
pub(crate) fn product_payload(product: &Product) -> ProductPayload {
    ProductPayload {
        id: None,
        name: Some(product.name.clone()),
        description: Some(product.description.clone()),
        short_description: Some(product.short_description.clone()),
        sku: Some(product.sku.clone()),
        regular_price: Some(price_string(product.regular_price)),
        sale_price: Some(price_string(product.sale_price)),
        stock_quantity: Some(product.stock_quantity),
        manage_stock: Some(product.manage_stock),
        stock_status: Some(product.stock_status.clone()),
        status: Some(product.status.clone()),
        product_type: Some(product.product_type),
        tax_status: Some(product.tax_status),
        reviews_allowed: Some(product.reviews_allowed),
        purchase_note: Some(product.purchase_note.clone()),
        weight: product.weight.clone(),
        dimensions: Some(product.dimensions.clone()),
        categories: Some(product.categories.clone()),
        tags: Some(product.tags.clone()),
        images: Some(product.images.clone()),
        attributes: Some(product.attributes.clone()),
    }
}

/// Sparse update body: only the fields the patch sets go on the wire.
pub(crate) fn product_patch_payload(patch: &ProductPatch) -> ProductPayload {
    ProductPayload {
        id: patch.id,
        name: patch.name.clone(),
        description: patch.description.clone(),
        short_description: patch.short_description.clone(),
        sku: patch.sku.clone(),
        regular_price: patch.regular_price.map(price_string),
        sale_price: patch.sale_price.map(price_string),
        stock_quantity: patch.stock_quantity,
        manage_stock: patch.manage_stock,
        stock_status: patch.stock_status.clone(),
        status: patch.status.clone(),
        product_type: patch.product_type,
        tax_status: patch.tax_status,
        reviews_allowed: patch.reviews_allowed,
        purchase_note: patch.purchase_note.clone(),
        weight: patch.weight.clone(),
        dimensions: patch.dimensions.clone(),
        categories: patch.categories.clone(),
        tags: patch.tags.clone(),
        images: patch.images.clone(),
        attributes: patch.attributes.clone(),
    }
}

pub(crate) fn variation_patch_payload(patch: &VariationPatch) -> VariationPayload {
    VariationPayload {
        id: patch.id,
        description: patch.description.clone(),
        sku: patch.sku.clone(),
        regular_price: patch.regular_price.map(price_string),
        sale_price: patch.sale_price.map(price_string),
        stock_quantity: patch.stock_quantity,
        manage_stock: patch.manage_stock,
        stock_status: patch.stock_status.clone(),
        tax_status: patch.tax_status,
        weight: patch.weight.clone(),
        dimensions: patch.dimensions.clone(),
        image: patch.image.clone(),
        attributes: patch.attributes.clone(),
    }
}

pub(crate) fn attribute_payload(input: &AttributeInput) -> AttributePayload {
    AttributePayload {
        name: input.name.clone(),
        slug: input.effective_slug(),
        kind: input.kind.clone().unwrap_or_else(|| "select".to_string()),
        order_by: input
            .order_by
            .clone()
            .unwrap_or_else(|| "menu_order".to_string()),
        has_archives: input.has_archives,
    }
}

pub(crate) fn term_payload(input: &TermInput) -> TermPayload {
    TermPayload {
        name: input.name.clone(),
        slug: input.slug.clone(),
        description: input.description.clone(),
        menu_order: input.menu_order,
    }
}

pub(crate) fn category_payload(input: &CategoryInput) -> CategoryPayload {
    CategoryPayload {
        name: input.name.clone(),
        slug: input.slug.clone(),
        parent: input.parent,
        description: input.description.clone(),
    }
}

pub(crate) fn tag_payload(input: &TagInput) -> TagPayload {
    TagPayload {
        name: input.name.clone(),
        slug: input.slug.clone(),
        description: input.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget_wire() -> WireProduct {
        serde_json::from_value(json!({
            "id": 101,
            "name": "Widget",
            "slug": "widget",
            "permalink": "https://shop.example.com/product/widget",
            "type": "simple",
            "status": "publish",
            "description": "<p>A widget.</p>",
            "short_description": "Widget.",
            "sku": "W-101",
            "price": "19.99",
            "regular_price": "24.99",
            "sale_price": "19.99",
            "on_sale": true,
            "purchasable": true,
            "total_sales": 7,
            "tax_status": "taxable",
            "manage_stock": true,
            "stock_quantity": 12,
            "stock_status": "instock",
            "backorders": "no",
            "backorders_allowed": false,
            "shipping_required": true,
            "shipping_class_id": 0,
            "average_rating": "4.60",
            "rating_count": 5,
            "related_ids": [44, 45],
            "meta_data": [{"id": 1, "key": "_internal", "value": "x"}],
            "images": [
                {"id": 9, "src": "https://cdn.example.com/w.jpg", "name": "", "alt": ""}
            ],
            "categories": [{"id": 3, "name": "Gadgets", "slug": "gadgets"}],
            "tags": [],
            "attributes": [],
            "date_created": "2024-05-01T10:00:00",
            "date_modified": "2024-05-02T10:00:00"
        }))
        .expect("wire product")
    }

    #[test]
    fn test_wire_keys_never_reach_the_domain() {
        let product = product_from_wire(widget_wire());
        let value = serde_json::to_value(&product).expect("serialize");
        for wire_key in [
            "permalink",
            "total_sales",
            "on_sale",
            "purchasable",
            "backorders",
            "average_rating",
            "related_ids",
            "meta_data",
            "shipping_class_id",
        ] {
            assert!(value.get(wire_key).is_none(), "leaked key: {wire_key}");
        }
        // Domain JSON is camelCase.
        assert_eq!(value["shortDescription"], "Widget.");
        assert_eq!(value["regularPrice"], "24.99");
        assert!(value.get("short_description").is_none());
    }

    #[test]
    fn test_image_defaults_come_from_list_position() {
        let product = product_from_wire(widget_wire());
        assert_eq!(product.images[0].name, "Image 1");
        assert_eq!(product.images[0].position, 0);
        assert_eq!(product.images[0].id, Some(9));
    }

    #[test]
    fn test_create_payload_always_sends_sale_price() {
        let mut product = product_from_wire(widget_wire());
        product.sale_price = Decimal::ZERO;
        let value = serde_json::to_value(product_payload(&product)).expect("serialize");
        assert_eq!(value["sale_price"], "0");
        assert_eq!(value["regular_price"], "24.99");
        assert!(value.get("price").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_patch_payload_only_sends_set_fields() {
        let patch = ProductPatch {
            sale_price: Some("9.99".parse().expect("decimal")),
            stock_quantity: Some(3),
            ..ProductPatch::default()
        };
        let value = serde_json::to_value(product_patch_payload(&patch)).expect("serialize");
        assert_eq!(value["sale_price"], "9.99");
        assert_eq!(value["stock_quantity"], 3);
        assert!(value.get("name").is_none());
        assert!(value.get("regular_price").is_none());
        assert!(value.get("price").is_none());
    }

    #[test]
    fn test_price_string_normalizes_zero_and_keeps_cents() {
        assert_eq!(price_string(Decimal::ZERO), "0");
        assert_eq!(price_string("19.99".parse().expect("decimal")), "19.99");
        assert_eq!(price_string("0.00".parse().expect("decimal")), "0");
    }

    #[test]
    fn test_attribute_payload_fills_remote_defaults() {
        let payload = attribute_payload(&AttributeInput::named("Shoe Size"));
        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(value["slug"], "pa_shoe-size");
        assert_eq!(value["type"], "select");
        assert_eq!(value["order_by"], "menu_order");
        assert_eq!(value["has_archives"], false);
    }

    #[test]
    fn test_media_title_unwraps_rendered() {
        let wire: WireMedia = serde_json::from_value(json!({
            "id": 77,
            "date": "2024-05-01T10:00:00",
            "slug": "w-jpg",
            "link": "https://shop.example.com/?attachment_id=77",
            "title": {"rendered": "w.jpg"},
            "alt_text": "",
            "media_type": "image",
            "mime_type": "image/jpeg",
            "source_url": "https://cdn.example.com/w.jpg",
            "media_details": {"width": 800, "height": 600, "file": "2024/05/w.jpg"}
        }))
        .expect("wire media");
        let media = media_from_wire(wire);
        assert_eq!(media.title, "w.jpg");
        assert_eq!(media.width, Some(800));
    }
}
