//! Product domain types.
//!
//! These are the *domain* shapes: camelCase JSON, decimal prices, and only
//! the fields the admin surface actually uses. The remote wire schema
//! carries a few dozen extra keys (`permalink`, `total_sales`,
//! `backorders`, ...) which the client crate drops during translation, so
//! nothing here ever holds wire vocabulary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Enumerations
// =============================================================================

/// Publication status of a product.
///
/// The remote set is open: a non-forced delete moves the product to
/// `trash`, scheduled products report `future`, and plugins can register
/// more. Anything outside the stock set is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Future,
    Pending,
    Private,
    #[default]
    Publish,
    Trash,
    #[serde(untagged)]
    Other(String),
}

/// WooCommerce product type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[default]
    Simple,
    Grouped,
    External,
    Variable,
}

/// Stock availability of a product or variation.
///
/// Inventory plugins register extra statuses; unknown values are carried
/// through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StockStatus {
    #[default]
    #[serde(rename = "instock")]
    InStock,
    #[serde(rename = "outofstock")]
    OutOfStock,
    #[serde(rename = "onbackorder")]
    OnBackorder,
    #[serde(untagged)]
    Other(String),
}

/// How a product is taxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxStatus {
    #[default]
    Taxable,
    Shipping,
    None,
}

// =============================================================================
// Nested records
// =============================================================================

/// A product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub src: String,
    pub name: String,
    pub alt: String,
    pub position: i64,
}

/// A product category reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A product tag reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// An attribute attached to a product (e.g. Color with options Red, Blue).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub visible: bool,
    /// Whether the attribute is used to generate variations.
    #[serde(default)]
    pub variation: bool,
    #[serde(default)]
    pub options: Vec<String>,
}

/// A global attribute definition (`wc/v3/products/attributes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// `select` or `text`; the store may register custom types.
    #[serde(default)]
    pub kind: String,
    /// Sort order: `menu_order`, `name`, `name_num`, or `id`.
    #[serde(default)]
    pub order_by: String,
    #[serde(default)]
    pub has_archives: bool,
}

/// A term of a global attribute (e.g. "Red" under "Color").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeTerm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub menu_order: i64,
    #[serde(default)]
    pub count: i64,
}

/// One attribute choice pinning a variation (e.g. Color = Red).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub option: String,
}

/// Physical dimensions, as free-form strings per the remote schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: String,
    pub width: String,
    pub height: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the domain model.
///
/// `price` is read-only: the remote system derives it from
/// `regular_price`/`sale_price`, and the adapter never sends it outbound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub sku: String,
    /// Effective price, computed remotely. Never sent outbound.
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub regular_price: Decimal,
    #[serde(default)]
    pub sale_price: Decimal,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub manage_stock: bool,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(rename = "type", default)]
    pub product_type: ProductType,
    #[serde(default)]
    pub tax_status: TaxStatus,
    #[serde(default)]
    pub reviews_allowed: bool,
    #[serde(default)]
    pub purchase_note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub categories: Vec<ProductCategory>,
    #[serde(default)]
    pub tags: Vec<ProductTag>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
}

/// A variation of a variable product (one attribute combination).
///
/// Same price/stock semantics as [`Product`], applied independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sku: String,
    /// Effective price, computed remotely. Never sent outbound.
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub regular_price: Decimal,
    #[serde(default)]
    pub sale_price: Decimal,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub manage_stock: bool,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub tax_status: TaxStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,
    #[serde(default)]
    pub attributes: Vec<VariationAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
}

/// An uploaded WordPress media item (allow-listed fields only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub mime_type: String,
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_wire_names() {
        let json = serde_json::to_string(&StockStatus::OnBackorder).expect("serialize");
        assert_eq!(json, "\"onbackorder\"");
        let parsed: StockStatus = serde_json::from_str("\"outofstock\"").expect("deserialize");
        assert_eq!(parsed, StockStatus::OutOfStock);
    }

    #[test]
    fn test_product_status_accepts_trash_and_unknown_values() {
        let trashed: ProductStatus = serde_json::from_str("\"trash\"").expect("deserialize");
        assert_eq!(trashed, ProductStatus::Trash);
        let custom: ProductStatus = serde_json::from_str("\"archived\"").expect("deserialize");
        assert_eq!(custom, ProductStatus::Other("archived".to_string()));
        // Unknown statuses round-trip as the original string.
        assert_eq!(
            serde_json::to_string(&custom).expect("serialize"),
            "\"archived\""
        );
    }

    #[test]
    fn test_product_type_serializes_as_type() {
        let product = Product {
            id: Some(1),
            name: "Widget".to_string(),
            description: String::new(),
            short_description: String::new(),
            sku: "W-1".to_string(),
            price: Decimal::ZERO,
            regular_price: Decimal::ZERO,
            sale_price: Decimal::ZERO,
            stock_quantity: 0,
            manage_stock: false,
            stock_status: StockStatus::default(),
            status: ProductStatus::default(),
            product_type: ProductType::Variable,
            tax_status: TaxStatus::default(),
            reviews_allowed: true,
            purchase_note: String::new(),
            weight: None,
            dimensions: Dimensions::default(),
            categories: vec![],
            tags: vec![],
            images: vec![],
            attributes: vec![],
            date_created: None,
            date_modified: None,
        };
        let value = serde_json::to_value(&product).expect("serialize");
        assert_eq!(value["type"], "variable");
        assert_eq!(value["stockStatus"], "instock");
        // Domain JSON is camelCase, never snake_case.
        assert!(value.get("stock_status").is_none());
    }

    #[test]
    fn test_dimensions_default_to_empty_strings() {
        let dims = Dimensions::default();
        assert_eq!(dims.length, "");
        assert_eq!(dims.width, "");
        assert_eq!(dims.height, "");
    }
}
