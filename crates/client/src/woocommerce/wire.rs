//! Private wire schema for the WooCommerce and WordPress REST APIs.
//!
//! Everything in here is snake_case and deliberately lenient: the remote
//! API serializes prices and counts as strings, numbers, or `null`
//! depending on store configuration and plugin interference, so numeric
//! fields coerce instead of erroring. Unknown keys (`permalink`,
//! `total_sales`, `backorders`, and a few dozen more) are dropped by
//! serde's default behavior, which is what keeps wire vocabulary out of
//! the domain types.
//!
//! Outbound payload structs are the mirror image: every field optional,
//! prices re-serialized as strings, and *no* `price` field at all since
//! the remote system derives it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use woodash_core::{
    Dimensions, ProductAttribute, ProductCategory, ProductImage, ProductStatus, ProductTag,
    ProductType, StockStatus, TaxStatus, VariationAttribute,
};

use super::inputs::OrderPatch;

// =============================================================================
// Lenient deserializers
// =============================================================================

pub(crate) mod lenient {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Decimal from a string, number, or null; anything unparseable is 0.
    pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().map_or(Decimal::ZERO, coerce_decimal))
    }

    /// Integer from a string, number, or null; anything unparseable is 0.
    pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().map_or(0, coerce_int))
    }

    /// Truthiness coercion: null is false, numbers are non-zero, strings
    /// are non-empty (the API reports `manage_stock: "parent"` on some
    /// variations), everything else is true.
    pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().is_some_and(coerce_bool))
    }

    /// String with null collapsed to empty.
    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub(crate) fn coerce_decimal(value: &Value) -> Decimal {
        match value {
            Value::String(s) => s.trim().parse().unwrap_or(Decimal::ZERO),
            Value::Number(n) => n.to_string().parse().unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn coerce_int(value: &Value) -> i64 {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .ok()
                .or_else(|| s.trim().parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0),
            _ => 0,
        }
    }

    pub(crate) fn coerce_bool(value: &Value) -> bool {
        match value {
            Value::Bool(b) => *b,
            Value::Null => false,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

// =============================================================================
// Inbound records
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct WireImage {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub src: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub alt: String,
    #[serde(default)]
    pub position: Option<i64>,
}

/// Category and tag references share one wire shape.
#[derive(Debug, Deserialize)]
pub(crate) struct WireTermRef {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireProductAttribute {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub position: i64,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub visible: bool,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub variation: bool,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireDimensions {
    #[serde(default, deserialize_with = "lenient::string")]
    pub length: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub width: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub height: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireProduct {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub short_description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub sku: String,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub regular_price: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub sale_price: Decimal,
    #[serde(default, deserialize_with = "lenient::int")]
    pub stock_quantity: i64,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub manage_stock: bool,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(rename = "type", default)]
    pub product_type: ProductType,
    #[serde(default)]
    pub tax_status: TaxStatus,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub reviews_allowed: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub purchase_note: String,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub dimensions: WireDimensions,
    #[serde(default)]
    pub categories: Vec<WireTermRef>,
    #[serde(default)]
    pub tags: Vec<WireTermRef>,
    #[serde(default)]
    pub images: Vec<WireImage>,
    #[serde(default)]
    pub attributes: Vec<WireProductAttribute>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub date_modified: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireVariationAttribute {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub option: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireVariation {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub sku: String,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub regular_price: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub sale_price: Decimal,
    #[serde(default, deserialize_with = "lenient::int")]
    pub stock_quantity: i64,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub manage_stock: bool,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub tax_status: TaxStatus,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub dimensions: WireDimensions,
    #[serde(default)]
    pub image: Option<WireImage>,
    #[serde(default)]
    pub attributes: Vec<WireVariationAttribute>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub date_modified: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireAttributeDefinition {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub order_by: String,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub has_archives: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireAttributeTerm {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub menu_order: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub count: i64,
}

/// WordPress wraps rich-text fields in `{ "rendered": ... }`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireRendered {
    #[serde(default, deserialize_with = "lenient::string")]
    pub rendered: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireMediaDetails {
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMedia {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub link: String,
    #[serde(default)]
    pub title: WireRendered,
    #[serde(default, deserialize_with = "lenient::string")]
    pub alt_text: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub media_type: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mime_type: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source_url: String,
    #[serde(default)]
    pub media_details: WireMediaDetails,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireAddress {
    #[serde(default, deserialize_with = "lenient::string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_1: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_2: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub postcode: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub country: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLineItem {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub product_id: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub variation_id: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub sku: String,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "lenient::string")]
    pub subtotal: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub subtotal_tax: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub total: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub total_tax: String,
    #[serde(default)]
    pub image: Option<WireImage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireShippingLine {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub method_title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub method_id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub total: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub total_tax: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireTaxLine {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub rate_code: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub compound: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub tax_total: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub shipping_tax_total: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireFeeLine {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub total: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub total_tax: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCouponLine {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub discount: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub discount_tax: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireOrder {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub number: String,
    #[serde(default)]
    pub status: woodash_core::OrderStatus,
    #[serde(default, deserialize_with = "lenient::string")]
    pub currency: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub total: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub total_tax: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub customer_id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub customer_note: String,
    #[serde(default)]
    pub billing: WireAddress,
    #[serde(default)]
    pub shipping: WireAddress,
    #[serde(default, deserialize_with = "lenient::string")]
    pub payment_method: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub payment_method_title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub transaction_id: String,
    #[serde(default)]
    pub line_items: Vec<WireLineItem>,
    #[serde(default)]
    pub shipping_lines: Vec<WireShippingLine>,
    #[serde(default)]
    pub tax_lines: Vec<WireTaxLine>,
    #[serde(default)]
    pub fee_lines: Vec<WireFeeLine>,
    #[serde(default)]
    pub coupon_lines: Vec<WireCouponLine>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub date_created: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub date_modified: String,
    #[serde(default)]
    pub date_paid: Option<String>,
    #[serde(default)]
    pub date_completed: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireBatchResponse<T> {
    #[serde(default = "Vec::new")]
    pub create: Vec<T>,
    #[serde(default = "Vec::new")]
    pub update: Vec<T>,
    #[serde(default = "Vec::new")]
    pub delete: Vec<T>,
}

// =============================================================================
// Outbound payloads
// =============================================================================

/// Product create/update body. There is deliberately no `price` field:
/// the remote system derives it from the regular and sale prices, and
/// sending it causes silent drift on some store versions.
#[derive(Debug, Default, Serialize)]
pub(crate) struct ProductPayload {
    /// Only set for batch update entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,
    /// Always present on full payloads, `"0"` included: sending `"0"`
    /// is how a sale price gets cleared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<TaxStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<ProductCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ProductTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<ProductAttribute>>,
}

/// Variation create/update body. Same `price` omission as products.
#[derive(Debug, Default, Serialize)]
pub(crate) struct VariationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<TaxStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<VariationAttribute>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AttributePayload {
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub order_by: String,
    pub has_archives: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct TermPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TagPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<woodash_core::OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,
}

impl From<&OrderPatch> for OrderPayload {
    fn from(patch: &OrderPatch) -> Self {
        Self {
            status: patch.status.clone(),
            customer_note: patch.customer_note.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchPayload<T> {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub create: Vec<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub update: Vec<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub delete: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_decimal_coercion_accepts_all_wire_shapes() {
        assert_eq!(
            lenient::coerce_decimal(&json!("19.99")),
            "19.99".parse::<Decimal>().expect("decimal")
        );
        assert_eq!(
            lenient::coerce_decimal(&json!(24.5)),
            "24.5".parse::<Decimal>().expect("decimal")
        );
        assert_eq!(lenient::coerce_decimal(&json!(7)), Decimal::from(7));
        assert_eq!(lenient::coerce_decimal(&Value::Null), Decimal::ZERO);
        assert_eq!(lenient::coerce_decimal(&json!("")), Decimal::ZERO);
        assert_eq!(lenient::coerce_decimal(&json!("abc")), Decimal::ZERO);
    }

    #[test]
    fn test_int_coercion() {
        assert_eq!(lenient::coerce_int(&json!(12)), 12);
        assert_eq!(lenient::coerce_int(&json!("12")), 12);
        assert_eq!(lenient::coerce_int(&Value::Null), 0);
        assert_eq!(lenient::coerce_int(&json!("garbage")), 0);
    }

    #[test]
    fn test_bool_coercion() {
        assert!(lenient::coerce_bool(&json!(true)));
        assert!(!lenient::coerce_bool(&json!(false)));
        assert!(!lenient::coerce_bool(&Value::Null));
        // Variations report manage_stock as the string "parent".
        assert!(lenient::coerce_bool(&json!("parent")));
        assert!(!lenient::coerce_bool(&json!("")));
        assert!(lenient::coerce_bool(&json!(1)));
        assert!(!lenient::coerce_bool(&json!(0)));
    }

    #[test]
    fn test_wire_product_tolerates_null_and_string_numerics() {
        let product: WireProduct = serde_json::from_value(json!({
            "id": 5,
            "name": "Widget",
            "price": null,
            "regular_price": "19.99",
            "sale_price": "",
            "stock_quantity": "7",
            "manage_stock": true,
            "permalink": "https://shop.example.com/widget",
            "total_sales": 120,
            "backorders": "no"
        }))
        .expect("lenient deserialize");
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(
            product.regular_price,
            "19.99".parse::<Decimal>().expect("decimal")
        );
        assert_eq!(product.sale_price, Decimal::ZERO);
        assert_eq!(product.stock_quantity, 7);
    }

    #[test]
    fn test_trashed_product_still_deserializes() {
        // A non-forced delete leaves the product behind with this status.
        let product: WireProduct = serde_json::from_value(json!({
            "id": 8,
            "name": "Widget",
            "status": "trash"
        }))
        .expect("deserialize");
        assert_eq!(product.status, ProductStatus::Trash);
    }

    #[test]
    fn test_custom_order_status_still_deserializes() {
        let order: WireOrder = serde_json::from_value(json!({
            "id": 12,
            "number": "12",
            "status": "wc-shipment-ready"
        }))
        .expect("deserialize");
        assert_eq!(
            order.status,
            woodash_core::OrderStatus::Other("wc-shipment-ready".to_string())
        );
    }

    #[test]
    fn test_product_payload_never_serializes_price() {
        let payload = ProductPayload {
            name: Some("Widget".to_string()),
            regular_price: Some("19.99".to_string()),
            sale_price: Some("0".to_string()),
            ..ProductPayload::default()
        };
        let value = serde_json::to_value(&payload).expect("serialize");
        assert!(value.get("price").is_none());
        assert_eq!(value["sale_price"], "0");
        assert_eq!(value["regular_price"], "19.99");
        // Unset fields stay off the wire entirely.
        assert!(value.get("stock_quantity").is_none());
    }

    #[test]
    fn test_batch_payload_skips_empty_sections() {
        let payload = BatchPayload::<ProductPayload> {
            create: vec![],
            update: vec![],
            delete: vec![3, 4],
        };
        let value = serde_json::to_value(&payload).expect("serialize");
        assert!(value.get("create").is_none());
        assert!(value.get("update").is_none());
        assert_eq!(value["delete"], json!([3, 4]));
    }
}
