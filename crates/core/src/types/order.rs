//! Order domain types.
//!
//! Orders are read-mostly: the adapter lists, fetches, and patches them
//! (status, customer note) but never creates them. Monetary totals stay as
//! the remote system's pre-formatted strings; only line-item unit prices
//! are numeric.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::ProductImage;

/// WooCommerce order lifecycle status.
///
/// Plugins register custom statuses (`wc-shipment-ready` and the like),
/// so the set is open: unknown values are carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
    CheckoutDraft,
    Trash,
    #[serde(untagged)]
    Other(String),
}

/// A billing or shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address_1: String,
    #[serde(default)]
    pub address_2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// One purchased product line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: i64,
    pub name: String,
    pub product_id: i64,
    #[serde(default)]
    pub variation_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub subtotal: String,
    #[serde(default)]
    pub subtotal_tax: String,
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub total_tax: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,
}

/// A shipping charge on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingLine {
    pub id: i64,
    pub method_title: String,
    pub method_id: String,
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub total_tax: String,
}

/// A tax total on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxLine {
    pub id: i64,
    pub rate_code: String,
    pub label: String,
    #[serde(default)]
    pub compound: bool,
    #[serde(default)]
    pub tax_total: String,
    #[serde(default)]
    pub shipping_tax_total: String,
}

/// An extra fee on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeLine {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub total_tax: String,
}

/// A coupon applied to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponLine {
    pub id: i64,
    pub code: String,
    #[serde(default)]
    pub discount: String,
    #[serde(default)]
    pub discount_tax: String,
}

/// An order in the domain model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub number: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub total_tax: String,
    #[serde(default)]
    pub customer_id: i64,
    #[serde(default)]
    pub customer_note: String,
    #[serde(default)]
    pub billing: Address,
    #[serde(default)]
    pub shipping: Address,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_method_title: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub shipping_lines: Vec<ShippingLine>,
    #[serde(default)]
    pub tax_lines: Vec<TaxLine>,
    #[serde(default)]
    pub fee_lines: Vec<FeeLine>,
    #[serde(default)]
    pub coupon_lines: Vec<CouponLine>,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub date_modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_paid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_completed: Option<String>,
}
