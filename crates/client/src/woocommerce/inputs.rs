//! Caller-facing input types for mutating operations.
//!
//! Patches are sparse: `None` means "leave the remote value alone", and
//! the conversion layer only serializes the fields that are set. Prices
//! are decimals here and become strings on the wire.

use rust_decimal::Decimal;
use woodash_core::{
    Dimensions, OrderStatus, ProductAttribute, ProductCategory, ProductImage, ProductStatus,
    ProductTag, ProductType, StockStatus, TaxStatus, VariationAttribute,
};

/// Sparse update for a product. Also used for batch update entries,
/// where `id` is required.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub sku: Option<String>,
    pub regular_price: Option<Decimal>,
    pub sale_price: Option<Decimal>,
    pub stock_quantity: Option<i64>,
    pub manage_stock: Option<bool>,
    pub stock_status: Option<StockStatus>,
    pub status: Option<ProductStatus>,
    pub product_type: Option<ProductType>,
    pub tax_status: Option<TaxStatus>,
    pub reviews_allowed: Option<bool>,
    pub purchase_note: Option<String>,
    pub weight: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub categories: Option<Vec<ProductCategory>>,
    pub tags: Option<Vec<ProductTag>>,
    pub images: Option<Vec<ProductImage>>,
    pub attributes: Option<Vec<ProductAttribute>>,
}

/// Sparse create/update body for a variation. The remote API accepts
/// partial bodies for both, so one shape covers both operations.
#[derive(Debug, Clone, Default)]
pub struct VariationPatch {
    pub id: Option<i64>,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub regular_price: Option<Decimal>,
    pub sale_price: Option<Decimal>,
    pub stock_quantity: Option<i64>,
    pub manage_stock: Option<bool>,
    pub stock_status: Option<StockStatus>,
    pub tax_status: Option<TaxStatus>,
    pub weight: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub image: Option<ProductImage>,
    pub attributes: Option<Vec<VariationAttribute>>,
}

/// New or updated global attribute definition.
#[derive(Debug, Clone)]
pub struct AttributeInput {
    pub name: String,
    /// Defaults to `pa_<slugified name>` when absent.
    pub slug: Option<String>,
    /// `select` unless the store registered custom attribute types.
    pub kind: Option<String>,
    pub order_by: Option<String>,
    pub has_archives: bool,
}

impl AttributeInput {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            kind: None,
            order_by: None,
            has_archives: false,
        }
    }

    /// Slug to register the attribute under. WooCommerce prefixes global
    /// attribute taxonomies with `pa_`.
    #[must_use]
    pub fn effective_slug(&self) -> String {
        self.slug
            .clone()
            .unwrap_or_else(|| format!("pa_{}", slugify(&self.name)))
    }
}

/// New term under a global attribute.
#[derive(Debug, Clone)]
pub struct TermInput {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub menu_order: Option<i64>,
}

impl TermInput {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            description: None,
            menu_order: None,
        }
    }
}

/// New product category.
#[derive(Debug, Clone)]
pub struct CategoryInput {
    pub name: String,
    pub slug: Option<String>,
    pub parent: Option<i64>,
    pub description: Option<String>,
}

/// New product tag.
#[derive(Debug, Clone)]
pub struct TagInput {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

/// Sparse update for an order. The admin surface only ever changes the
/// status and the customer note.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub customer_note: Option<String>,
}

/// Lowercase, spaces to hyphens, everything else non-alphanumeric dropped.
fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Color"), "color");
        assert_eq!(slugify("Shoe Size"), "shoe-size");
        assert_eq!(slugify("  Fancy  Trim! "), "fancy-trim");
    }

    #[test]
    fn test_attribute_slug_defaults_to_prefixed_name() {
        let input = AttributeInput::named("Shoe Size");
        assert_eq!(input.effective_slug(), "pa_shoe-size");

        let explicit = AttributeInput {
            slug: Some("pa_custom".to_string()),
            ..AttributeInput::named("Shoe Size")
        };
        assert_eq!(explicit.effective_slug(), "pa_custom");
    }
}
