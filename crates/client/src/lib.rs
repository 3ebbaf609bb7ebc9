//! WooCommerce/WordPress REST API adapter.
//!
//! This crate is the only place that speaks the remote wire dialect: it
//! owns the snake_case wire schema, translates it to and from the
//! camelCase domain types in `woodash-core`, normalizes every failure
//! class into the uniform [`ApiResponse`](woodash_core::ApiResponse)
//! envelope, and gates privileged operations on the connection's
//! authentication mode.
//!
//! The entry point is [`woocommerce::WooClient`], constructed from a
//! validated [`StoreConnection`](woodash_core::StoreConnection).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod woocommerce;

pub use woocommerce::{
    AttributeInput, CategoryInput, OrderPatch, ProductPatch, StoreInfo, TagInput, TermInput,
    VariationPatch, WooClient, WooError, WordPressInfo,
};
