//! Woodash Core - Shared domain types library.
//!
//! This crate provides the domain model used across all Woodash components:
//! - `client` - WooCommerce/WordPress REST API adapter
//! - `cli` - Command-line store administration tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Everything
//! here is the *domain* representation (camelCase JSON, typed prices); the
//! remote wire schema (snake_case, stringly-typed numbers) is private to the
//! `client` crate, which owns the translation in both directions.
//!
//! # Modules
//!
//! - [`types`] - Store connections, products, orders, and response envelopes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
