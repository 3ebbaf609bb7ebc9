//! Response envelopes, pagination, and request parameter types.

use serde::{Deserialize, Serialize};

/// Uniform result envelope returned by every adapter operation.
///
/// The adapter never panics and never surfaces a bare transport error:
/// all failure classes (configuration, permission, transport, remote)
/// converge to `success: false` with a human-readable `error` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Successful response with an operator-facing message.
    #[must_use]
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.into()),
        }
    }

    /// Failed response carrying an error string.
    #[must_use]
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

/// One page of a list operation.
///
/// `total`/`total_pages` come from the `x-wp-total`/`x-wp-totalpages`
/// response headers; the next/prev flags are derived from the requested
/// page, never re-fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl<T> Paginated<T> {
    /// Build a page, deriving the navigation flags.
    #[must_use]
    pub fn new(data: Vec<T>, total: u64, total_pages: u32, current_page: u32) -> Self {
        Self {
            data,
            total,
            total_pages,
            current_page,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }
}

/// List sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filter and pagination parameters for list operations.
///
/// Every field is optional; the adapter applies the remote defaults
/// (page 1, 20 per page, newest first) for missing values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<rust_decimal::Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<rust_decimal::Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// ISO 8601 lower bound on creation date (orders only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// ISO 8601 upper bound on creation date (orders only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// A batch request: create, update, and delete in one round trip.
///
/// Create and update entries use the same payload shapes as the
/// single-entity operations; `delete` is a list of IDs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRequest<C, U> {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub create: Vec<C>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub update: Vec<U>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delete: Vec<i64>,
}

/// Result of a batch request. Partial failure is reported as the remote
/// system returned it; the adapter neither retries nor rolls back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchResponse<T> {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub create: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub update: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delete: Vec<T>,
}

/// Outcome of a fan-out operation with all-settled semantics: every
/// entry is attempted, successes and failures are collected side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettledBatch<T> {
    pub succeeded: Vec<T>,
    pub failed: Vec<String>,
}

// Manual impl: the derived one would require `T: Default`, which item
// types have no reason to implement.
impl<T> Default for SettledBatch<T> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_navigation_flags() {
        let page = Paginated::new(vec![1, 2, 3], 30, 3, 2);
        assert!(page.has_next_page);
        assert!(page.has_prev_page);

        let first = Paginated::<i32>::new(vec![], 30, 3, 1);
        assert!(first.has_next_page);
        assert!(!first.has_prev_page);

        let last = Paginated::<i32>::new(vec![], 30, 3, 3);
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);
    }

    #[test]
    fn test_single_page_has_no_navigation() {
        let page = Paginated::<i32>::new(vec![], 0, 1, 1);
        assert!(!page.has_next_page);
        assert!(!page.has_prev_page);
    }

    #[test]
    fn test_envelope_serialization_omits_empty_fields() {
        let ok = ApiResponse::ok(42);
        let value = serde_json::to_value(&ok).expect("serialize");
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], 42);
        assert!(value.get("error").is_none());

        let err = ApiResponse::<i32>::err("boom");
        let value = serde_json::to_value(&err).expect("serialize");
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "boom");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_settled_batch_defaults_without_default_items() {
        struct NoDefault;
        let batch = SettledBatch::<NoDefault>::default();
        assert!(batch.succeeded.is_empty());
        assert!(batch.failed.is_empty());
    }

    #[test]
    fn test_filter_params_default_is_empty() {
        let params = FilterParams::default();
        assert!(params.search.is_none());
        assert!(params.page.is_none());
        assert_eq!(params.order.unwrap_or_default(), SortOrder::Desc);
    }
}
