//! Shared request core for the WooCommerce client.
//!
//! One `WooClient` is scoped to one validated [`StoreConnection`]; both
//! authentication modes ride the same HTTP Basic header, so every request
//! goes through [`WooClient::authed`]. Non-success responses are turned
//! into [`WooError::Remote`] via an ordered chain of message extractors
//! over the WordPress-style error body.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;
use woodash_core::{ApiResponse, Capability, FilterParams, SortOrder, StoreAuth, StoreConnection};

use super::WooError;

/// WooCommerce REST namespace.
pub(crate) const WC_API: &str = "/wp-json/wc/v3";
/// WordPress core REST namespace (media, users).
pub(crate) const WP_API: &str = "/wp-json/wp/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 20;

/// Client for one WooCommerce store.
///
/// Cheap to clone; all clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WooClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    /// Site root without a trailing slash.
    base_url: String,
    auth: StoreAuth,
}

impl WooClient {
    /// Build a client for the given store connection.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::Config`] when credentials are missing for the
    /// declared authentication mode or the HTTP client cannot be built.
    pub fn new(connection: StoreConnection) -> Result<Self, WooError> {
        connection.validate()?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| WooError::Config(format!("failed to build HTTP client: {err}")))?;
        let base_url = connection
            .base_url
            .as_str()
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                auth: connection.auth,
            }),
        })
    }

    /// Site root without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn is_wordpress_auth(&self) -> bool {
        matches!(self.inner.auth, StoreAuth::WordPressBasic { .. })
    }

    /// Reject the operation locally when the connection's auth mode does
    /// not grant `capability`. No request is sent on denial.
    pub(crate) fn require(&self, capability: Capability) -> Result<(), WooError> {
        if self.inner.auth.can(capability) {
            Ok(())
        } else {
            Err(WooError::Permission(capability))
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    pub(crate) fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        let auth = &self.inner.auth;
        request.basic_auth(auth.basic_user(), Some(auth.basic_password()))
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    // =========================================================================
    // Request helpers
    // =========================================================================

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, WooError> {
        self.get_with_query(path, &[]).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, WooError> {
        let response = self
            .authed(self.inner.http.get(self.endpoint(path)).query(query))
            .send()
            .await
            .map_err(transport)?;
        deserialize(response).await
    }

    /// GET a list endpoint, also returning the pagination headers.
    pub(crate) async fn get_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(Vec<T>, PageMeta), WooError> {
        let response = self
            .authed(self.inner.http.get(self.endpoint(path)).query(query))
            .send()
            .await
            .map_err(transport)?;
        let response = check_status(response).await?;
        let meta = page_meta(response.headers());
        let items = response
            .json()
            .await
            .map_err(|err| WooError::Parse(err.to_string()))?;
        Ok((items, meta))
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, WooError> {
        let response = self
            .authed(self.inner.http.post(self.endpoint(path)).json(body))
            .send()
            .await
            .map_err(transport)?;
        deserialize(response).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, WooError> {
        let response = self
            .authed(self.inner.http.put(self.endpoint(path)).json(body))
            .send()
            .await
            .map_err(transport)?;
        deserialize(response).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, WooError> {
        let response = self
            .authed(self.inner.http.delete(self.endpoint(path)).query(query))
            .send()
            .await
            .map_err(transport)?;
        deserialize(response).await
    }
}

// =============================================================================
// Response handling
// =============================================================================

pub(crate) async fn deserialize<T: DeserializeOwned>(response: Response) -> Result<T, WooError> {
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|err| WooError::Parse(err.to_string()))
}

async fn check_status(response: Response) -> Result<Response, WooError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    Err(WooError::Remote {
        status: status.as_u16(),
        message: remote_error_message(status, &body),
    })
}

pub(crate) fn transport(err: reqwest::Error) -> WooError {
    if err.is_timeout() {
        WooError::Transport("request timed out".to_string())
    } else {
        WooError::Transport(err.to_string())
    }
}

// =============================================================================
// Remote error message extraction
// =============================================================================

type Extractor = fn(StatusCode, &Value) -> Option<String>;

/// Tried in order; the first hit wins.
const EXTRACTORS: &[Extractor] = &[top_level_message, nested_data_message, status_with_code];

fn top_level_message(_status: StatusCode, body: &Value) -> Option<String> {
    non_empty_str(body.get("message")?)
}

fn nested_data_message(_status: StatusCode, body: &Value) -> Option<String> {
    non_empty_str(body.get("data")?.get("message")?)
}

fn status_with_code(status: StatusCode, body: &Value) -> Option<String> {
    let code = non_empty_str(body.get("code")?)?;
    Some(format!("HTTP {}: {code}", status.as_u16()))
}

fn non_empty_str(value: &Value) -> Option<String> {
    let s = value.as_str()?;
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Best human-readable explanation for a non-success response. Never
/// empty: falls back to the HTTP reason phrase when the body offers
/// nothing usable.
pub(crate) fn remote_error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        for extract in EXTRACTORS {
            if let Some(message) = extract(status, &value) {
                return message;
            }
        }
    }
    format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("API Error")
    )
}

// =============================================================================
// Pagination headers
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct PageMeta {
    pub total: u64,
    pub total_pages: u32,
}

/// Read `x-wp-total`/`x-wp-totalpages`. Missing or malformed headers
/// fall back to a zero-item, one-page result rather than erroring.
pub(crate) fn page_meta(headers: &HeaderMap) -> PageMeta {
    PageMeta {
        total: header_number(headers, "x-wp-total", 0),
        total_pages: header_number(headers, "x-wp-totalpages", 1),
    }
}

fn header_number<T: FromStr + Copy>(headers: &HeaderMap, name: &str, default: T) -> T {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

// =============================================================================
// Query building
// =============================================================================

pub(crate) fn product_query(params: &FilterParams) -> Vec<(&'static str, String)> {
    let mut query = base_query(params);
    if let Some(category) = &params.category {
        query.push(("category", category.clone()));
    }
    if let Some(tag) = &params.tag {
        query.push(("tag", tag.clone()));
    }
    if let Some(sku) = &params.sku {
        query.push(("sku", sku.clone()));
    }
    if let Some(stock_status) = &params.stock_status {
        query.push(("stock_status", stock_status.clone()));
    }
    if let Some(min) = params.price_min {
        query.push(("min_price", min.to_string()));
    }
    if let Some(max) = params.price_max {
        query.push(("max_price", max.to_string()));
    }
    query
}

pub(crate) fn order_query(params: &FilterParams) -> Vec<(&'static str, String)> {
    let mut query = base_query(params);
    if let Some(from) = &params.date_from {
        query.push(("after", from.clone()));
    }
    if let Some(to) = &params.date_to {
        query.push(("before", to.clone()));
    }
    query
}

fn base_query(params: &FilterParams) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("page", params.page.unwrap_or(DEFAULT_PAGE).to_string()),
        (
            "per_page",
            params.per_page.unwrap_or(DEFAULT_PER_PAGE).to_string(),
        ),
        (
            "orderby",
            params.order_by.clone().unwrap_or_else(|| "date".to_string()),
        ),
        (
            "order",
            params.order.unwrap_or(SortOrder::Desc).as_str().to_string(),
        ),
    ];
    if let Some(search) = &params.search {
        query.push(("search", search.clone()));
    }
    if let Some(status) = &params.status {
        query.push(("status", status.clone()));
    }
    query
}

// =============================================================================
// Envelope conversion
// =============================================================================

/// Fold an internal result into the public envelope.
pub(crate) fn respond<T>(result: Result<T, WooError>) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::ok(data),
        Err(err) => fail(err),
    }
}

/// Like [`respond`], attaching a success message.
pub(crate) fn respond_with<T>(result: Result<T, WooError>, message: &str) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::ok_with_message(data, message),
        Err(err) => fail(err),
    }
}

fn fail<T>(err: WooError) -> ApiResponse<T> {
    warn!(error = %err, "store request failed");
    ApiResponse::err(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use url::Url;

    fn connection(password: &str) -> StoreConnection {
        StoreConnection::new(
            Url::parse("https://shop.example.com/").expect("url"),
            StoreAuth::WordPressBasic {
                username: "admin".to_string(),
                app_password: SecretString::from(password.to_string()),
            },
        )
    }

    #[test]
    fn test_new_rejects_missing_credentials_without_io() {
        let err = WooClient::new(connection("")).expect_err("must fail");
        assert!(matches!(err, WooError::Config(_)));
        assert_eq!(
            err.to_string(),
            "WordPress username or application password is missing"
        );
    }

    #[test]
    fn test_base_url_loses_trailing_slash() {
        let client = WooClient::new(connection("pass")).expect("client");
        assert_eq!(client.base_url(), "https://shop.example.com");
        assert_eq!(
            client.endpoint("/wp-json/wc/v3/products"),
            "https://shop.example.com/wp-json/wc/v3/products"
        );
    }

    #[test]
    fn test_extractors_prefer_top_level_message() {
        let body = br#"{"code":"rest_forbidden","message":"Sorry, you are not allowed to do that.","data":{"status":401,"message":"nested"}}"#;
        assert_eq!(
            remote_error_message(StatusCode::UNAUTHORIZED, body),
            "Sorry, you are not allowed to do that."
        );
    }

    #[test]
    fn test_extractors_fall_through_to_nested_message() {
        let body = br#"{"code":"rest_forbidden","data":{"status":401,"message":"nested explanation"}}"#;
        assert_eq!(
            remote_error_message(StatusCode::UNAUTHORIZED, body),
            "nested explanation"
        );
    }

    #[test]
    fn test_extractors_fall_through_to_code() {
        let body = br#"{"code":"woocommerce_rest_product_invalid_id","data":{"status":404}}"#;
        assert_eq!(
            remote_error_message(StatusCode::NOT_FOUND, body),
            "HTTP 404: woocommerce_rest_product_invalid_id"
        );
    }

    #[test]
    fn test_unparseable_body_falls_back_to_reason_phrase() {
        assert_eq!(
            remote_error_message(StatusCode::BAD_GATEWAY, b"<html>upstream died</html>"),
            "HTTP 502: Bad Gateway"
        );
        assert_eq!(
            remote_error_message(StatusCode::NOT_FOUND, b""),
            "HTTP 404: Not Found"
        );
    }

    #[test]
    fn test_empty_message_string_is_skipped() {
        let body = br#"{"message":"  ","code":"rest_no_route"}"#;
        assert_eq!(
            remote_error_message(StatusCode::NOT_FOUND, body),
            "HTTP 404: rest_no_route"
        );
    }

    #[test]
    fn test_page_meta_defaults() {
        let headers = HeaderMap::new();
        let meta = page_meta(&headers);
        assert_eq!(meta.total, 0);
        assert_eq!(meta.total_pages, 1);
    }

    #[test]
    fn test_page_meta_reads_wordpress_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-wp-total", "57".parse().expect("header"));
        headers.insert("x-wp-totalpages", "3".parse().expect("header"));
        let meta = page_meta(&headers);
        assert_eq!(meta.total, 57);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn test_page_meta_ignores_garbage_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-wp-total", "many".parse().expect("header"));
        let meta = page_meta(&headers);
        assert_eq!(meta.total, 0);
        assert_eq!(meta.total_pages, 1);
    }

    #[test]
    fn test_product_query_defaults() {
        let query = product_query(&FilterParams::default());
        assert!(query.contains(&("page", "1".to_string())));
        assert!(query.contains(&("per_page", "20".to_string())));
        assert!(query.contains(&("orderby", "date".to_string())));
        assert!(query.contains(&("order", "desc".to_string())));
        assert!(!query.iter().any(|(key, _)| *key == "search"));
    }

    #[test]
    fn test_product_query_includes_price_window() {
        let params = FilterParams {
            price_min: Some("5".parse().expect("decimal")),
            price_max: Some("10.50".parse().expect("decimal")),
            ..FilterParams::default()
        };
        let query = product_query(&params);
        assert!(query.contains(&("min_price", "5".to_string())));
        assert!(query.contains(&("max_price", "10.50".to_string())));
    }
}
