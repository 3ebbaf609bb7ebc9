//! In-memory WooCommerce/WordPress store for integration tests.
//!
//! Speaks just enough of the real wire dialect to exercise a client end
//! to end: snake_case bodies, stringly prices, `x-wp-total` pagination
//! headers, WordPress-style error bodies, and HTTP Basic auth on every
//! API route. Responses deliberately include wire-only keys such as
//! `permalink` and `total_sales` so callers can verify those never leak
//! into their domain models.
//!
//! Every request is counted; [`MockStore::request_count`] lets tests
//! assert that locally rejected operations produced no traffic at all.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{Multipart, Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::RwLock;

type ApiError = (StatusCode, Json<Value>);

#[derive(Default)]
struct StoreData {
    next_id: i64,
    products: BTreeMap<i64, Value>,
    variations: BTreeMap<i64, BTreeMap<i64, Value>>,
    attributes: BTreeMap<i64, Value>,
    terms: BTreeMap<i64, BTreeMap<i64, Value>>,
    categories: BTreeMap<i64, Value>,
    tags: BTreeMap<i64, Value>,
    orders: BTreeMap<i64, Value>,
    media: BTreeMap<i64, Value>,
}

impl StoreData {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// One fake store. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct MockStore {
    data: Arc<RwLock<StoreData>>,
    requests: Arc<AtomicUsize>,
}

impl MockStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of HTTP requests this store has received.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    /// Insert an order directly, since the public API cannot create one.
    /// Returns the assigned ID.
    pub async fn seed_order(&self, mut order: Value) -> i64 {
        let mut data = self.data.write().await;
        let id = data.next_id();
        if let Some(fields) = order.as_object_mut() {
            fields.insert("id".to_string(), json!(id));
            fields
                .entry("number".to_string())
                .or_insert_with(|| json!(id.to_string()));
        }
        data.orders.insert(id, order);
        id
    }

    /// Insert a product directly. Returns the assigned ID.
    pub async fn seed_product(&self, mut product: Value) -> i64 {
        let mut data = self.data.write().await;
        let id = data.next_id();
        if let Some(fields) = product.as_object_mut() {
            fields.insert("id".to_string(), json!(id));
        }
        decorate_product(&mut product, id);
        data.products.insert(id, product);
        id
    }

    #[must_use]
    pub fn app(&self) -> Router {
        Router::new()
            .route("/wp-json/", get(site_index))
            .route("/wp-json/wp/v2/users/me", get(current_user))
            .route("/wp-json/wp/v2/media", post(upload_media))
            .route("/wp-json/wc/v3", get(api_index))
            .route("/wp-json/wc/v3/system_status", get(system_status))
            .route("/wp-json/wc/v3/products", get(list_products).post(create_product))
            .route("/wp-json/wc/v3/products/batch", post(batch_products))
            .route(
                "/wp-json/wc/v3/products/categories",
                get(list_categories).post(create_category),
            )
            .route("/wp-json/wc/v3/products/tags", get(list_tags).post(create_tag))
            .route(
                "/wp-json/wc/v3/products/attributes",
                get(list_attributes).post(create_attribute),
            )
            .route(
                "/wp-json/wc/v3/products/attributes/{id}",
                get(get_attribute).put(update_attribute).delete(delete_attribute),
            )
            .route(
                "/wp-json/wc/v3/products/attributes/{id}/terms",
                get(list_terms).post(create_term),
            )
            .route(
                "/wp-json/wc/v3/products/{id}",
                get(get_product).put(update_product).delete(delete_product),
            )
            .route(
                "/wp-json/wc/v3/products/{id}/variations",
                get(list_variations).post(create_variation),
            )
            .route(
                "/wp-json/wc/v3/products/{id}/variations/batch",
                post(batch_variations),
            )
            .route(
                "/wp-json/wc/v3/products/{id}/variations/{vid}",
                get(get_variation).put(update_variation).delete(delete_variation),
            )
            .route("/wp-json/wc/v3/orders", get(list_orders))
            .route("/wp-json/wc/v3/orders/{id}", get(get_order).put(update_order))
            .layer(middleware::from_fn_with_state(self.clone(), count_requests))
            .with_state(self.clone())
    }
}

/// Serve until the listener closes.
///
/// # Errors
///
/// Propagates the underlying I/O error from `axum::serve`.
pub async fn run(listener: TcpListener, store: MockStore) -> Result<(), std::io::Error> {
    axum::serve(listener, store.app()).await
}

async fn count_requests(State(store): State<MockStore>, request: Request, next: Next) -> Response {
    store.requests.fetch_add(1, Ordering::Relaxed);
    next.run(request).await
}

// =============================================================================
// Error bodies and shared helpers
// =============================================================================

fn wp_error(status: StatusCode, code: &str, message: &str) -> ApiError {
    (
        status,
        Json(json!({
            "code": code,
            "message": message,
            "data": {"status": status.as_u16()},
        })),
    )
}

fn require_auth(headers: &HeaderMap) -> Result<(), ApiError> {
    if headers.contains_key(header::AUTHORIZATION) {
        Ok(())
    } else {
        Err(wp_error(
            StatusCode::UNAUTHORIZED,
            "woocommerce_rest_cannot_view",
            "Sorry, you cannot list resources.",
        ))
    }
}

fn not_found(code: &str) -> ApiError {
    wp_error(StatusCode::NOT_FOUND, code, "Invalid ID.")
}

fn merge(target: &mut Value, patch: &Value) {
    if let (Some(fields), Some(changes)) = (target.as_object_mut(), patch.as_object()) {
        for (key, value) in changes {
            fields.insert(key.clone(), value.clone());
        }
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Fill in the server-derived fields a real store would: the effective
/// `price` plus a handful of wire-only keys.
///
/// Note: `sale_price: "0"` clears the sale here and `price` falls back
/// to the regular price. Real WooCommerce reads `"0"` as on sale for
/// free; the tests depend on the clearing reading, so keep it.
fn decorate_product(product: &mut Value, id: i64) {
    let sale = str_field(product, "sale_price").to_string();
    let regular = str_field(product, "regular_price").to_string();
    let price = if sale.is_empty() || sale == "0" { regular } else { sale.clone() };
    if let Some(fields) = product.as_object_mut() {
        fields.insert("price".to_string(), json!(price));
        fields.insert("on_sale".to_string(), json!(!sale.is_empty() && sale != "0"));
        fields.insert(
            "permalink".to_string(),
            json!(format!("https://mock.local/product/{id}")),
        );
        fields.entry("total_sales".to_string()).or_insert(json!(0));
        fields.entry("backorders".to_string()).or_insert(json!("no"));
        fields.entry("status".to_string()).or_insert(json!("publish"));
        fields.entry("type".to_string()).or_insert(json!("simple"));
    }
}

fn decorate_variation(variation: &mut Value, product_id: i64, id: i64) {
    let sale = str_field(variation, "sale_price").to_string();
    let regular = str_field(variation, "regular_price").to_string();
    let price = if sale.is_empty() || sale == "0" { regular } else { sale };
    if let Some(fields) = variation.as_object_mut() {
        fields.insert("id".to_string(), json!(id));
        fields.insert("price".to_string(), json!(price));
        fields.insert(
            "permalink".to_string(),
            json!(format!("https://mock.local/product/{product_id}?variation={id}")),
        );
    }
}

fn page_of(items: Vec<Value>, params: &HashMap<String, String>) -> Response {
    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let per_page: usize = params
        .get("per_page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(10);
    let total = items.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let window: Vec<Value> = items
        .into_iter()
        .skip(page.saturating_sub(1) * per_page)
        .take(per_page)
        .collect();
    (
        AppendHeaders([
            ("x-wp-total", total.to_string()),
            ("x-wp-totalpages", total_pages.to_string()),
        ]),
        Json(window),
    )
        .into_response()
}

// =============================================================================
// WordPress endpoints
// =============================================================================

async fn site_index() -> Json<Value> {
    Json(json!({
        "name": "Mock Store",
        "description": "Just another WordPress site",
        "url": "https://mock.local",
        "home": "https://mock.local",
        "timezone_string": "UTC",
        "namespaces": ["wp/v2", "wc/v3"],
    }))
}

async fn current_user(headers: HeaderMap) -> Result<Json<Value>, ApiError> {
    if headers.contains_key(header::AUTHORIZATION) {
        Ok(Json(json!({"id": 1, "name": "admin", "slug": "admin"})))
    } else {
        Err(wp_error(
            StatusCode::UNAUTHORIZED,
            "rest_not_logged_in",
            "You are not currently logged in.",
        ))
    }
}

async fn upload_media(
    State(store): State<MockStore>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    require_auth(&headers)?;
    let field = multipart
        .next_field()
        .await
        .ok()
        .flatten()
        .ok_or_else(|| {
            wp_error(
                StatusCode::BAD_REQUEST,
                "rest_upload_no_data",
                "No data supplied.",
            )
        })?;
    let file_name = field.file_name().unwrap_or("upload.bin").to_string();
    let mime_type = field.content_type().unwrap_or("application/octet-stream").to_string();
    // Body is drained but not stored; only the metadata matters here.
    let size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
    tracing::debug!(file_name, size, "mock media upload");

    let mut data = store.data.write().await;
    let id = data.next_id();
    let item = json!({
        "id": id,
        "date": "2024-05-01T10:00:00",
        "slug": file_name,
        "link": format!("https://mock.local/?attachment_id={id}"),
        "title": {"rendered": file_name},
        "alt_text": "",
        "media_type": "image",
        "mime_type": mime_type,
        "source_url": format!("https://mock.local/media/{file_name}"),
        "media_details": {"width": 800, "height": 600},
    });
    data.media.insert(id, item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

// =============================================================================
// System endpoints
// =============================================================================

async fn api_index(headers: HeaderMap) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    Ok(Json(json!({"namespace": "wc/v3", "routes": {}})))
}

async fn system_status(headers: HeaderMap) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    Ok(Json(json!({
        "environment": {
            "version": "9.0.0",
            "wp_version": "6.5.1",
            "php_version": "8.3.6",
            "server_info": "nginx/1.25.4",
        },
        "database": {"wc_database_version": "9.0.0"},
    })))
}

// =============================================================================
// Products
// =============================================================================

async fn list_products(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    require_auth(&headers)?;
    let data = store.data.read().await;
    let search = params.get("search").map(String::as_str).unwrap_or("");
    let items: Vec<Value> = data
        .products
        .values()
        .filter(|p| search.is_empty() || str_field(p, "name").contains(search))
        .cloned()
        .collect();
    Ok(page_of(items, &params))
}

async fn create_product(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    require_auth(&headers)?;
    if body.get("price").is_some() {
        // The real API ignores it; surfacing it loudly catches clients
        // that should not be sending it.
        return Err(wp_error(
            StatusCode::BAD_REQUEST,
            "rest_invalid_param",
            "price is read-only.",
        ));
    }
    let mut data = store.data.write().await;
    let id = data.next_id();
    if let Some(fields) = body.as_object_mut() {
        fields.insert("id".to_string(), json!(id));
    }
    decorate_product(&mut body, id);
    data.products.insert(id, body.clone());
    Ok((StatusCode::CREATED, Json(body)))
}

async fn get_product(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let data = store.data.read().await;
    data.products
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("woocommerce_rest_product_invalid_id"))
}

async fn update_product(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    if patch.get("price").is_some() {
        return Err(wp_error(
            StatusCode::BAD_REQUEST,
            "rest_invalid_param",
            "price is read-only.",
        ));
    }
    let mut data = store.data.write().await;
    let product = data
        .products
        .get_mut(&id)
        .ok_or_else(|| not_found("woocommerce_rest_product_invalid_id"))?;
    merge(product, &patch);
    decorate_product(product, id);
    Ok(Json(product.clone()))
}

async fn delete_product(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let force = params.get("force").map(String::as_str) == Some("true");
    let mut data = store.data.write().await;
    if force {
        data.variations.remove(&id);
        return data
            .products
            .remove(&id)
            .map(Json)
            .ok_or_else(|| not_found("woocommerce_rest_product_invalid_id"));
    }
    // Without force the product is trashed, not removed.
    let product = data
        .products
        .get_mut(&id)
        .ok_or_else(|| not_found("woocommerce_rest_product_invalid_id"))?;
    if let Some(fields) = product.as_object_mut() {
        fields.insert("status".to_string(), json!("trash"));
    }
    Ok(Json(product.clone()))
}

async fn batch_products(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    let mut created = Vec::new();
    for entry in body.get("create").and_then(Value::as_array).cloned().unwrap_or_default() {
        let mut entry = entry;
        let id = data.next_id();
        if let Some(fields) = entry.as_object_mut() {
            fields.insert("id".to_string(), json!(id));
        }
        decorate_product(&mut entry, id);
        data.products.insert(id, entry.clone());
        created.push(entry);
    }
    let mut updated = Vec::new();
    for entry in body.get("update").and_then(Value::as_array).cloned().unwrap_or_default() {
        let Some(id) = entry.get("id").and_then(Value::as_i64) else {
            continue;
        };
        if let Some(product) = data.products.get_mut(&id) {
            merge(product, &entry);
            decorate_product(product, id);
            updated.push(product.clone());
        }
    }
    let mut deleted = Vec::new();
    for id in body.get("delete").and_then(Value::as_array).cloned().unwrap_or_default() {
        if let Some(id) = id.as_i64() {
            if let Some(product) = data.products.remove(&id) {
                deleted.push(product);
            }
        }
    }
    Ok(Json(json!({"create": created, "update": updated, "delete": deleted})))
}

// =============================================================================
// Variations
// =============================================================================

async fn list_variations(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Value>>, ApiError> {
    require_auth(&headers)?;
    let data = store.data.read().await;
    Ok(Json(
        data.variations
            .get(&id)
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default(),
    ))
}

async fn create_variation(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    if !data.products.contains_key(&id) {
        return Err(not_found("woocommerce_rest_product_invalid_id"));
    }
    let variation_id = data.next_id();
    decorate_variation(&mut body, id, variation_id);
    data.variations.entry(id).or_default().insert(variation_id, body.clone());
    Ok((StatusCode::CREATED, Json(body)))
}

async fn get_variation(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path((id, vid)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let data = store.data.read().await;
    data.variations
        .get(&id)
        .and_then(|m| m.get(&vid))
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("woocommerce_rest_variation_invalid_id"))
}

async fn update_variation(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path((id, vid)): Path<(i64, i64)>,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    let variation = data
        .variations
        .get_mut(&id)
        .and_then(|m| m.get_mut(&vid))
        .ok_or_else(|| not_found("woocommerce_rest_variation_invalid_id"))?;
    merge(variation, &patch);
    decorate_variation(variation, id, vid);
    Ok(Json(variation.clone()))
}

async fn delete_variation(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path((id, vid)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    data.variations
        .get_mut(&id)
        .and_then(|m| m.remove(&vid))
        .map(Json)
        .ok_or_else(|| not_found("woocommerce_rest_variation_invalid_id"))
}

async fn batch_variations(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    if !data.products.contains_key(&id) {
        return Err(not_found("woocommerce_rest_product_invalid_id"));
    }
    let mut created = Vec::new();
    for entry in body.get("create").and_then(Value::as_array).cloned().unwrap_or_default() {
        let mut entry = entry;
        let variation_id = data.next_id();
        decorate_variation(&mut entry, id, variation_id);
        data.variations.entry(id).or_default().insert(variation_id, entry.clone());
        created.push(entry);
    }
    let mut updated = Vec::new();
    for entry in body.get("update").and_then(Value::as_array).cloned().unwrap_or_default() {
        let Some(vid) = entry.get("id").and_then(Value::as_i64) else {
            continue;
        };
        if let Some(variation) = data.variations.get_mut(&id).and_then(|m| m.get_mut(&vid)) {
            merge(variation, &entry);
            decorate_variation(variation, id, vid);
            updated.push(variation.clone());
        }
    }
    let mut deleted = Vec::new();
    for vid in body.get("delete").and_then(Value::as_array).cloned().unwrap_or_default() {
        if let Some(vid) = vid.as_i64() {
            if let Some(variation) = data.variations.get_mut(&id).and_then(|m| m.remove(&vid)) {
                deleted.push(variation);
            }
        }
    }
    Ok(Json(json!({"create": created, "update": updated, "delete": deleted})))
}

// =============================================================================
// Taxonomies and attributes
// =============================================================================

async fn list_categories(
    State(store): State<MockStore>,
    headers: HeaderMap,
) -> Result<Json<Vec<Value>>, ApiError> {
    require_auth(&headers)?;
    let data = store.data.read().await;
    Ok(Json(data.categories.values().cloned().collect()))
}

async fn create_category(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    let id = data.next_id();
    let item = named_term(&body, id);
    data.categories.insert(id, item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

async fn list_tags(
    State(store): State<MockStore>,
    headers: HeaderMap,
) -> Result<Json<Vec<Value>>, ApiError> {
    require_auth(&headers)?;
    let data = store.data.read().await;
    Ok(Json(data.tags.values().cloned().collect()))
}

async fn create_tag(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    let id = data.next_id();
    let item = named_term(&body, id);
    data.tags.insert(id, item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

fn named_term(body: &Value, id: i64) -> Value {
    let name = str_field(body, "name");
    let slug = body
        .get("slug")
        .and_then(Value::as_str)
        .map_or_else(|| name.to_lowercase().replace(' ', "-"), ToString::to_string);
    json!({"id": id, "name": name, "slug": slug, "count": 0})
}

async fn list_attributes(
    State(store): State<MockStore>,
    headers: HeaderMap,
) -> Result<Json<Vec<Value>>, ApiError> {
    require_auth(&headers)?;
    let data = store.data.read().await;
    Ok(Json(data.attributes.values().cloned().collect()))
}

async fn create_attribute(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    let id = data.next_id();
    if let Some(fields) = body.as_object_mut() {
        fields.insert("id".to_string(), json!(id));
        fields.entry("type".to_string()).or_insert(json!("select"));
        fields.entry("order_by".to_string()).or_insert(json!("menu_order"));
        fields.entry("has_archives".to_string()).or_insert(json!(false));
    }
    data.attributes.insert(id, body.clone());
    Ok((StatusCode::CREATED, Json(body)))
}

async fn get_attribute(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let data = store.data.read().await;
    data.attributes
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("woocommerce_rest_attribute_invalid"))
}

async fn update_attribute(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    let attribute = data
        .attributes
        .get_mut(&id)
        .ok_or_else(|| not_found("woocommerce_rest_attribute_invalid"))?;
    merge(attribute, &patch);
    Ok(Json(attribute.clone()))
}

async fn delete_attribute(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    data.terms.remove(&id);
    data.attributes
        .remove(&id)
        .map(Json)
        .ok_or_else(|| not_found("woocommerce_rest_attribute_invalid"))
}

async fn list_terms(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Value>>, ApiError> {
    require_auth(&headers)?;
    let data = store.data.read().await;
    Ok(Json(
        data.terms
            .get(&id)
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default(),
    ))
}

async fn create_term(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    if !data.attributes.contains_key(&id) {
        return Err(not_found("woocommerce_rest_attribute_invalid"));
    }
    let name = str_field(&body, "name");
    if name.is_empty() {
        return Err(wp_error(
            StatusCode::BAD_REQUEST,
            "rest_invalid_param",
            "name is required.",
        ));
    }
    // Term names are unique within an attribute, like the real store.
    let duplicate = data
        .terms
        .get(&id)
        .is_some_and(|m| m.values().any(|t| str_field(t, "name") == name));
    if duplicate {
        return Err(wp_error(
            StatusCode::BAD_REQUEST,
            "term_exists",
            "A term with the name provided already exists.",
        ));
    }
    let term_id = data.next_id();
    let mut item = named_term(&body, term_id);
    if let (Some(fields), Some(changes)) = (item.as_object_mut(), body.as_object()) {
        for key in ["description", "menu_order"] {
            if let Some(value) = changes.get(key) {
                fields.insert(key.to_string(), value.clone());
            }
        }
    }
    data.terms.entry(id).or_default().insert(term_id, item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

// =============================================================================
// Orders
// =============================================================================

async fn list_orders(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    require_auth(&headers)?;
    let data = store.data.read().await;
    let status = params.get("status").map(String::as_str).unwrap_or("");
    let items: Vec<Value> = data
        .orders
        .values()
        .filter(|o| status.is_empty() || str_field(o, "status") == status)
        .cloned()
        .collect();
    Ok(page_of(items, &params))
}

async fn get_order(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let data = store.data.read().await;
    data.orders
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("woocommerce_rest_order_invalid_id"))
}

async fn update_order(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    require_auth(&headers)?;
    let mut data = store.data.write().await;
    let order = data
        .orders
        .get_mut(&id)
        .ok_or_else(|| not_found("woocommerce_rest_order_invalid_id"))?;
    merge(order, &patch);
    Ok(Json(order.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_product_prefers_active_sale_price() {
        let mut product = json!({"regular_price": "24.99", "sale_price": "19.99"});
        decorate_product(&mut product, 1);
        assert_eq!(product["price"], "19.99");
        assert_eq!(product["on_sale"], true);

        let mut cleared = json!({"regular_price": "24.99", "sale_price": "0"});
        decorate_product(&mut cleared, 2);
        assert_eq!(cleared["price"], "24.99");
        assert_eq!(cleared["on_sale"], false);
    }

    #[test]
    fn test_merge_overwrites_only_patched_keys() {
        let mut product = json!({"name": "Widget", "sku": "W-1"});
        merge(&mut product, &json!({"sku": "W-2"}));
        assert_eq!(product["name"], "Widget");
        assert_eq!(product["sku"], "W-2");
    }

    #[test]
    fn test_named_term_slug_fallback() {
        let term = named_term(&json!({"name": "Shoe Size"}), 9);
        assert_eq!(term["slug"], "shoe-size");
        let explicit = named_term(&json!({"name": "Shoe Size", "slug": "sz"}), 10);
        assert_eq!(explicit["slug"], "sz");
    }
}
