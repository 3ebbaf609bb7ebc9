//! Connection tests and store diagnostics.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use woodash_core::{ApiResponse, FilterParams, StoreStatus};

use super::client::{WC_API, WP_API, respond, respond_with};
use super::{WooClient, WooError};

/// Site-level facts from the WordPress REST index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordPressInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub home: String,
    #[serde(default)]
    pub timezone_string: String,
    #[serde(default)]
    pub namespaces: Vec<String>,
}

/// Aggregated store diagnostics. Each section is independently
/// best-effort: a failing source leaves its section `None` and adds a
/// note to `errors` instead of failing the whole call.
#[derive(Debug, Clone, Serialize)]
pub struct StoreInfo {
    pub checked_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<WordPressInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub woocommerce_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordpress_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_status: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl WooClient {
    /// Verify the connection with a cheap authenticated read. The probe
    /// endpoint depends on the auth mode: application passwords can hit
    /// the WordPress users endpoint, key pairs only the WooCommerce API.
    #[instrument(skip(self))]
    pub async fn test_connection(&self) -> ApiResponse<bool> {
        let path = if self.is_wordpress_auth() {
            format!("{WP_API}/users/me")
        } else {
            format!("{WC_API}/system_status")
        };
        let result = self.get::<Value>(&path).await.map(|_| true);
        respond_with(result, "Connection successful")
    }

    /// Raw WooCommerce system status report.
    #[instrument(skip(self))]
    pub async fn system_status(&self) -> ApiResponse<Value> {
        respond(self.fetch_system_status().await)
    }

    /// Site-level WordPress facts from the REST index.
    #[instrument(skip(self))]
    pub async fn wordpress_info(&self) -> ApiResponse<WordPressInfo> {
        respond(self.fetch_site_info().await)
    }

    /// The WooCommerce API index (namespace and route listing).
    #[instrument(skip(self))]
    pub async fn woocommerce_info(&self) -> ApiResponse<Value> {
        respond(self.get(WC_API).await)
    }

    /// Gather diagnostics from every source at once. Sources that fail
    /// are skipped, so a store with a broken system-status endpoint
    /// still reports its site info.
    #[instrument(skip(self))]
    pub async fn store_info(&self) -> ApiResponse<StoreInfo> {
        let (status, site, api_index) = tokio::join!(
            self.fetch_system_status(),
            self.fetch_site_info(),
            self.get::<Value>(WC_API),
        );

        let mut errors = Vec::new();
        let status = unwrap_or_note(status, "system status", &mut errors);
        let site = unwrap_or_note(site, "site info", &mut errors);
        if let Err(err) = api_index {
            errors.push(format!("api index: {err}"));
        }

        let info = StoreInfo {
            checked_at: Utc::now().to_rfc3339(),
            woocommerce_version: status
                .as_ref()
                .and_then(|s| pointer_string(s, "/environment/version")),
            wordpress_version: status
                .as_ref()
                .and_then(|s| pointer_string(s, "/environment/wp_version")),
            php_version: status
                .as_ref()
                .and_then(|s| pointer_string(s, "/environment/php_version")),
            server_info: status
                .as_ref()
                .and_then(|s| pointer_string(s, "/environment/server_info")),
            system_status: status,
            site,
            errors,
        };
        ApiResponse::ok(info)
    }

    /// One connection probe plus a product count, for dashboards.
    #[instrument(skip(self))]
    pub async fn store_status(&self) -> ApiResponse<StoreStatus> {
        let probe = if self.is_wordpress_auth() {
            self.get::<Value>(&format!("{WP_API}/users/me")).await
        } else {
            self.get::<Value>(&format!("{WC_API}/system_status")).await
        };
        let last_checked = Utc::now().to_rfc3339();
        if let Err(err) = probe {
            return ApiResponse::ok(StoreStatus {
                is_online: false,
                last_checked,
                product_count: 0,
                error: Some(err.to_string()),
            });
        }
        let params = FilterParams {
            per_page: Some(1),
            ..FilterParams::default()
        };
        let product_count = match self.fetch_products(&params).await {
            Ok(page) => page.total,
            Err(_) => 0,
        };
        ApiResponse::ok(StoreStatus {
            is_online: true,
            last_checked,
            product_count,
            error: None,
        })
    }

    async fn fetch_system_status(&self) -> Result<Value, WooError> {
        self.get(&format!("{WC_API}/system_status")).await
    }

    async fn fetch_site_info(&self) -> Result<WordPressInfo, WooError> {
        self.get("/wp-json/").await
    }
}

fn unwrap_or_note<T>(
    result: Result<T, WooError>,
    source: &str,
    errors: &mut Vec<String>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(format!("{source}: {err}"));
            None
        }
    }
}

fn pointer_string(value: &Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}
