//! Order commands.

use woodash_client::WooClient;
use woodash_core::FilterParams;

use super::render;

pub async fn list(
    client: &WooClient,
    status: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = FilterParams {
        status,
        page,
        per_page,
        ..FilterParams::default()
    };
    render(&client.list_orders(&params).await)
}

pub async fn get(client: &WooClient, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    render(&client.get_order(id).await)
}
