//! Connection and diagnostics commands.

use woodash_client::WooClient;

use super::render;

pub async fn test_connection(client: &WooClient) -> Result<(), Box<dyn std::error::Error>> {
    render(&client.test_connection().await)
}

pub async fn status(client: &WooClient) -> Result<(), Box<dyn std::error::Error>> {
    render(&client.store_status().await)
}

pub async fn info(client: &WooClient) -> Result<(), Box<dyn std::error::Error>> {
    render(&client.store_info().await)
}
