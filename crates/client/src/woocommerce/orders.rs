//! Order operations. Read-mostly: orders are created by shoppers, not
//! by this client.

use tracing::instrument;
use woodash_core::{ApiResponse, FilterParams, Order, Paginated};

use super::client::{WC_API, order_query, respond, respond_with};
use super::conversions::orders as convert;
use super::inputs::OrderPatch;
use super::wire::{OrderPayload, WireOrder};
use super::{WooClient, WooError};

const DEFAULT_PAGE: u32 = 1;

impl WooClient {
    /// List orders matching the filter, one page at a time.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, params: &FilterParams) -> ApiResponse<Paginated<Order>> {
        respond(self.fetch_orders(params).await)
    }

    /// Fetch a single order by ID.
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: i64) -> ApiResponse<Order> {
        let result = self
            .get(&format!("{WC_API}/orders/{order_id}"))
            .await
            .map(convert::order_from_wire);
        respond(result)
    }

    /// Update an order's status or customer note.
    #[instrument(skip(self, patch))]
    pub async fn update_order(&self, order_id: i64, patch: &OrderPatch) -> ApiResponse<Order> {
        let result = self
            .put(
                &format!("{WC_API}/orders/{order_id}"),
                &OrderPayload::from(patch),
            )
            .await
            .map(convert::order_from_wire);
        respond_with(result, "Order updated successfully")
    }

    async fn fetch_orders(&self, params: &FilterParams) -> Result<Paginated<Order>, WooError> {
        let query = order_query(params);
        let (items, meta): (Vec<WireOrder>, _) =
            self.get_paged(&format!("{WC_API}/orders"), &query).await?;
        Ok(Paginated::new(
            items.into_iter().map(convert::order_from_wire).collect(),
            meta.total,
            meta.total_pages,
            params.page.unwrap_or(DEFAULT_PAGE),
        ))
    }
}
