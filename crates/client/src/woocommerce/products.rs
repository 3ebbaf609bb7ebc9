//! Product, category, and tag operations.

use tracing::instrument;
use woodash_core::{
    ApiResponse, BatchRequest, BatchResponse, FilterParams, Paginated, Product, ProductCategory,
    ProductTag,
};

use super::client::{WC_API, product_query, respond, respond_with};
use super::conversions::products as convert;
use super::inputs::{CategoryInput, ProductPatch, TagInput};
use super::wire::{BatchPayload, WireBatchResponse, WireProduct, WireTermRef};
use super::{WooClient, WooError};

const DEFAULT_PAGE: u32 = 1;
const TAXONOMY_PAGE_SIZE: u32 = 100;

impl WooClient {
    /// List products matching the filter, one page at a time.
    #[instrument(skip(self))]
    pub async fn list_products(&self, params: &FilterParams) -> ApiResponse<Paginated<Product>> {
        respond(self.fetch_products(params).await)
    }

    /// Fetch a single product by ID.
    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: i64) -> ApiResponse<Product> {
        respond(self.fetch_product(product_id).await)
    }

    /// Create a product. The full body is sent, `sale_price` included
    /// even when zero; the server assigns the ID.
    #[instrument(skip(self, product), fields(sku = %product.sku))]
    pub async fn create_product(&self, product: &Product) -> ApiResponse<Product> {
        let result = self
            .post(
                &format!("{WC_API}/products"),
                &convert::product_payload(product),
            )
            .await
            .map(convert::product_from_wire);
        respond_with(result, "Product created successfully")
    }

    /// Apply a sparse update to a product.
    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, product_id: i64, patch: &ProductPatch) -> ApiResponse<Product> {
        let result = self
            .put(
                &format!("{WC_API}/products/{product_id}"),
                &convert::product_patch_payload(patch),
            )
            .await
            .map(convert::product_from_wire);
        respond_with(result, "Product updated successfully")
    }

    /// Delete a product. With `force` the product is removed outright
    /// instead of trashed.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, product_id: i64, force: bool) -> ApiResponse<Product> {
        let result = self
            .delete(
                &format!("{WC_API}/products/{product_id}"),
                &[("force", force.to_string())],
            )
            .await
            .map(convert::product_from_wire);
        respond_with(result, "Product deleted successfully")
    }

    /// Create, update, and delete products in one round trip. Partial
    /// failure is reported as the store returned it.
    #[instrument(skip(self, request))]
    pub async fn batch_products(
        &self,
        request: &BatchRequest<Product, ProductPatch>,
    ) -> ApiResponse<BatchResponse<Product>> {
        let payload = BatchPayload {
            create: request.create.iter().map(convert::product_payload).collect(),
            update: request
                .update
                .iter()
                .map(convert::product_patch_payload)
                .collect(),
            delete: request.delete.clone(),
        };
        let result = self
            .post(&format!("{WC_API}/products/batch"), &payload)
            .await
            .map(|wire: WireBatchResponse<WireProduct>| BatchResponse {
                create: wire.create.into_iter().map(convert::product_from_wire).collect(),
                update: wire.update.into_iter().map(convert::product_from_wire).collect(),
                delete: wire.delete.into_iter().map(convert::product_from_wire).collect(),
            });
        respond_with(result, "Batch operation completed successfully")
    }

    /// List product categories.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ApiResponse<Vec<ProductCategory>> {
        let result = self
            .get_with_query(
                &format!("{WC_API}/products/categories"),
                &[("per_page", TAXONOMY_PAGE_SIZE.to_string())],
            )
            .await
            .map(|wire: Vec<WireTermRef>| {
                wire.into_iter().map(convert::category_from_wire).collect()
            });
        respond(result)
    }

    /// Create a product category.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_category(&self, input: &CategoryInput) -> ApiResponse<ProductCategory> {
        let result = self
            .post(
                &format!("{WC_API}/products/categories"),
                &convert::category_payload(input),
            )
            .await
            .map(convert::category_from_wire);
        respond_with(result, "Category created successfully")
    }

    /// List product tags.
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> ApiResponse<Vec<ProductTag>> {
        let result = self
            .get_with_query(
                &format!("{WC_API}/products/tags"),
                &[("per_page", TAXONOMY_PAGE_SIZE.to_string())],
            )
            .await
            .map(|wire: Vec<WireTermRef>| wire.into_iter().map(convert::tag_from_wire).collect());
        respond(result)
    }

    /// Create a product tag.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_tag(&self, input: &TagInput) -> ApiResponse<ProductTag> {
        let result = self
            .post(
                &format!("{WC_API}/products/tags"),
                &convert::tag_payload(input),
            )
            .await
            .map(convert::tag_from_wire);
        respond_with(result, "Tag created successfully")
    }

    pub(crate) async fn fetch_products(
        &self,
        params: &FilterParams,
    ) -> Result<Paginated<Product>, WooError> {
        let query = product_query(params);
        let (items, meta): (Vec<WireProduct>, _) = self
            .get_paged(&format!("{WC_API}/products"), &query)
            .await?;
        Ok(Paginated::new(
            items.into_iter().map(convert::product_from_wire).collect(),
            meta.total,
            meta.total_pages,
            params.page.unwrap_or(DEFAULT_PAGE),
        ))
    }

    async fn fetch_product(&self, product_id: i64) -> Result<Product, WooError> {
        let wire: WireProduct = self.get(&format!("{WC_API}/products/{product_id}")).await?;
        Ok(convert::product_from_wire(wire))
    }
}
