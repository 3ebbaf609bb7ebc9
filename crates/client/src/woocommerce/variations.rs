//! Variation operations for variable products.
//!
//! Reads are open to both authentication modes; every mutation requires
//! the `ManageVariations` capability and is rejected locally otherwise.

use tracing::instrument;
use woodash_core::{ApiResponse, BatchRequest, BatchResponse, Capability, ProductVariation};

use super::client::{WC_API, respond, respond_with};
use super::conversions::products as convert;
use super::inputs::VariationPatch;
use super::wire::{BatchPayload, WireBatchResponse, WireVariation};
use super::{WooClient, WooError};

const VARIATION_PAGE_SIZE: u32 = 100;

impl WooClient {
    /// List all variations of a product.
    #[instrument(skip(self))]
    pub async fn list_variations(&self, product_id: i64) -> ApiResponse<Vec<ProductVariation>> {
        let result = self
            .get_with_query(
                &format!("{WC_API}/products/{product_id}/variations"),
                &[("per_page", VARIATION_PAGE_SIZE.to_string())],
            )
            .await
            .map(|wire: Vec<WireVariation>| {
                wire.into_iter().map(convert::variation_from_wire).collect()
            });
        respond(result)
    }

    /// Fetch a single variation.
    #[instrument(skip(self))]
    pub async fn get_variation(
        &self,
        product_id: i64,
        variation_id: i64,
    ) -> ApiResponse<ProductVariation> {
        let result = self
            .get(&format!(
                "{WC_API}/products/{product_id}/variations/{variation_id}"
            ))
            .await
            .map(convert::variation_from_wire);
        respond(result)
    }

    /// Create a variation under a variable product.
    #[instrument(skip(self, patch))]
    pub async fn create_variation(
        &self,
        product_id: i64,
        patch: &VariationPatch,
    ) -> ApiResponse<ProductVariation> {
        let result = self.try_create_variation(product_id, patch).await;
        respond_with(result, "Product variation created successfully")
    }

    /// Apply a sparse update to a variation.
    #[instrument(skip(self, patch))]
    pub async fn update_variation(
        &self,
        product_id: i64,
        variation_id: i64,
        patch: &VariationPatch,
    ) -> ApiResponse<ProductVariation> {
        let result = self
            .try_update_variation(product_id, variation_id, patch)
            .await;
        respond_with(result, "Product variation updated successfully")
    }

    /// Permanently delete a variation.
    #[instrument(skip(self))]
    pub async fn delete_variation(
        &self,
        product_id: i64,
        variation_id: i64,
    ) -> ApiResponse<ProductVariation> {
        let result = self.try_delete_variation(product_id, variation_id).await;
        respond_with(result, "Product variation deleted successfully")
    }

    /// Create, update, and delete variations in one round trip.
    #[instrument(skip(self, request))]
    pub async fn batch_variations(
        &self,
        product_id: i64,
        request: &BatchRequest<VariationPatch, VariationPatch>,
    ) -> ApiResponse<BatchResponse<ProductVariation>> {
        let result = self.try_batch_variations(product_id, request).await;
        respond_with(result, "Batch variations operation completed successfully")
    }

    async fn try_create_variation(
        &self,
        product_id: i64,
        patch: &VariationPatch,
    ) -> Result<ProductVariation, WooError> {
        self.require(Capability::ManageVariations)?;
        let wire: WireVariation = self
            .post(
                &format!("{WC_API}/products/{product_id}/variations"),
                &convert::variation_patch_payload(patch),
            )
            .await?;
        Ok(convert::variation_from_wire(wire))
    }

    async fn try_update_variation(
        &self,
        product_id: i64,
        variation_id: i64,
        patch: &VariationPatch,
    ) -> Result<ProductVariation, WooError> {
        self.require(Capability::ManageVariations)?;
        let wire: WireVariation = self
            .put(
                &format!("{WC_API}/products/{product_id}/variations/{variation_id}"),
                &convert::variation_patch_payload(patch),
            )
            .await?;
        Ok(convert::variation_from_wire(wire))
    }

    async fn try_delete_variation(
        &self,
        product_id: i64,
        variation_id: i64,
    ) -> Result<ProductVariation, WooError> {
        self.require(Capability::ManageVariations)?;
        let wire: WireVariation = self
            .delete(
                &format!("{WC_API}/products/{product_id}/variations/{variation_id}"),
                &[("force", "true".to_string())],
            )
            .await?;
        Ok(convert::variation_from_wire(wire))
    }

    async fn try_batch_variations(
        &self,
        product_id: i64,
        request: &BatchRequest<VariationPatch, VariationPatch>,
    ) -> Result<BatchResponse<ProductVariation>, WooError> {
        self.require(Capability::ManageVariations)?;
        let payload = BatchPayload {
            create: request
                .create
                .iter()
                .map(convert::variation_patch_payload)
                .collect(),
            update: request
                .update
                .iter()
                .map(convert::variation_patch_payload)
                .collect(),
            delete: request.delete.clone(),
        };
        let wire: WireBatchResponse<WireVariation> = self
            .post(
                &format!("{WC_API}/products/{product_id}/variations/batch"),
                &payload,
            )
            .await?;
        Ok(BatchResponse {
            create: wire.create.into_iter().map(convert::variation_from_wire).collect(),
            update: wire.update.into_iter().map(convert::variation_from_wire).collect(),
            delete: wire.delete.into_iter().map(convert::variation_from_wire).collect(),
        })
    }
}
