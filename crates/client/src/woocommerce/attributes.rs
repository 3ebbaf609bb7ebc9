//! Global attribute and attribute term operations.
//!
//! Attribute definitions and terms can be listed under either
//! authentication mode; mutations require `ManageAttributes`.

use futures::future::join_all;
use tracing::instrument;
use woodash_core::{ApiResponse, AttributeDefinition, AttributeTerm, Capability, SettledBatch};

use super::client::{WC_API, respond, respond_with};
use super::conversions::products as convert;
use super::inputs::{AttributeInput, TermInput};
use super::wire::{WireAttributeDefinition, WireAttributeTerm};
use super::{WooClient, WooError};

const TERM_PAGE_SIZE: u32 = 100;

impl WooClient {
    /// List global attribute definitions.
    #[instrument(skip(self))]
    pub async fn list_attributes(&self) -> ApiResponse<Vec<AttributeDefinition>> {
        let result = self
            .get(&format!("{WC_API}/products/attributes"))
            .await
            .map(|wire: Vec<WireAttributeDefinition>| {
                wire.into_iter()
                    .map(convert::attribute_definition_from_wire)
                    .collect()
            });
        respond(result)
    }

    /// Register a new global attribute.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_attribute(&self, input: &AttributeInput) -> ApiResponse<AttributeDefinition> {
        let result = self.try_create_attribute(input).await;
        respond_with(result, "Product attribute created successfully")
    }

    /// Update a global attribute definition.
    #[instrument(skip(self, input))]
    pub async fn update_attribute(
        &self,
        attribute_id: i64,
        input: &AttributeInput,
    ) -> ApiResponse<AttributeDefinition> {
        let result = self.try_update_attribute(attribute_id, input).await;
        respond_with(result, "Product attribute updated successfully")
    }

    /// Delete a global attribute and its terms.
    #[instrument(skip(self))]
    pub async fn delete_attribute(&self, attribute_id: i64) -> ApiResponse<AttributeDefinition> {
        let result = self.try_delete_attribute(attribute_id).await;
        respond_with(result, "Product attribute deleted successfully")
    }

    /// List the terms of a global attribute.
    #[instrument(skip(self))]
    pub async fn list_attribute_terms(&self, attribute_id: i64) -> ApiResponse<Vec<AttributeTerm>> {
        let result = self
            .get_with_query(
                &format!("{WC_API}/products/attributes/{attribute_id}/terms"),
                &[("per_page", TERM_PAGE_SIZE.to_string())],
            )
            .await
            .map(|wire: Vec<WireAttributeTerm>| {
                wire.into_iter().map(convert::attribute_term_from_wire).collect()
            });
        respond(result)
    }

    /// Add a single term to a global attribute.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_attribute_term(
        &self,
        attribute_id: i64,
        input: &TermInput,
    ) -> ApiResponse<AttributeTerm> {
        let result = self.try_create_term(attribute_id, input).await;
        respond_with(result, "Attribute term created successfully")
    }

    /// Add several terms, attempting every one even if some fail.
    /// Failures are collected alongside the successes, never aborting
    /// the rest of the batch.
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub async fn create_attribute_terms(
        &self,
        attribute_id: i64,
        inputs: &[TermInput],
    ) -> ApiResponse<SettledBatch<AttributeTerm>> {
        if let Err(err) = self.require(Capability::ManageAttributes) {
            return ApiResponse::err(err.to_string());
        }
        let outcomes = join_all(
            inputs
                .iter()
                .map(|input| self.try_create_term(attribute_id, input)),
        )
        .await;
        let mut settled = SettledBatch::default();
        for (input, outcome) in inputs.iter().zip(outcomes) {
            match outcome {
                Ok(term) => settled.succeeded.push(term),
                Err(err) => settled.failed.push(format!("{}: {err}", input.name)),
            }
        }
        respond_with(Ok(settled), "Attribute terms processed")
    }

    async fn try_create_attribute(
        &self,
        input: &AttributeInput,
    ) -> Result<AttributeDefinition, WooError> {
        self.require(Capability::ManageAttributes)?;
        let wire: WireAttributeDefinition = self
            .post(
                &format!("{WC_API}/products/attributes"),
                &convert::attribute_payload(input),
            )
            .await?;
        Ok(convert::attribute_definition_from_wire(wire))
    }

    async fn try_update_attribute(
        &self,
        attribute_id: i64,
        input: &AttributeInput,
    ) -> Result<AttributeDefinition, WooError> {
        self.require(Capability::ManageAttributes)?;
        let wire: WireAttributeDefinition = self
            .put(
                &format!("{WC_API}/products/attributes/{attribute_id}"),
                &convert::attribute_payload(input),
            )
            .await?;
        Ok(convert::attribute_definition_from_wire(wire))
    }

    async fn try_delete_attribute(
        &self,
        attribute_id: i64,
    ) -> Result<AttributeDefinition, WooError> {
        self.require(Capability::ManageAttributes)?;
        let wire: WireAttributeDefinition = self
            .delete(
                &format!("{WC_API}/products/attributes/{attribute_id}"),
                &[("force", "true".to_string())],
            )
            .await?;
        Ok(convert::attribute_definition_from_wire(wire))
    }

    async fn try_create_term(
        &self,
        attribute_id: i64,
        input: &TermInput,
    ) -> Result<AttributeTerm, WooError> {
        self.require(Capability::ManageAttributes)?;
        let wire: WireAttributeTerm = self
            .post(
                &format!("{WC_API}/products/attributes/{attribute_id}/terms"),
                &convert::term_payload(input),
            )
            .await?;
        Ok(convert::attribute_term_from_wire(wire))
    }
}
