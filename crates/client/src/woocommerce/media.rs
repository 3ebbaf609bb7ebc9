//! WordPress media uploads.
//!
//! Media lives under the WordPress core API, not the WooCommerce one,
//! and application passwords are the only supported credential for it:
//! the operation requires `UploadMedia` and consumer key pairs are
//! rejected before any bytes leave the process.

use reqwest::multipart::{Form, Part};
use tracing::instrument;
use woodash_core::{ApiResponse, Capability, MediaItem};

use super::client::{WP_API, deserialize, respond_with, transport};
use super::conversions::products as convert;
use super::wire::WireMedia;
use super::{WooClient, WooError};

impl WooClient {
    /// Upload a file to the WordPress media library.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_media(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> ApiResponse<MediaItem> {
        let result = self.try_upload_media(file_name, bytes, mime_type).await;
        respond_with(result, "Image uploaded successfully")
    }

    async fn try_upload_media(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<MediaItem, WooError> {
        self.require(Capability::UploadMedia)?;
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|err| WooError::Config(format!("invalid media type {mime_type}: {err}")))?;
        let form = Form::new().part("file", part);
        let response = self
            .authed(self.http().post(self.endpoint(&format!("{WP_API}/media"))).multipart(form))
            .send()
            .await
            .map_err(transport)?;
        let wire: WireMedia = deserialize(response).await?;
        Ok(convert::media_from_wire(wire))
    }
}
