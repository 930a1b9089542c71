//! HTTP client for the Cloudinary REST API.

use crate::{
    CdnConfig, CdnResult, MediaProvider, PendingUpload, generate_public_id, sign_params,
    upload_params,
};
use chrono::Utc;
use lumen_core::{ResourceMetadata, UploadedFile, UploadedFileBuilder};
use lumen_error::{CdnError, CdnErrorKind};
use serde::Deserialize;
use tracing::instrument;

/// Resource description returned by the admin API.
///
/// Every field is optional on the wire; [`ResourceResponse::into_metadata`]
/// rejects responses missing any field the service consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceResponse {
    /// Width in pixels
    pub width: Option<u32>,
    /// Height in pixels
    pub height: Option<u32>,
    /// Stored format
    pub format: Option<String>,
    /// Stored byte size
    pub bytes: Option<u64>,
}

impl ResourceResponse {
    /// Convert into [`ResourceMetadata`], failing closed on missing fields.
    pub fn into_metadata(self) -> CdnResult<ResourceMetadata> {
        let missing = |field: &str| CdnError::new(CdnErrorKind::MissingField(field.to_string()));
        Ok(ResourceMetadata {
            width: self.width.ok_or_else(|| missing("width"))?,
            height: self.height.ok_or_else(|| missing("height"))?,
            format: self
                .format
                .filter(|f| !f.is_empty())
                .ok_or_else(|| missing("format"))?,
            bytes: self.bytes.ok_or_else(|| missing("bytes"))?,
        })
    }
}

/// Upload result returned by the upload API.
#[derive(Debug, Clone, Deserialize)]
struct UploadResponse {
    public_id: Option<String>,
    secure_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

/// Client for the provider's upload and admin APIs.
#[derive(Debug, Clone)]
pub struct CloudinaryClient {
    config: CdnConfig,
    client: reqwest::Client,
}

impl CloudinaryClient {
    /// Create a new client
    #[instrument(skip(config), fields(cloud_name = %config.cloud_name()))]
    pub fn new(config: CdnConfig) -> Self {
        tracing::debug!("Creating provider client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the provider configuration
    pub fn config(&self) -> &CdnConfig {
        &self.config
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/v1_1/{}/{}",
            self.config.api_base(),
            self.config.cloud_name(),
            path
        )
    }

    /// Turn a non-success response into an API error carrying the provider message.
    async fn api_error(response: reqwest::Response) -> CdnError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        tracing::error!(status = status.as_u16(), %message, "Provider returned error");
        CdnError::new(CdnErrorKind::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl MediaProvider for CloudinaryClient {
    #[instrument(skip(self, upload), fields(filename = ?upload.filename, bytes = upload.data.len()))]
    async fn upload(&self, upload: PendingUpload) -> CdnResult<UploadedFile> {
        let size = upload.size();
        let public_id = generate_public_id();
        let mut params = upload_params(
            self.config.upload_folder(),
            &public_id,
            Utc::now().timestamp(),
        );
        let signature = sign_params(&params, self.config.api_secret());
        params.insert("signature".to_string(), signature);
        params.insert("signature_algorithm".to_string(), "sha256".to_string());
        params.insert("api_key".to_string(), self.config.api_key().clone());

        let mut part = reqwest::multipart::Part::bytes(upload.data)
            .file_name(upload.filename.clone().unwrap_or_else(|| public_id.clone()));
        part = part.mime_str(&upload.content_type).map_err(|e| {
            CdnError::new(CdnErrorKind::Http(format!(
                "Invalid content type '{}': {}",
                upload.content_type, e
            )))
        })?;

        let form = params
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (key, value)| {
                form.text(key, value)
            })
            .part("file", part);

        let url = self.api_url("image/upload");
        tracing::debug!(%url, %public_id, "Uploading asset");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Upload request failed: {}", e);
                CdnError::new(CdnErrorKind::Http(format!("Upload request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body: UploadResponse = response.json().await.map_err(|e| {
            CdnError::new(CdnErrorKind::Deserialization(format!(
                "Failed to parse upload response: {}",
                e
            )))
        })?;

        let stored_id = body
            .public_id
            .ok_or_else(|| CdnError::new(CdnErrorKind::MissingField("public_id".to_string())))?;
        let secure_url = body
            .secure_url
            .ok_or_else(|| CdnError::new(CdnErrorKind::MissingField("secure_url".to_string())))?;

        tracing::info!(public_id = %stored_id, size, "Asset stored");

        UploadedFileBuilder::default()
            .public_id(stored_id)
            .url(secure_url)
            .size(size)
            .original_name(upload.filename)
            .build()
            .map_err(|e| CdnError::new(CdnErrorKind::Deserialization(e.to_string())))
    }

    #[instrument(skip(self))]
    async fn resource(&self, public_id: &str) -> CdnResult<ResourceMetadata> {
        let url = self.api_url(&format!("resources/image/upload/{}", public_id));
        tracing::debug!(%url, "Fetching resource metadata");

        let response = self
            .client
            .get(&url)
            .basic_auth(self.config.api_key(), Some(self.config.api_secret()))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Resource request failed: {}", e);
                CdnError::new(CdnErrorKind::Http(format!("Resource request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body: ResourceResponse = response.json().await.map_err(|e| {
            CdnError::new(CdnErrorKind::Deserialization(format!(
                "Failed to parse resource response: {}",
                e
            )))
        })?;

        body.into_metadata()
    }

    fn provider_name(&self) -> &'static str {
        "cloudinary"
    }
}
