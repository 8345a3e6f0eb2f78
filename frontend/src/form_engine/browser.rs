//! Browser-side implementations of the engine's collaborator traits.
//!
//! [`BrowserFile`] wraps `web_sys::File` and backs preview handles with
//! object URLs (`URL.createObjectURL` / `revokeObjectURL`).
//! [`ApiStorageUploader`] is the production storage collaborator: it reads
//! the file, base64 encodes it, and POSTs it to the asset endpoint.

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;

use common::requests::{UploadAssetRequest, UploadAssetResponse};

use super::pending_resources::{ResourceFile, StorageUploader, UploadError, UploadedAsset};

/// A file picked in the browser, as handed over by an `<input type="file">`.
#[derive(Debug, Clone)]
pub struct BrowserFile {
    file: web_sys::File,
}

impl BrowserFile {
    pub fn new(file: web_sys::File) -> Self {
        Self { file }
    }

    pub fn as_web_file(&self) -> &web_sys::File {
        &self.file
    }
}

impl ResourceFile for BrowserFile {
    fn name(&self) -> String {
        self.file.name()
    }

    fn size(&self) -> u64 {
        self.file.size() as u64
    }

    fn mime_type(&self) -> String {
        self.file.type_()
    }

    fn is_same_instance(&self, other: &Self) -> bool {
        let own: &JsValue = self.file.as_ref();
        let their: &JsValue = other.file.as_ref();
        js_sys::Object::is(own, their)
    }

    fn create_preview_url(&self) -> String {
        web_sys::Url::create_object_url_with_blob(&self.file).unwrap_or_default()
    }

    fn revoke_preview_url(url: &str) {
        if !url.is_empty() {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    }
}

/// Storage collaborator backed by the `/api/assets/upload` endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiStorageUploader;

#[async_trait(?Send)]
impl StorageUploader<BrowserFile> for ApiStorageUploader {
    async fn upload(&self, file: &BrowserFile, folder: &str) -> Result<UploadedAsset, UploadError> {
        let blob = Blob::from(file.as_web_file().clone());
        let bytes = read_as_bytes(&blob)
            .await
            .map_err(|err| UploadError::Network(err.to_string()))?;

        let payload = UploadAssetRequest {
            folder: folder.to_string(),
            filename: file.name(),
            content_type: file.mime_type(),
            content_base64: general_purpose::STANDARD.encode(&bytes),
        };

        let response = Request::post("/api/assets/upload")
            .json(&payload)
            .map_err(|err| UploadError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| UploadError::Network(err.to_string()))?;

        if response.status() != 200 {
            return Err(UploadError::Server(
                response.text().await.unwrap_or_default(),
            ));
        }

        let stored: UploadAssetResponse = response
            .json()
            .await
            .map_err(|err| UploadError::Server(err.to_string()))?;
        Ok(UploadedAsset {
            url: stored.url,
            thumbnail_url: stored.thumbnail_url,
        })
    }
}
