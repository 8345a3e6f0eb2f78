use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Request payload for the asset upload endpoint. The file content travels
/// base64 encoded; `folder` scopes the stored object under the owning
/// entity (e.g. `products/<id>`).
pub struct UploadAssetRequest {
    pub folder: String,
    pub filename: String,
    pub content_type: String,
    pub content_base64: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Response of the asset upload endpoint: the durable URL of the stored
/// object, plus an optional server-generated thumbnail.
pub struct UploadAssetResponse {
    pub url: String,
    pub thumbnail_url: Option<String>,
}
