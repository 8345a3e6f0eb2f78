use serde::{Deserialize, Serialize};

/// A catalog product as edited in the product form and persisted by the
/// backend.
///
/// Image fields hold the URLs of *durably stored* assets only. Images the
/// user has selected but not yet saved live in the frontend's pending
/// resource set and are merged into these fields after a successful upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// UUID, assigned on creation.
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: Option<bool>,
    /// URL of the stored primary image, if any.
    pub primary_image_url: Option<String>,
    /// URLs of the stored additional images, in display order.
    #[serde(default)]
    pub additional_image_urls: Vec<String>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

/// A purchasable variant of a product (size, color, bundle...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// UUID, assigned on creation. Stable across reordering.
    pub id: String,
    pub title: String,
    pub sku: Option<String>,
    /// Price in cents to avoid floating point in the model.
    pub price_cents: Option<i64>,
    pub image_url: Option<String>,
}
