use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    /// Markdown body of the post.
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: Option<bool>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub subsections: Vec<BlogSubsection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogSubsection {
    pub id: String,
    pub heading: String,
    pub body: Option<String>,
}
