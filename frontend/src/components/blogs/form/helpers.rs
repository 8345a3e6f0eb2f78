//! Utility functions for the blog form: model factories, the comparison
//! projection, and the markdown preview pipeline.

use pulldown_cmark::{html, Parser};
use uuid::Uuid;
use yew::virtual_dom::AttrValue;

use common::model::blog::{Blog, BlogSubsection};

use crate::form_engine::dirty_state::FormSnapshot;
use crate::form_engine::paginated_collection::CollectionItem;

impl CollectionItem for BlogSubsection {
    fn item_id(&self) -> &str {
        &self.id
    }
}

pub fn empty_blog() -> Blog {
    Blog {
        id: Uuid::new_v4().to_string(),
        ..Blog::default()
    }
}

pub fn new_subsection() -> BlogSubsection {
    BlogSubsection {
        id: Uuid::new_v4().to_string(),
        ..BlogSubsection::default()
    }
}

/// The blog fields that participate in dirty comparison. The content field
/// normalizes as rich text so the residue an empty editor leaves behind
/// does not read as a change.
pub fn blog_snapshot(blog: &Blog) -> FormSnapshot {
    FormSnapshot::new()
        .text("title", &blog.title)
        .rich_text("content", &blog.content)
        .tags("tags", &blog.tags)
        .flag("published", blog.published)
        .opt_text("cover_image_url", blog.cover_image_url.as_deref())
        .items(
            "subsections",
            blog.subsections.iter().map(subsection_snapshot).collect(),
        )
}

fn subsection_snapshot(subsection: &BlogSubsection) -> FormSnapshot {
    FormSnapshot::new()
        .text("heading", &subsection.heading)
        .rich_text("body", subsection.body.as_deref().unwrap_or(""))
}

/// Normalizes line endings and strips invisible leading characters before
/// the markdown parse.
fn normalize_text(input: &str) -> String {
    input
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .trim_start_matches(|c: char| c == '\u{feff}' || c == '\u{200b}')
        .to_string()
}

/// Renders the post content for the preview tab.
pub fn compute_preview_html(content: &str) -> AttrValue {
    let text = normalize_text(content);
    let parser = Parser::new(&text);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    AttrValue::from(html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_residue_is_not_a_change() {
        let saved = Blog {
            content: String::new(),
            ..empty_blog()
        };
        let mut edited = saved.clone();
        edited.content = "<p><br></p>".to_string();

        assert_eq!(
            blog_snapshot(&saved).fingerprint(),
            blog_snapshot(&edited).fingerprint()
        );
    }

    #[test]
    fn subsection_order_is_a_change() {
        let mut blog = empty_blog();
        blog.subsections = vec![
            BlogSubsection {
                heading: "Envíos".to_string(),
                ..new_subsection()
            },
            BlogSubsection {
                heading: "Devoluciones".to_string(),
                ..new_subsection()
            },
        ];
        let mut reordered = blog.clone();
        reordered.subsections.swap(0, 1);

        assert_ne!(blog_snapshot(&blog), blog_snapshot(&reordered));
    }

    #[test]
    fn preview_renders_markdown() {
        let rendered = compute_preview_html("# Hola\r\n\r\n*mundo*");
        assert!(rendered.contains("<h1>"));
        assert!(rendered.contains("<em>mundo</em>"));
    }
}
