//! Utility functions for the product form.
//!
//! - **Model factories**: empty product / variant instances with fresh
//!   UUIDs.
//! - **Comparison projection**: `product_snapshot` declares which fields
//!   participate in dirty checking and how each one normalizes.
//! - **Upload merging**: folding the URLs returned by a successful
//!   `upload_all` into the working copy before it is persisted.
//! - **Price handling**: parsing the price input and rendering cents with
//!   thousands separators.

use num_format::{Locale, ToFormattedString};
use uuid::Uuid;

use common::model::product::{Product, ProductVariant};

use crate::form_engine::dirty_state::FormSnapshot;
use crate::form_engine::paginated_collection::CollectionItem;
use crate::form_engine::pending_resources::UploadedResources;

impl CollectionItem for ProductVariant {
    fn item_id(&self) -> &str {
        &self.id
    }
}

pub fn empty_product() -> Product {
    Product {
        id: Uuid::new_v4().to_string(),
        ..Product::default()
    }
}

pub fn new_variant() -> ProductVariant {
    ProductVariant {
        id: Uuid::new_v4().to_string(),
        ..ProductVariant::default()
    }
}

/// The product fields that participate in dirty comparison. The entity id
/// is deliberately not projected: it never changes within one form session.
pub fn product_snapshot(product: &Product) -> FormSnapshot {
    FormSnapshot::new()
        .text("name", &product.name)
        .opt_text("description", product.description.as_deref())
        .tags("tags", &product.tags)
        .flag("published", product.published)
        .opt_text("primary_image_url", product.primary_image_url.as_deref())
        .sequence("additional_image_urls", &product.additional_image_urls)
        .items(
            "variants",
            product.variants.iter().map(variant_snapshot).collect(),
        )
}

fn variant_snapshot(variant: &ProductVariant) -> FormSnapshot {
    FormSnapshot::new()
        .text("title", &variant.title)
        .opt_text("sku", variant.sku.as_deref())
        .number("price_cents", variant.price_cents)
        .opt_text("image_url", variant.image_url.as_deref())
}

/// Folds the URLs of a fully successful upload into the working copy:
/// primary slot, additional slots (appended in slot order), and one named
/// slot per variant id.
pub fn merge_uploaded_urls(product: &mut Product, uploaded: &UploadedResources) {
    if let Some(url) = &uploaded.primary_url {
        product.primary_image_url = Some(url.clone());
    }
    product
        .additional_image_urls
        .extend(uploaded.additional_urls.iter().cloned());
    for variant in product.variants.iter_mut() {
        if let Some(url) = uploaded.named_slot_urls.get(&variant.id) {
            variant.image_url = Some(url.clone());
        }
    }
}

/// Parses the price input ("12", "12,50", "12.50") into cents. Returns
/// `None` for an empty or non-numeric input.
pub fn parse_price_cents(input: &str) -> Option<i64> {
    let cleaned = input.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    let (whole, frac) = match cleaned.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (cleaned.as_str(), ""),
    };
    let whole: i64 = whole.parse().ok()?;
    let cents = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        2 => frac.parse::<i64>().ok()?,
        _ => return None,
    };
    Some(whole * 100 + cents)
}

/// Renders cents as a price with thousands separators, e.g. `1.234,50 €`.
pub fn format_price_cents(cents: i64) -> String {
    let whole = (cents / 100).to_formatted_string(&Locale::es);
    format!("{},{:02} €", whole, (cents % 100).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_ignores_representation_noise() {
        let mut saved = Product {
            name: "Camisa".to_string(),
            description: None,
            tags: vec!["verano".to_string(), "lino".to_string()],
            ..empty_product()
        };
        let mut edited = saved.clone();
        edited.name = "  Camisa ".to_string();
        edited.description = Some(String::new());
        edited.tags.reverse();
        edited.published = Some(false);
        saved.published = None;

        assert_eq!(
            product_snapshot(&saved).fingerprint(),
            product_snapshot(&edited).fingerprint()
        );
    }

    #[test]
    fn snapshot_sees_variant_reorder() {
        let mut product = empty_product();
        product.variants = vec![
            ProductVariant {
                title: "S".to_string(),
                ..new_variant()
            },
            ProductVariant {
                title: "M".to_string(),
                ..new_variant()
            },
        ];
        let mut reordered = product.clone();
        reordered.variants.swap(0, 1);

        assert_ne!(
            product_snapshot(&product),
            product_snapshot(&reordered)
        );
    }

    #[test]
    fn merge_assigns_primary_additional_and_variant_urls() {
        let mut product = empty_product();
        product.additional_image_urls = vec!["kept.png".to_string()];
        product.variants = vec![new_variant()];
        let variant_id = product.variants[0].id.clone();

        let mut uploaded = UploadedResources {
            primary_url: Some("hero.png".to_string()),
            additional_urls: vec!["extra.png".to_string()],
            ..UploadedResources::default()
        };
        uploaded
            .named_slot_urls
            .insert(variant_id, "variant.png".to_string());

        merge_uploaded_urls(&mut product, &uploaded);

        assert_eq!(product.primary_image_url.as_deref(), Some("hero.png"));
        assert_eq!(product.additional_image_urls, vec!["kept.png", "extra.png"]);
        assert_eq!(product.variants[0].image_url.as_deref(), Some("variant.png"));
    }

    #[test]
    fn price_parsing_and_formatting() {
        assert_eq!(parse_price_cents("12"), Some(1200));
        assert_eq!(parse_price_cents("12,5"), Some(1250));
        assert_eq!(parse_price_cents("12.50"), Some(1250));
        assert_eq!(parse_price_cents(""), None);
        assert_eq!(parse_price_cents("abc"), None);
        assert_eq!(parse_price_cents("1,234"), None);

        assert_eq!(format_price_cents(123450), "1.234,50 €");
        assert_eq!(format_price_cents(900), "9,00 €");
    }
}
