//! Properties for the `ProductFormComponent`.

use yew::prelude::*;

/// Configuration passed by the parent screen.
#[derive(Properties, PartialEq, Clone)]
pub struct ProductFormProps {
    /// The optional id of a product to load when the component first
    /// renders.
    ///
    /// - With `Some(id)`, the component fetches `/api/products/{id}` and
    ///   binds the form to the result; on failure it falls back to a new
    ///   empty product.
    /// - With `None` (the default), the form starts on a new empty product.
    ///
    /// Checked only once, during the first `rendered` lifecycle call.
    #[prop_or_default]
    pub product_id: Option<String>,
}
