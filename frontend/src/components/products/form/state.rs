//! Component state for the product form.
//!
//! The state struct owns the working copy of the product being edited plus
//! one instance of each engine component: the pending image set, the dirty
//! tracker, and the variant pagination controller. All mutation flows
//! through the `update` module; the view only reads.

use yew::prelude::*;

use common::model::product::Product;

use crate::form_engine::browser::BrowserFile;
use crate::form_engine::dirty_state::{DirtyStateTracker, FormSnapshot};
use crate::form_engine::paginated_collection::PaginatedCollectionController;
use crate::form_engine::pending_resources::{PendingResourceManager, ResourceLimits};

use super::helpers::{empty_product, product_snapshot};

/// Variants shown per page.
pub const VARIANTS_PAGE_SIZE: usize = 5;

/// Main state container for the `ProductFormComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct ProductFormComponent {
    /// Working copy of the product. Single writer: only `update` mutates it.
    pub product: Product,

    /// The entity as last loaded or saved; `Cancel` restores it.
    pub saved_product: Product,

    /// Baseline fingerprint keeper; rebaselined on load and save success.
    pub tracker: DirtyStateTracker,

    /// Locally selected images awaiting the next save: primary slot,
    /// additional slots, and one named slot per variant id.
    pub pending_images: PendingResourceManager<BrowserFile>,

    /// Page window and expanded-item state over `product.variants`.
    pub variants_view: PaginatedCollectionController,

    /// Hidden file input for the primary image.
    pub primary_input_ref: NodeRef,

    /// Hidden multi-select file input for the additional images.
    pub additional_input_ref: NodeRef,

    /// Hidden file input shared by all variant rows.
    pub variant_input_ref: NodeRef,

    /// Variant id the next `variant_input_ref` selection belongs to.
    pub variant_image_target: Option<String>,

    /// Variant id awaiting removal confirmation in the top sheet.
    pub remove_candidate: Option<String>,

    /// Reference to the removal confirmation top sheet node.
    pub remove_dialog_ref: NodeRef,

    /// URL currently shown in the image zoom dialog.
    pub zoom_url: Option<String>,

    /// Reference to the image zoom top sheet node.
    pub zoom_dialog_ref: NodeRef,

    /// Submission-in-flight guard: a second save while one is pending is
    /// ignored, not queued.
    pub submitting: bool,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl ProductFormComponent {
    pub fn new() -> Self {
        Self {
            product: empty_product(),
            saved_product: empty_product(),
            tracker: DirtyStateTracker::new(),
            pending_images: PendingResourceManager::new(ResourceLimits::default()),
            variants_view: PaginatedCollectionController::new(VARIANTS_PAGE_SIZE),
            primary_input_ref: Default::default(),
            additional_input_ref: Default::default(),
            variant_input_ref: Default::default(),
            variant_image_target: None,
            remove_candidate: None,
            remove_dialog_ref: Default::default(),
            zoom_url: None,
            zoom_dialog_ref: Default::default(),
            submitting: false,
            loaded: false,
        }
    }

    /// Normalized projection of the working copy.
    pub fn snapshot(&self) -> FormSnapshot {
        product_snapshot(&self.product)
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty(&self.snapshot())
    }

    /// The navigation-guard signal: dirty working copy or images awaiting
    /// upload.
    pub fn has_unsaved_work(&self) -> bool {
        self.is_dirty() || self.pending_images.has_pending()
    }
}
