//! Component state for the blog form.

use yew::prelude::*;

use common::model::blog::Blog;

use crate::form_engine::browser::BrowserFile;
use crate::form_engine::dirty_state::{DirtyStateTracker, FormSnapshot};
use crate::form_engine::paginated_collection::PaginatedCollectionController;
use crate::form_engine::pending_resources::{PendingResourceManager, ResourceLimits};

use super::helpers::{blog_snapshot, empty_blog};

/// Subsections shown per page.
pub const SUBSECTIONS_PAGE_SIZE: usize = 5;

/// Main state container for the `BlogFormComponent`. Fields are `pub`
/// because they are accessed by the `view` and `update` modules.
pub struct BlogFormComponent {
    /// Working copy of the post. Single writer: only `update` mutates it.
    pub blog: Blog,

    /// The entity as last loaded or saved; `Cancel` restores it.
    pub saved_blog: Blog,

    /// Baseline fingerprint keeper; rebaselined on load and save success.
    pub tracker: DirtyStateTracker,

    /// The cover image awaiting the next save, if one was selected.
    pub pending_cover: PendingResourceManager<BrowserFile>,

    /// Page window and expanded-item state over `blog.subsections`.
    pub subsections_view: PaginatedCollectionController,

    /// Active tab: either `"editor"` or `"preview"`.
    pub active_tab: String,

    /// Hidden file input for the cover image.
    pub cover_input_ref: NodeRef,

    /// Subsection id awaiting removal confirmation in the top sheet.
    pub remove_candidate: Option<String>,

    /// Reference to the removal confirmation top sheet node.
    pub remove_dialog_ref: NodeRef,

    /// Submission-in-flight guard: a second save while one is pending is
    /// ignored, not queued.
    pub submitting: bool,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl BlogFormComponent {
    pub fn new() -> Self {
        Self {
            blog: empty_blog(),
            saved_blog: empty_blog(),
            tracker: DirtyStateTracker::new(),
            pending_cover: PendingResourceManager::new(ResourceLimits::default()),
            subsections_view: PaginatedCollectionController::new(SUBSECTIONS_PAGE_SIZE),
            active_tab: "editor".to_string(),
            cover_input_ref: Default::default(),
            remove_candidate: None,
            remove_dialog_ref: Default::default(),
            submitting: false,
            loaded: false,
        }
    }

    /// Normalized projection of the working copy.
    pub fn snapshot(&self) -> FormSnapshot {
        blog_snapshot(&self.blog)
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty(&self.snapshot())
    }

    /// The navigation-guard signal: dirty working copy or a cover awaiting
    /// upload.
    pub fn has_unsaved_work(&self) -> bool {
        self.is_dirty() || self.pending_cover.has_pending()
    }
}
