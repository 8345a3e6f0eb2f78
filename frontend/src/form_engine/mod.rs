//! Form session engine shared by every multi-field edit/create screen.
//!
//! Three components, each independently testable, composed by the
//! screen-level form components:
//!
//! - [`pending_resources::PendingResourceManager`] — locally selected files
//!   that must not be uploaded until the form is submitted, with live
//!   previews and replace/remove before that point.
//! - [`dirty_state::DirtyStateTracker`] — normalized snapshot comparison
//!   answering "does the working copy differ from the last saved state".
//! - [`paginated_collection::PaginatedCollectionController`] — page window
//!   and single-expanded-item tracking over a user-editable ordered list.
//!
//! The engine holds no DOM references and performs no rendering; everything
//! browser-specific (object URLs, the upload endpoint) enters through the
//! collaborator implementations in [`browser`].

pub mod browser;
pub mod dirty_state;
pub mod paginated_collection;
pub mod pending_resources;
