//! Deferred-upload bookkeeping for locally selected images.
//!
//! A [`PendingResourceManager`] bridges the gap between "the user picked a
//! file" and "the file is durably stored". Files are validated and attached
//! synchronously at selection time, each with a revocable preview handle for
//! on-screen display, and nothing touches the network until the surrounding
//! form is submitted and [`PendingResourceManager::upload_all`] runs.
//!
//! Slots
//! - one `Primary` resource (replacing revokes the previous preview),
//! - up to a configured number of `Additional` resources,
//! - any number of keyed `NamedSlot` resources (one per key, e.g. one image
//!   per product variant).
//!
//! Every preview handle created here is revoked exactly once: on explicit
//! removal, on replacement, or via [`PendingResourceManager::release_all`]
//! from the owning component's teardown hook.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// A local file handle as the engine sees it: metadata, instance identity,
/// and preview-URL management. The browser implementation wraps
/// `web_sys::File`; tests use an in-memory fake.
pub trait ResourceFile: Clone {
    fn name(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// MIME type as reported by the file picker (e.g. `image/png`).
    fn mime_type(&self) -> String;

    /// True when both handles refer to the exact same underlying file
    /// instance, not merely equal content.
    fn is_same_instance(&self, other: &Self) -> bool;

    /// Creates a display-only, revocable preview reference for this file.
    fn create_preview_url(&self) -> String;

    /// Revokes a reference previously returned by `create_preview_url`.
    fn revoke_preview_url(url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRole {
    /// The single main image slot of the form.
    Primary,
    /// One of the 0..N additional image slots.
    Additional,
    /// A keyed single slot, e.g. the image of one collection item.
    NamedSlot(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Pending,
    Uploading,
    Uploaded,
    Failed,
}

/// A locally selected file that has not been durably stored yet.
#[derive(Debug, Clone)]
pub struct PendingResource<F> {
    /// Opaque unique identifier, assigned at registration.
    pub id: String,
    pub file: F,
    /// Preview handle, owned by the manager. Revoked exactly once.
    pub preview_url: String,
    pub role: ResourceRole,
    pub status: ResourceStatus,
}

/// Validation errors raised synchronously at registration time. These never
/// reach the network layer; the user simply picks another file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("el archivo no es una imagen")]
    InvalidType,
    #[error("la imagen supera el tamaño máximo de {0} bytes")]
    TooLarge(u64),
    #[error("no quedan espacios para imágenes adicionales")]
    CapacityExceeded,
    #[error("la imagen ya está adjunta")]
    Duplicate,
}

/// Failure reported by a [`StorageUploader`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("error de red: {0}")]
    Network(String),
    #[error("el servidor rechazó la subida: {0}")]
    Server(String),
}

/// Raised by [`PendingResourceManager::upload_all`]. All pending resources
/// are back in their pre-upload state when this surfaces, so the user can
/// retry without re-selecting files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no se pudo subir \"{filename}\": {source}")]
pub struct UploadFailed {
    pub filename: String,
    #[source]
    pub source: UploadError,
}

/// External storage collaborator. The production implementation POSTs the
/// file to the asset endpoint; tests record calls and fabricate URLs.
#[async_trait(?Send)]
pub trait StorageUploader<F: ResourceFile> {
    async fn upload(&self, file: &F, folder: &str) -> Result<UploadedAsset, UploadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    pub url: String,
    pub thumbnail_url: Option<String>,
}

/// Registration limits. Sizes in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLimits {
    pub max_file_bytes: u64,
    pub max_additional: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_file_bytes: 5 * 1024 * 1024,
            max_additional: 5,
        }
    }
}

/// Result of a bulk additional-slot registration. Rejected files consumed
/// no slot and produced no side effect.
#[derive(Debug)]
pub struct AdditionalRegistration<F> {
    pub accepted: Vec<PendingResource<F>>,
    pub rejected: Vec<(F, RegisterError)>,
}

/// URLs obtained by a fully successful [`PendingResourceManager::upload_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedResources {
    pub primary_url: Option<String>,
    /// One URL per additional slot, in slot order.
    pub additional_urls: Vec<String>,
    /// Slot key -> URL for every named slot.
    pub named_slot_urls: BTreeMap<String, String>,
}

struct Inner<F> {
    limits: ResourceLimits,
    primary: Option<PendingResource<F>>,
    additional: Vec<PendingResource<F>>,
    named: BTreeMap<String, PendingResource<F>>,
}

/// Owner of all pending resources and their preview handles for one form.
///
/// Internally reference counted so a clone can travel into `spawn_local`
/// for the upload while the component keeps its handle; all interior
/// borrows are released before any await point.
pub struct PendingResourceManager<F: ResourceFile> {
    inner: Rc<RefCell<Inner<F>>>,
}

impl<F: ResourceFile> Clone for PendingResourceManager<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct UploadTask<F> {
    id: String,
    file: F,
    role: ResourceRole,
    /// Same underlying file instance as the primary slot: upload once,
    /// reuse the primary's URL.
    alias_of_primary: bool,
}

impl<F: ResourceFile> PendingResourceManager<F> {
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                limits,
                primary: None,
                additional: Vec::new(),
                named: BTreeMap::new(),
            })),
        }
    }

    fn validate(limits: &ResourceLimits, file: &F) -> Result<(), RegisterError> {
        if !file.mime_type().starts_with("image/") {
            return Err(RegisterError::InvalidType);
        }
        if file.size() > limits.max_file_bytes {
            return Err(RegisterError::TooLarge(limits.max_file_bytes));
        }
        Ok(())
    }

    fn attach(file: F, role: ResourceRole) -> PendingResource<F> {
        let preview_url = file.create_preview_url();
        PendingResource {
            id: Uuid::new_v4().to_string(),
            file,
            preview_url,
            role,
            status: ResourceStatus::Pending,
        }
    }

    /// Registers the primary image, replacing (and revoking the preview of)
    /// any primary registered before. No side effect on rejection.
    pub fn register_primary(&self, file: F) -> Result<PendingResource<F>, RegisterError> {
        let mut inner = self.inner.borrow_mut();
        Self::validate(&inner.limits, &file)?;
        if let Some(old) = inner.primary.take() {
            F::revoke_preview_url(&old.preview_url);
        }
        let resource = Self::attach(file, ResourceRole::Primary);
        inner.primary = Some(resource.clone());
        Ok(resource)
    }

    /// Registers the image of a keyed slot, with the same replace semantics
    /// as the primary slot.
    pub fn register_named(&self, slot: &str, file: F) -> Result<PendingResource<F>, RegisterError> {
        let mut inner = self.inner.borrow_mut();
        Self::validate(&inner.limits, &file)?;
        if let Some(old) = inner.named.remove(slot) {
            F::revoke_preview_url(&old.preview_url);
        }
        let resource = Self::attach(file, ResourceRole::NamedSlot(slot.to_string()));
        inner.named.insert(slot.to_string(), resource.clone());
        Ok(resource)
    }

    /// Registers a batch of additional images. Files beyond the remaining
    /// capacity are rejected with `CapacityExceeded`; files whose
    /// `(name, size)` already appear in the additional set are rejected
    /// with `Duplicate`; each accepted file is validated as in
    /// [`Self::register_primary`]. A rejected file consumes no slot.
    pub fn register_additional(&self, files: Vec<F>) -> AdditionalRegistration<F> {
        let mut inner = self.inner.borrow_mut();
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for file in files {
            if inner.additional.len() >= inner.limits.max_additional {
                rejected.push((file, RegisterError::CapacityExceeded));
                continue;
            }
            if let Err(reason) = Self::validate(&inner.limits, &file) {
                rejected.push((file, reason));
                continue;
            }
            // (name, size) is a heuristic identity, not a content hash.
            let duplicate = inner
                .additional
                .iter()
                .any(|held| held.file.name() == file.name() && held.file.size() == file.size());
            if duplicate {
                rejected.push((file, RegisterError::Duplicate));
                continue;
            }
            let resource = Self::attach(file, ResourceRole::Additional);
            inner.additional.push(resource.clone());
            accepted.push(resource);
        }

        AdditionalRegistration { accepted, rejected }
    }

    /// Revokes the resource's preview and drops it from the pending set.
    /// Removing an unknown id is a no-op, not an error.
    pub fn remove(&self, resource_id: &str) {
        let mut inner = self.inner.borrow_mut();
        if inner
            .primary
            .as_ref()
            .is_some_and(|held| held.id == resource_id)
        {
            if let Some(old) = inner.primary.take() {
                F::revoke_preview_url(&old.preview_url);
            }
            return;
        }
        if let Some(pos) = inner
            .additional
            .iter()
            .position(|held| held.id == resource_id)
        {
            let old = inner.additional.remove(pos);
            F::revoke_preview_url(&old.preview_url);
            return;
        }
        let slot = inner
            .named
            .iter()
            .find(|(_, held)| held.id == resource_id)
            .map(|(key, _)| key.clone());
        if let Some(slot) = slot {
            if let Some(old) = inner.named.remove(&slot) {
                F::revoke_preview_url(&old.preview_url);
            }
        }
    }

    /// Revokes every outstanding preview handle and empties the manager.
    /// Must run on container teardown, including early unmount mid-edit.
    pub fn release_all(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(old) = inner.primary.take() {
            F::revoke_preview_url(&old.preview_url);
        }
        for old in inner.additional.drain(..) {
            F::revoke_preview_url(&old.preview_url);
        }
        let named = std::mem::take(&mut inner.named);
        for (_, old) in named {
            F::revoke_preview_url(&old.preview_url);
        }
    }

    /// True while any resource awaits upload — one half of the external
    /// "has unsaved work" navigation-guard signal.
    pub fn has_pending(&self) -> bool {
        let inner = self.inner.borrow();
        inner.primary.is_some() || !inner.additional.is_empty() || !inner.named.is_empty()
    }

    /// Additional slots still free, for the picker affordance.
    pub fn remaining_additional_capacity(&self) -> usize {
        let inner = self.inner.borrow();
        inner.limits.max_additional.saturating_sub(inner.additional.len())
    }

    pub fn primary(&self) -> Option<PendingResource<F>> {
        self.inner.borrow().primary.clone()
    }

    pub fn additional(&self) -> Vec<PendingResource<F>> {
        self.inner.borrow().additional.clone()
    }

    pub fn named(&self, slot: &str) -> Option<PendingResource<F>> {
        self.inner.borrow().named.get(slot).cloned()
    }

    fn set_status(&self, resource_id: &str, status: ResourceStatus) {
        let mut inner = self.inner.borrow_mut();
        if let Some(held) = inner.primary.as_mut().filter(|held| held.id == resource_id) {
            held.status = status;
            return;
        }
        if let Some(held) = inner
            .additional
            .iter_mut()
            .find(|held| held.id == resource_id)
        {
            held.status = status;
            return;
        }
        if let Some(held) = inner
            .named
            .values_mut()
            .find(|held| held.id == resource_id)
        {
            held.status = status;
        }
    }

    fn set_all_statuses(&self, status: ResourceStatus) {
        let mut inner = self.inner.borrow_mut();
        if let Some(held) = inner.primary.as_mut() {
            held.status = status;
        }
        for held in inner.additional.iter_mut() {
            held.status = status;
        }
        for held in inner.named.values_mut() {
            held.status = status;
        }
    }

    fn upload_plan(&self) -> Vec<UploadTask<F>> {
        let inner = self.inner.borrow();
        let mut tasks = Vec::new();
        if let Some(held) = &inner.primary {
            tasks.push(UploadTask {
                id: held.id.clone(),
                file: held.file.clone(),
                role: held.role.clone(),
                alias_of_primary: false,
            });
        }
        for held in &inner.additional {
            let alias = inner
                .primary
                .as_ref()
                .is_some_and(|primary| primary.file.is_same_instance(&held.file));
            tasks.push(UploadTask {
                id: held.id.clone(),
                file: held.file.clone(),
                role: held.role.clone(),
                alias_of_primary: alias,
            });
        }
        for held in inner.named.values() {
            tasks.push(UploadTask {
                id: held.id.clone(),
                file: held.file.clone(),
                role: held.role.clone(),
                alias_of_primary: false,
            });
        }
        tasks
    }

    /// Uploads every held resource under `destination_folder`, strictly
    /// before the caller issues its save request.
    ///
    /// All-or-nothing: URLs are only returned (and resources only marked
    /// `Uploaded`) once every upload succeeded. On the first failure the
    /// operation stops, already-obtained URLs are discarded, every resource
    /// is reset to `Pending` (the failing one passes through `Failed`
    /// first), and [`UploadFailed`] surfaces to the caller.
    ///
    /// When the primary and an additional slot hold the exact same file
    /// instance, the file is uploaded once and the URL reused for both.
    pub async fn upload_all<U>(
        &self,
        uploader: &U,
        destination_folder: &str,
    ) -> Result<UploadedResources, UploadFailed>
    where
        U: StorageUploader<F>,
    {
        let tasks = self.upload_plan();
        if tasks.is_empty() {
            return Ok(UploadedResources::default());
        }

        let mut primary_url: Option<String> = None;
        let mut obtained: Vec<(ResourceRole, String)> = Vec::new();

        for task in &tasks {
            if task.alias_of_primary {
                if let Some(url) = primary_url.clone() {
                    obtained.push((task.role.clone(), url));
                    continue;
                }
            }
            self.set_status(&task.id, ResourceStatus::Uploading);
            match uploader.upload(&task.file, destination_folder).await {
                Ok(asset) => {
                    if task.role == ResourceRole::Primary {
                        primary_url = Some(asset.url.clone());
                    }
                    obtained.push((task.role.clone(), asset.url));
                }
                Err(source) => {
                    self.set_status(&task.id, ResourceStatus::Failed);
                    // Pre-upload state for every resource so the user can
                    // retry without re-selecting files.
                    self.set_all_statuses(ResourceStatus::Pending);
                    return Err(UploadFailed {
                        filename: task.file.name(),
                        source,
                    });
                }
            }
        }

        self.set_all_statuses(ResourceStatus::Uploaded);

        let mut uploaded = UploadedResources::default();
        for (role, url) in obtained {
            match role {
                ResourceRole::Primary => uploaded.primary_url = Some(url),
                ResourceRole::Additional => uploaded.additional_urls.push(url),
                ResourceRole::NamedSlot(key) => {
                    uploaded.named_slot_urls.insert(key, url);
                }
            }
        }
        Ok(uploaded)
    }
}

impl<F: ResourceFile> Default for PendingResourceManager<F> {
    fn default() -> Self {
        Self::new(ResourceLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    thread_local! {
        static REVOKED: RefCell<Vec<String>> = RefCell::new(Vec::new());
        static CREATED: RefCell<u32> = const { RefCell::new(0) };
    }

    fn revoked() -> Vec<String> {
        REVOKED.with(|log| log.borrow().clone())
    }

    fn created_count() -> u32 {
        CREATED.with(|counter| *counter.borrow())
    }

    #[derive(Debug, Clone)]
    struct FakeFile {
        instance: Rc<()>,
        name: String,
        size: u64,
        mime: String,
    }

    impl FakeFile {
        fn image(name: &str, size: u64) -> Self {
            Self {
                instance: Rc::new(()),
                name: name.to_string(),
                size,
                mime: "image/png".to_string(),
            }
        }

        fn with_mime(name: &str, size: u64, mime: &str) -> Self {
            Self {
                mime: mime.to_string(),
                ..Self::image(name, size)
            }
        }
    }

    impl ResourceFile for FakeFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn size(&self) -> u64 {
            self.size
        }

        fn mime_type(&self) -> String {
            self.mime.clone()
        }

        fn is_same_instance(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.instance, &other.instance)
        }

        fn create_preview_url(&self) -> String {
            CREATED.with(|counter| {
                *counter.borrow_mut() += 1;
                format!("preview:{}:{}", self.name, counter.borrow())
            })
        }

        fn revoke_preview_url(url: &str) {
            REVOKED.with(|log| log.borrow_mut().push(url.to_string()));
        }
    }

    struct FakeUploader {
        calls: RefCell<Vec<String>>,
        fail_at_call: Option<usize>,
    }

    impl FakeUploader {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_at_call: None,
            }
        }

        fn failing_at(call: usize) -> Self {
            Self {
                fail_at_call: Some(call),
                ..Self::new()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl StorageUploader<FakeFile> for FakeUploader {
        async fn upload(
            &self,
            file: &FakeFile,
            folder: &str,
        ) -> Result<UploadedAsset, UploadError> {
            let call = self.calls.borrow().len();
            self.calls.borrow_mut().push(file.name());
            if self.fail_at_call == Some(call) {
                return Err(UploadError::Network("connection reset".to_string()));
            }
            Ok(UploadedAsset {
                url: format!("https://cdn.test/{}/{}", folder, file.name()),
                thumbnail_url: None,
            })
        }
    }

    fn manager() -> PendingResourceManager<FakeFile> {
        PendingResourceManager::new(ResourceLimits {
            max_file_bytes: 1024,
            max_additional: 5,
        })
    }

    #[test]
    fn rejects_non_image_primary_without_side_effects() {
        let pending = manager();
        let result = pending.register_primary(FakeFile::with_mime("a.pdf", 10, "application/pdf"));
        assert_eq!(result.unwrap_err(), RegisterError::InvalidType);
        assert!(!pending.has_pending());
        assert_eq!(created_count(), 0);
    }

    #[test]
    fn rejects_oversized_primary() {
        let pending = manager();
        let result = pending.register_primary(FakeFile::image("big.png", 4096));
        assert_eq!(result.unwrap_err(), RegisterError::TooLarge(1024));
        assert!(!pending.has_pending());
    }

    #[test]
    fn replacing_primary_revokes_previous_preview() {
        let pending = manager();
        let first = pending.register_primary(FakeFile::image("a.png", 10)).unwrap();
        let second = pending.register_primary(FakeFile::image("b.png", 10)).unwrap();
        assert_eq!(revoked(), vec![first.preview_url.clone()]);
        assert_eq!(pending.primary().unwrap().id, second.id);
    }

    #[test]
    fn remove_is_idempotent() {
        let pending = manager();
        let resource = pending.register_primary(FakeFile::image("a.png", 10)).unwrap();
        pending.remove(&resource.id);
        pending.remove(&resource.id);
        pending.remove("no-such-id");
        assert!(!pending.has_pending());
        // Exactly one revoke despite three remove calls.
        assert_eq!(revoked(), vec![resource.preview_url]);
    }

    #[test]
    fn capacity_of_five_rejects_the_sixth() {
        let pending = manager();
        let files = (0..6)
            .map(|n| FakeFile::image(&format!("img-{}.png", n), 10))
            .collect();
        let registration = pending.register_additional(files);
        assert_eq!(registration.accepted.len(), 5);
        assert_eq!(registration.rejected.len(), 1);
        assert_eq!(registration.rejected[0].1, RegisterError::CapacityExceeded);
        assert_eq!(registration.rejected[0].0.name, "img-5.png");
    }

    #[test]
    fn duplicate_name_and_size_rejected() {
        let pending = manager();
        pending.register_additional(vec![FakeFile::image("a.png", 10)]);
        let registration = pending.register_additional(vec![
            FakeFile::image("a.png", 10),
            FakeFile::image("a.png", 11),
        ]);
        assert_eq!(registration.accepted.len(), 1);
        assert_eq!(registration.rejected.len(), 1);
        assert_eq!(registration.rejected[0].1, RegisterError::Duplicate);
    }

    #[test]
    fn invalid_file_consumes_no_slot() {
        let pending = manager();
        let mut files = vec![FakeFile::with_mime("notes.txt", 10, "text/plain")];
        files.extend((0..5).map(|n| FakeFile::image(&format!("img-{}.png", n), 10)));
        let registration = pending.register_additional(files);
        assert_eq!(registration.accepted.len(), 5);
        assert_eq!(registration.rejected[0].1, RegisterError::InvalidType);
    }

    #[test]
    fn upload_all_uploads_shared_instance_once() {
        let pending = manager();
        let shared = FakeFile::image("hero.png", 64);
        pending.register_primary(shared.clone()).unwrap();
        pending.register_additional(vec![shared, FakeFile::image("side.png", 32)]);

        let uploader = FakeUploader::new();
        let uploaded = block_on(pending.upload_all(&uploader, "products/p1")).unwrap();

        assert_eq!(uploader.call_count(), 2);
        assert_eq!(
            uploaded.primary_url.as_deref(),
            Some("https://cdn.test/products/p1/hero.png")
        );
        assert_eq!(uploaded.additional_urls.len(), 2);
        assert_eq!(uploaded.additional_urls[0], uploaded.primary_url.unwrap());
    }

    #[test]
    fn upload_failure_discards_urls_and_resets_statuses() {
        let pending = manager();
        pending.register_primary(FakeFile::image("hero.png", 64)).unwrap();
        pending.register_additional(vec![
            FakeFile::image("a.png", 1),
            FakeFile::image("b.png", 2),
            FakeFile::image("c.png", 3),
        ]);

        // Primary uploads first; the third additional (call index 3) fails.
        let uploader = FakeUploader::failing_at(3);
        let error = block_on(pending.upload_all(&uploader, "products/p1")).unwrap_err();
        assert_eq!(error.filename, "c.png");

        assert_eq!(pending.primary().unwrap().status, ResourceStatus::Pending);
        for held in pending.additional() {
            assert_eq!(held.status, ResourceStatus::Pending);
        }
        // Fail fast: nothing after the failing upload was attempted.
        assert_eq!(uploader.call_count(), 4);
    }

    #[test]
    fn upload_success_marks_everything_uploaded() {
        let pending = manager();
        pending.register_primary(FakeFile::image("hero.png", 64)).unwrap();
        pending
            .register_named("variant-1", FakeFile::image("v1.png", 8))
            .unwrap();

        let uploader = FakeUploader::new();
        let uploaded = block_on(pending.upload_all(&uploader, "products/p1")).unwrap();

        assert_eq!(pending.primary().unwrap().status, ResourceStatus::Uploaded);
        assert_eq!(
            pending.named("variant-1").unwrap().status,
            ResourceStatus::Uploaded
        );
        assert_eq!(
            uploaded.named_slot_urls.get("variant-1").map(String::as_str),
            Some("https://cdn.test/products/p1/v1.png")
        );
    }

    #[test]
    fn upload_all_with_nothing_held_is_a_no_op() {
        let pending = manager();
        let uploader = FakeUploader::new();
        let uploaded = block_on(pending.upload_all(&uploader, "products/p1")).unwrap();
        assert_eq!(uploaded, UploadedResources::default());
        assert_eq!(uploader.call_count(), 0);
    }

    #[test]
    fn named_slot_replacement_revokes_previous_preview() {
        let pending = manager();
        let first = pending
            .register_named("variant-1", FakeFile::image("v1.png", 8))
            .unwrap();
        pending
            .register_named("variant-1", FakeFile::image("v1b.png", 9))
            .unwrap();
        assert_eq!(revoked(), vec![first.preview_url]);
        assert_eq!(pending.named("variant-1").unwrap().file.name, "v1b.png");
    }

    #[test]
    fn release_all_revokes_every_outstanding_preview() {
        let pending = manager();
        pending.register_primary(FakeFile::image("hero.png", 64)).unwrap();
        pending.register_additional(vec![
            FakeFile::image("a.png", 1),
            FakeFile::image("b.png", 2),
        ]);
        pending
            .register_named("variant-1", FakeFile::image("v1.png", 8))
            .unwrap();

        pending.release_all();

        assert!(!pending.has_pending());
        assert_eq!(revoked().len() as u32, created_count());
        // A second teardown has nothing left to revoke.
        pending.release_all();
        assert_eq!(revoked().len() as u32, created_count());
    }
}
