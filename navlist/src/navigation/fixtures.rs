//! In-memory collaborators for unit tests.
//!
//! Entries resolve to volumes by their first path component: the entry
//! `/Drive/photos` belongs to the volume labelled `Drive`.

use std::cmp::Ordering;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::source::{
    BoxFuture, DirEntry, ShortcutSource, VolumeError, VolumeInfo, VolumeManager,
};

pub(crate) struct FakeEntry {
    name: String,
    full_path: String,
}

impl FakeEntry {
    pub(crate) fn new(full_path: &str) -> Arc<dyn DirEntry> {
        let name = full_path
            .rsplit('/')
            .next()
            .unwrap_or(full_path)
            .to_string();
        Arc::new(Self {
            name,
            full_path: full_path.to_string(),
        })
    }
}

impl DirEntry for FakeEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_path(&self) -> &str {
        &self.full_path
    }
}

pub(crate) struct FakeVolume {
    label: String,
    error: Mutex<Option<VolumeError>>,
}

impl FakeVolume {
    pub(crate) fn new(label: &str) -> Arc<Self> {
        Arc::new(Self {
            label: label.to_string(),
            error: Mutex::new(None),
        })
    }

    pub(crate) fn set_error(&self, error: Option<VolumeError>) {
        *self.error.lock() = error;
    }
}

impl VolumeInfo for FakeVolume {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn mount_error(&self) -> Option<VolumeError> {
        self.error.lock().clone()
    }

    fn resolve_display_root(&self) -> BoxFuture<'static, Result<Arc<dyn DirEntry>, VolumeError>> {
        let root = FakeEntry::new(&format!("/{}", self.label));
        Box::pin(async move { Ok(root) })
    }
}

pub(crate) struct FakeVolumeManager {
    volumes: Mutex<Vec<Arc<FakeVolume>>>,
}

impl FakeVolumeManager {
    pub(crate) fn new(labels: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            volumes: Mutex::new(labels.iter().map(|label| FakeVolume::new(label)).collect()),
        })
    }

    pub(crate) fn add_volume(&self, label: &str) {
        self.volumes.lock().push(FakeVolume::new(label));
    }

    pub(crate) fn remove_volume(&self, label: &str) {
        self.volumes.lock().retain(|volume| volume.label != label);
    }

    pub(crate) fn volume(&self, label: &str) -> Option<Arc<FakeVolume>> {
        self.volumes
            .lock()
            .iter()
            .find(|volume| volume.label == label)
            .cloned()
    }
}

impl VolumeManager for FakeVolumeManager {
    fn volume_count(&self) -> usize {
        self.volumes.lock().len()
    }

    fn volume_at(&self, index: usize) -> Arc<dyn VolumeInfo> {
        let volume = Arc::clone(&self.volumes.lock()[index]);
        volume as Arc<dyn VolumeInfo>
    }

    fn volume_for(&self, entry: &dyn DirEntry) -> Option<Arc<dyn VolumeInfo>> {
        let path = entry.full_path();
        let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
        self.volumes
            .lock()
            .iter()
            .find(|volume| volume.label == first)
            .map(|volume| Arc::clone(volume) as Arc<dyn VolumeInfo>)
    }
}

pub(crate) struct FakeShortcutSource {
    entries: Mutex<Vec<Arc<dyn DirEntry>>>,
    not_found: Mutex<Vec<String>>,
}

impl FakeShortcutSource {
    pub(crate) fn new(paths: &[&str]) -> Arc<Self> {
        let source = Arc::new(Self {
            entries: Mutex::new(Vec::new()),
            not_found: Mutex::new(Vec::new()),
        });
        source.set_entries(paths);
        source
    }

    /// Replace the stored entries, keeping them in comparator order.
    pub(crate) fn set_entries(&self, paths: &[&str]) {
        let mut sorted: Vec<&str> = paths.to_vec();
        sorted.sort_by_key(|path| path.to_ascii_lowercase());
        *self.entries.lock() = sorted.into_iter().map(FakeEntry::new).collect();
    }

    pub(crate) fn not_found_paths(&self) -> Vec<String> {
        self.not_found.lock().clone()
    }
}

impl ShortcutSource for FakeShortcutSource {
    fn len(&self) -> usize {
        self.entries.lock().len()
    }

    fn item(&self, index: usize) -> Arc<dyn DirEntry> {
        Arc::clone(&self.entries.lock()[index])
    }

    fn compare(&self, a: &dyn DirEntry, b: &dyn DirEntry) -> Ordering {
        a.full_path()
            .to_ascii_lowercase()
            .cmp(&b.full_path().to_ascii_lowercase())
    }

    fn on_item_not_found(&self, entry: &dyn DirEntry) {
        self.not_found.lock().push(entry.full_path().to_string());
    }
}
