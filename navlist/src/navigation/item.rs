//! The identity-bearing item wrapper over volume and shortcut entries.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::source::{DirEntry, VolumeInfo};

enum ItemKind {
    Volume(Arc<dyn VolumeInfo>),
    Shortcut(Arc<dyn DirEntry>),
}

/// One row of the combined navigation list.
///
/// An item is immutable once constructed and carries no state of its
/// own beyond the label and the wrapped handle. Identity is allocation
/// identity: rebuilds keep the same `Arc` for an unchanged entry, so
/// pointer equality ([`NavigationItem::same_item`]) is the "no real
/// change" signal observers key off.
pub struct NavigationItem {
    label: String,
    kind: ItemKind,
}

impl NavigationItem {
    /// Wrap a volume handle, labelled with the volume's label.
    ///
    /// Construction fires a detached display-root resolution for the
    /// volume so later queries through the handle find it primed. The
    /// task is skipped when no tokio runtime is running; the result is
    /// ignored either way, and the task is never cancelled.
    pub fn for_volume(volume: Arc<dyn VolumeInfo>) -> Arc<Self> {
        prime_display_root(&volume);
        Arc::new(Self {
            label: volume.label(),
            kind: ItemKind::Volume(volume),
        })
    }

    /// Wrap a shortcut entry, labelled with the entry's leaf name.
    pub fn for_shortcut(entry: Arc<dyn DirEntry>) -> Arc<Self> {
        Arc::new(Self {
            label: entry.name().to_string(),
            kind: ItemKind::Shortcut(entry),
        })
    }

    /// The display label captured at construction.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this item wraps a volume.
    pub fn is_volume(&self) -> bool {
        matches!(self.kind, ItemKind::Volume(_))
    }

    /// Whether this item wraps a shortcut entry.
    pub fn is_shortcut(&self) -> bool {
        matches!(self.kind, ItemKind::Shortcut(_))
    }

    /// The wrapped volume handle, for volume items.
    pub fn volume(&self) -> Option<&Arc<dyn VolumeInfo>> {
        match &self.kind {
            ItemKind::Volume(volume) => Some(volume),
            ItemKind::Shortcut(_) => None,
        }
    }

    /// The wrapped shortcut entry, for shortcut items.
    pub fn entry(&self) -> Option<&Arc<dyn DirEntry>> {
        match &self.kind {
            ItemKind::Shortcut(entry) => Some(entry),
            ItemKind::Volume(_) => None,
        }
    }

    /// Whether `a` and `b` are the same item instance.
    pub fn same_item(a: &Arc<NavigationItem>, b: &Arc<NavigationItem>) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl std::fmt::Debug for NavigationItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            ItemKind::Volume(_) => "volume",
            ItemKind::Shortcut(_) => "shortcut",
        };
        f.debug_struct("NavigationItem")
            .field("label", &self.label)
            .field("kind", &kind)
            .finish()
    }
}

fn prime_display_root(volume: &Arc<dyn VolumeInfo>) {
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        trace!(volume = %volume.label(), "no runtime, display root left unprimed");
        return;
    };
    let label = volume.label();
    let resolution = volume.resolve_display_root();
    handle.spawn(async move {
        match resolution.await {
            Ok(root) => trace!(volume = %label, root = %root.full_path(), "display root resolved"),
            Err(e) => debug!(volume = %label, error = %e, "display root resolution failed"),
        }
    });
}
