//! The volume subsystem interface.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

use super::entry::DirEntry;

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Errors reported by the volume subsystem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VolumeError {
    /// Mounting the volume failed.
    #[error("mount failed: {reason}")]
    MountFailed { reason: String },

    /// The volume is known but not currently reachable.
    #[error("volume is unavailable")]
    Unavailable,

    /// The display root could not be resolved.
    #[error("display root unavailable: {reason}")]
    DisplayRootUnavailable { reason: String },
}

/// A handle to a single volume.
///
/// The handle outlives list membership: the model drops its items when a
/// volume disappears, but callers holding the handle can still query it.
pub trait VolumeInfo: Send + Sync {
    /// Human-readable volume label. Volume items use it as their label.
    fn label(&self) -> String;

    /// The mount error for this volume, if any.
    ///
    /// A shortcut entry counts as *mounted* when [`VolumeManager::volume_for`]
    /// finds a handle for it and that handle reports no error here.
    fn mount_error(&self) -> Option<VolumeError>;

    /// Resolve the volume's display root.
    ///
    /// The model triggers this once per volume item as a detached
    /// best-effort task and ignores the outcome; consumers query the
    /// resolved root later through this handle, not through the model.
    fn resolve_display_root(&self) -> BoxFuture<'static, Result<Arc<dyn DirEntry>, VolumeError>>;
}

/// The volume subsystem: the ordered volume list plus entry-to-volume
/// resolution.
pub trait VolumeManager: Send + Sync {
    /// Number of volumes currently known.
    fn volume_count(&self) -> usize;

    /// The volume at `index` in the subsystem's own order.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `index >= self.volume_count()`.
    fn volume_at(&self, index: usize) -> Arc<dyn VolumeInfo>;

    /// The volume owning `entry`, or `None` when no volume claims it.
    fn volume_for(&self, entry: &dyn DirEntry) -> Option<Arc<dyn VolumeInfo>>;
}
