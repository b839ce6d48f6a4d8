//! The folder-shortcut source interface.

use std::cmp::Ordering;
use std::sync::Arc;

use super::entry::DirEntry;

/// An ordered collection of persisted folder shortcuts.
///
/// Entries are delivered in the source's own ascending [`compare`] order.
/// The model relies on that order for its linear reconciliation merge and
/// never sorts on its own.
///
/// [`compare`]: ShortcutSource::compare
pub trait ShortcutSource: Send + Sync {
    /// Number of shortcut entries.
    fn len(&self) -> usize;

    /// Whether the source holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The entry at `index` in comparator order.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `index >= self.len()`.
    fn item(&self, index: usize) -> Arc<dyn DirEntry>;

    /// The source's ascending comparator between two of its entries.
    fn compare(&self, a: &dyn DirEntry, b: &dyn DirEntry) -> Ordering;

    /// Correction callback: `entry` was reported missing from the
    /// filesystem. What "not found" means - typically dropping the
    /// persisted shortcut - is this source's decision.
    fn on_item_not_found(&self, entry: &dyn DirEntry);
}
