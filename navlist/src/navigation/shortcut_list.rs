//! Rebuilds the shortcut half of the combined list.
//!
//! Shortcut membership depends on live mount state, not only on the
//! shortcut source's own events, so this rebuild runs in full on every
//! change to either source. Both the source and the previous sublist
//! are ordered by the source's comparator, which admits a linear
//! two-pointer merge instead of a general diff.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::source::{DirEntry, ShortcutSource, VolumeManager};

use super::item::NavigationItem;

/// Outcome of a shortcut rebuild: the next sublist plus the local
/// permutation fragment (old local index -> new local index, `None` for
/// removed). The fragment covers every previous item exactly once.
pub(crate) struct ShortcutRebuild {
    pub next: Vec<Arc<NavigationItem>>,
    pub moves: Vec<Option<usize>>,
}

/// Merge the source's current entries against the previous sublist.
///
/// Walks both sequences with one pointer each. An old item whose entry
/// sorts before the current source entry is gone from the source; a
/// source entry sorting before the current old item is new. On a match
/// the old item is reused when its volume is still mounted, dropped
/// otherwise. New and matched entries alike are admitted only while
/// mounted.
pub(crate) fn rebuild_shortcut_list(
    source: &dyn ShortcutSource,
    previous: &[Arc<NavigationItem>],
    volumes: &dyn VolumeManager,
) -> ShortcutRebuild {
    let mut model_index = 0;
    let mut old_index = 0;
    let mut next: Vec<Arc<NavigationItem>> = Vec::new();
    let mut moves: Vec<Option<usize>> = Vec::with_capacity(previous.len());

    while model_index < source.len() && old_index < previous.len() {
        let entry = source.item(model_index);
        let old_entry = previous[old_index]
            .entry()
            .expect("shortcut sublist contains only shortcut items");
        match source.compare(entry.as_ref(), old_entry.as_ref()) {
            Ordering::Greater => {
                // The old item's entry is gone from the source.
                moves.push(None);
                old_index += 1;
            }
            Ordering::Equal => {
                if is_mounted(volumes, entry.as_ref()) {
                    moves.push(Some(next.len()));
                    next.push(Arc::clone(&previous[old_index]));
                } else {
                    moves.push(None);
                }
                old_index += 1;
                model_index += 1;
            }
            Ordering::Less => {
                // The source entry was not present before.
                if is_mounted(volumes, entry.as_ref()) {
                    next.push(NavigationItem::for_shortcut(entry));
                }
                model_index += 1;
            }
        }
    }

    // Remaining source entries are all new.
    for index in model_index..source.len() {
        let entry = source.item(index);
        if is_mounted(volumes, entry.as_ref()) {
            next.push(NavigationItem::for_shortcut(entry));
        }
    }

    // Remaining old items have no source entry left.
    for _ in old_index..previous.len() {
        moves.push(None);
    }

    debug!(shortcuts = next.len(), "rebuilt shortcut sublist");
    ShortcutRebuild { next, moves }
}

/// Mount predicate: the entry's owning volume exists and reports no
/// error.
fn is_mounted(volumes: &dyn VolumeManager, entry: &dyn DirEntry) -> bool {
    volumes
        .volume_for(entry)
        .map(|volume| volume.mount_error().is_none())
        .unwrap_or(false)
}
