//! Rebuilds the volume half of the combined list.
//!
//! The volume source ships a full permutation with its change events, so
//! no comparator or diffing is needed here: surviving items move to
//! their mapped slot, unfilled slots get fresh items, removed indices
//! drop out.

use std::sync::Arc;

use tracing::debug;

use crate::error::ModelError;
use crate::permutation::Permutation;
use crate::source::VolumeManager;

use super::item::NavigationItem;

/// Produce the next volume sublist from the previous one and the volume
/// source's permutation.
///
/// Surviving items keep their identity at their mapped index. Indices
/// the permutation leaves unfilled are populated with fresh items for
/// the volume at that position, which also primes display-root
/// resolution. The inbound permutation must cover the previous sublist
/// exactly.
pub(crate) fn rebuild_volume_list(
    previous: &[Arc<NavigationItem>],
    change: &Permutation,
    volumes: &dyn VolumeManager,
) -> Result<Vec<Arc<NavigationItem>>, ModelError> {
    if change.old_len() != previous.len() {
        return Err(ModelError::PermutationLengthMismatch {
            expected: previous.len(),
            actual: change.old_len(),
        });
    }

    let mut slots: Vec<Option<Arc<NavigationItem>>> = vec![None; change.new_len()];
    for (old_index, target) in change.moves().iter().enumerate() {
        if let Some(target) = *target {
            slots[target] = Some(Arc::clone(&previous[old_index]));
        }
    }

    let next: Vec<Arc<NavigationItem>> = slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.unwrap_or_else(|| NavigationItem::for_volume(volumes.volume_at(index)))
        })
        .collect();

    debug!(volumes = next.len(), "rebuilt volume sublist");
    Ok(next)
}
