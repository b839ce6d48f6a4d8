//! The combined navigation list model.

use std::sync::Arc;

use tracing::debug;

use crate::error::ModelError;
use crate::event::{ObserverRegistry, SubscriptionId};
use crate::permutation::Permutation;
use crate::source::{ShortcutSource, VolumeManager};

use super::item::NavigationItem;
use super::shortcut_list::{rebuild_shortcut_list, ShortcutRebuild};
use super::volume_list::rebuild_volume_list;

/// One flat, addressable list over mounted volumes followed by folder
/// shortcuts.
///
/// The model owns its two sublists and nothing else: the sources own
/// their native collections and are only read. Every change to either
/// source is applied through one of the two `apply_*` methods; each
/// rebuild runs to completion synchronously and ends with exactly one
/// notification carrying the combined permutation over the flat index
/// space.
///
/// The shortcut half is rebuilt on *every* change, including pure volume
/// changes: a volume appearing or erroring shifts the mount state of
/// shortcut entries without the shortcut source firing anything.
///
/// # Reentrancy
///
/// Observers must not feed another change into the model from within a
/// notification callback. The apply methods reject such calls with
/// [`ModelError::ReentrantUpdate`].
pub struct NavigationListModel {
    volumes: Arc<dyn VolumeManager>,
    shortcuts: Arc<dyn ShortcutSource>,
    volume_list: Vec<Arc<NavigationItem>>,
    shortcut_list: Vec<Arc<NavigationItem>>,
    observers: ObserverRegistry,
    dispatching: bool,
}

impl NavigationListModel {
    /// Build the initial combined list: every volume, then every
    /// shortcut whose owning volume is currently mounted. No
    /// notification is emitted for the initial build.
    pub fn new(volumes: Arc<dyn VolumeManager>, shortcuts: Arc<dyn ShortcutSource>) -> Self {
        let volume_list: Vec<Arc<NavigationItem>> = (0..volumes.volume_count())
            .map(|index| NavigationItem::for_volume(volumes.volume_at(index)))
            .collect();
        let ShortcutRebuild {
            next: shortcut_list,
            ..
        } = rebuild_shortcut_list(shortcuts.as_ref(), &[], volumes.as_ref());

        debug!(
            volumes = volume_list.len(),
            shortcuts = shortcut_list.len(),
            "navigation list built"
        );
        Self {
            volumes,
            shortcuts,
            volume_list,
            shortcut_list,
            observers: ObserverRegistry::new(),
            dispatching: false,
        }
    }

    /// Total number of items across both sublists.
    pub fn len(&self) -> usize {
        self.volume_list.len() + self.shortcut_list.len()
    }

    /// Whether the combined list holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The item at `index`: volume items first, shortcut items after.
    /// `None` out of bounds.
    pub fn item(&self, index: usize) -> Option<Arc<NavigationItem>> {
        if index < self.volume_list.len() {
            self.volume_list.get(index).cloned()
        } else {
            self.shortcut_list
                .get(index - self.volume_list.len())
                .cloned()
        }
    }

    /// The flat index of `item`, scanning by instance identity starting
    /// at `from`. `None` when the instance is not in the list.
    pub fn index_of(&self, item: &Arc<NavigationItem>, from: usize) -> Option<usize> {
        self.volume_list
            .iter()
            .chain(self.shortcut_list.iter())
            .enumerate()
            .skip(from)
            .find(|(_, candidate)| NavigationItem::same_item(candidate, item))
            .map(|(index, _)| index)
    }

    /// Read-only view of the shortcut half.
    pub fn folder_shortcuts(&self) -> &[Arc<NavigationItem>] {
        &self.shortcut_list
    }

    /// Subscribe to combined change notifications.
    pub fn subscribe(
        &self,
        observer: impl FnMut(&Permutation) + Send + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Drop the subscription behind `id`.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Apply a change notification from the volume source.
    ///
    /// `change` must describe the volume source's transition from the
    /// state of the previous notification to its current state. The
    /// volume sublist is rebuilt from it; the shortcut sublist is then
    /// rebuilt unconditionally against the new mount state.
    pub fn apply_volume_change(&mut self, change: &Permutation) -> Result<(), ModelError> {
        if self.dispatching {
            return Err(ModelError::ReentrantUpdate);
        }

        let next_volumes = rebuild_volume_list(&self.volume_list, change, self.volumes.as_ref())?;
        let moves = change.moves().to_vec();
        self.finish_rebuild(next_volumes, moves);
        Ok(())
    }

    /// Apply a change notification from the shortcut source.
    ///
    /// The source's own permutation is not consulted: shortcut
    /// membership also depends on mount state, so the sublist is rebuilt
    /// from scratch and the notification is only the trigger. The volume
    /// sublist is untouched and contributes an identity mapping.
    pub fn apply_shortcut_change(&mut self) -> Result<(), ModelError> {
        if self.dispatching {
            return Err(ModelError::ReentrantUpdate);
        }

        let next_volumes = self.volume_list.clone();
        let moves = (0..next_volumes.len()).map(Some).collect();
        self.finish_rebuild(next_volumes, moves);
        Ok(())
    }

    /// Route a not-found correction to the owning source.
    ///
    /// Shortcut corrections are forwarded to the shortcut source, which
    /// owns the cleanup policy. Volume items have no correction path.
    pub fn on_item_not_found(&self, item: &NavigationItem) {
        if let Some(entry) = item.entry() {
            self.shortcuts.on_item_not_found(entry.as_ref());
        }
    }

    /// Swap in the new sublists and dispatch the combined notification.
    ///
    /// `moves` arrives holding the volume contribution in old flat
    /// coordinates; the shortcut fragment is appended with its targets
    /// shifted past the new volume sublist.
    fn finish_rebuild(&mut self, next_volumes: Vec<Arc<NavigationItem>>, mut moves: Vec<Option<usize>>) {
        let ShortcutRebuild {
            next: next_shortcuts,
            moves: shortcut_moves,
        } = rebuild_shortcut_list(
            self.shortcuts.as_ref(),
            &self.shortcut_list,
            self.volumes.as_ref(),
        );

        let offset = next_volumes.len();
        moves.extend(
            shortcut_moves
                .into_iter()
                .map(|target| target.map(|local| local + offset)),
        );

        let new_len = next_volumes.len() + next_shortcuts.len();
        self.volume_list = next_volumes;
        self.shortcut_list = next_shortcuts;

        let change = Permutation::from_parts(moves, new_len);
        debug!(
            volumes = self.volume_list.len(),
            shortcuts = self.shortcut_list.len(),
            new_len,
            "navigation list rebuilt"
        );

        self.dispatching = true;
        self.observers.notify(&change);
        self.dispatching = false;
    }
}
