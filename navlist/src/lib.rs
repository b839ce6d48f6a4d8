//! navlist - a combined navigation list model for file managers.
//!
//! A file manager's sidebar shows two kinds of rows in one list: the
//! mounted volumes, and the user's folder shortcuts. Both underlying
//! collections change on their own schedule - volumes mount and unmount,
//! shortcuts are added and removed - and a shortcut is only worth
//! showing while the volume holding its target is mounted and healthy.
//!
//! `navlist` maintains that combined, ordered, addressable view
//! incrementally. Sources describe their changes as index permutations;
//! the model reconciles its two sublists against them, keeps item
//! instances stable for unchanged entries (so observers can detect "no
//! real change" by identity), and emits a single permutation over the
//! flat combined index space per inbound change.
//!
//! # Example
//!
//! ```ignore
//! use navlist::{NavigationListModel, Permutation};
//!
//! let mut model = NavigationListModel::new(volume_manager, shortcut_source);
//!
//! let id = model.subscribe(|change: &Permutation| {
//!     println!("list now has {} rows", change.new_len());
//! });
//!
//! // Wire each source's change notifications to the matching method:
//! model.apply_volume_change(&permutation_from_volume_source)?;
//! model.apply_shortcut_change()?;
//!
//! model.unsubscribe(id);
//! ```

pub mod error;
pub mod event;
pub mod navigation;
pub mod permutation;
pub mod source;

pub use error::ModelError;
pub use event::{ChangeObserver, ObserverRegistry, SubscriptionId};
pub use navigation::{NavigationItem, NavigationListModel};
pub use permutation::Permutation;
pub use source::{BoxFuture, DirEntry, ShortcutSource, VolumeError, VolumeInfo, VolumeManager};
