//! Interfaces of the external collaborators feeding the model.
//!
//! The model consumes two ordered sources - the volume subsystem and the
//! folder-shortcut store - purely through the traits in this module. It
//! implements none of them: sources own their native collections, the
//! model only reads them and wraps their entries.

mod entry;
mod shortcut;
mod volume;

pub use entry::DirEntry;
pub use shortcut::ShortcutSource;
pub use volume::{BoxFuture, VolumeError, VolumeInfo, VolumeManager};
