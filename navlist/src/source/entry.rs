//! Native directory entry handles.

/// A directory entry as the sources hand it out.
///
/// Entries are owned by the sources and never mutated by the model. The
/// model does not order entries itself; ordering between two shortcut
/// entries is the shortcut source's business
/// ([`ShortcutSource::compare`](crate::source::ShortcutSource::compare)).
pub trait DirEntry: Send + Sync {
    /// Leaf name of the entry. Shortcut items use it as their label.
    fn name(&self) -> &str;

    /// Full path of the entry within its volume.
    fn full_path(&self) -> &str;
}
