//! Model error types.

use thiserror::Error;

/// Errors produced by the combined navigation list model.
///
/// Routine source churn is not an error: entries that vanish from a
/// source or lose their volume are excluded through the permutation
/// mechanism. These variants cover malformed inbound change descriptions
/// and contract violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An inbound permutation does not cover the sublist it applies to.
    #[error("permutation covers {actual} entries but the list has {expected}")]
    PermutationLengthMismatch { expected: usize, actual: usize },

    /// A permutation target lies beyond the new length.
    #[error("permutation target {target} is out of bounds for new length {new_len}")]
    PermutationTargetOutOfBounds { target: usize, new_len: usize },

    /// Two old positions map to the same new position.
    #[error("permutation maps two entries to target {target}")]
    PermutationDuplicateTarget { target: usize },

    /// An update was requested from within a change notification.
    #[error("the model cannot be updated from within a change notification")]
    ReentrantUpdate,
}
