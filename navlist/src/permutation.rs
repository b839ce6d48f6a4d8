//! Index permutations: the change-description vocabulary shared by the
//! sources and the combined model.
//!
//! A permutation describes a list transition without shipping the list
//! itself. It is indexed by *old* position; each slot holds either the
//! entry's *new* position or nothing, meaning the entry was removed. The
//! resulting list length travels with the mapping because it can exceed
//! the number of surviving entries - the gap is filled by newly created
//! entries the receiver fetches itself.

use crate::error::ModelError;

/// A mapping from old list positions to new ones, plus the new length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    moves: Vec<Option<usize>>,
    new_len: usize,
}

impl Permutation {
    /// Build a permutation, validating that every target fits the new
    /// length and that no two old positions land on the same target.
    pub fn new(moves: Vec<Option<usize>>, new_len: usize) -> Result<Self, ModelError> {
        let mut taken = vec![false; new_len];
        for &target in moves.iter().flatten() {
            if target >= new_len {
                return Err(ModelError::PermutationTargetOutOfBounds { target, new_len });
            }
            if taken[target] {
                return Err(ModelError::PermutationDuplicateTarget { target });
            }
            taken[target] = true;
        }
        Ok(Self { moves, new_len })
    }

    /// Build a permutation the caller has already proven consistent.
    ///
    /// Invariant: targets are unique and below `new_len`. The sublist
    /// builders uphold this by construction.
    pub(crate) fn from_parts(moves: Vec<Option<usize>>, new_len: usize) -> Self {
        Self { moves, new_len }
    }

    /// The permutation that keeps every entry of a `len`-entry list in
    /// place.
    pub fn identity(len: usize) -> Self {
        Self {
            moves: (0..len).map(Some).collect(),
            new_len: len,
        }
    }

    /// Number of old positions covered.
    pub fn old_len(&self) -> usize {
        self.moves.len()
    }

    /// Length of the list after the transition.
    pub fn new_len(&self) -> usize {
        self.new_len
    }

    /// The new position of `old_index`, or `None` if the entry was
    /// removed or `old_index` is not covered.
    pub fn target(&self, old_index: usize) -> Option<usize> {
        self.moves.get(old_index).copied().flatten()
    }

    /// The raw old-position -> new-position mapping, removals included.
    pub fn moves(&self) -> &[Option<usize>] {
        &self.moves
    }

    /// Whether the transition keeps every entry at its position.
    pub fn is_identity(&self) -> bool {
        self.new_len == self.moves.len()
            && self
                .moves
                .iter()
                .enumerate()
                .all(|(index, target)| *target == Some(index))
    }
}
