/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Storage values: what a descriptor actually holds.
//!
//! A descriptor stores either an [`Index`] (a position in an index-addressed
//! container) or a [`Cursor`] (a re-derivable handle into a key-addressed
//! container). The kind of storage is part of the type of the descriptor, so
//! it is fixed once and for all by the container the descriptor comes from;
//! [`StorageKind`] reflects it at runtime.

use core::fmt::Debug;
use core::hash::Hash;
use sealed::sealed;

/// Runtime reflection of the kind of a [`Storage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StorageKind {
    /// A position in a contiguous, index-addressed container.
    Index,
    /// A key-based handle into an associative container.
    Cursor,
}

/// The storage value of a descriptor.
///
/// This trait is sealed: the only implementations are [`Index`] and
/// [`Cursor`]. Equality, ordering and hashing are those of the stored value,
/// so two descriptors over the same container are equal if and only if they
/// refer to the same element.
#[sealed]
pub trait Storage: Clone + Eq + Ord + Hash + Debug {
    /// The type of the identifier exposed by [`id`](Storage::id).
    type Id;
    /// The kind of this storage.
    const KIND: StorageKind;
    /// Returns the identifier associated with this storage value: the index
    /// itself for [`Index`], the key for [`Cursor`].
    fn id(&self) -> Self::Id;
}

/// A position in an index-addressed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Index(pub usize);

impl Index {
    /// Moves to the next position.
    ///
    /// No bound is checked: moving past the end of the container is allowed,
    /// but resolving the resulting position is not.
    #[inline(always)]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl From<usize> for Index {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Index(index)
    }
}

impl From<Index> for usize {
    #[inline(always)]
    fn from(index: Index) -> Self {
        index.0
    }
}

#[sealed]
impl Storage for Index {
    type Id = usize;
    const KIND: StorageKind = StorageKind::Index;

    #[inline(always)]
    fn id(&self) -> usize {
        self.0
    }
}

/// A handle into a key-addressed container.
///
/// The handle is the key of the element it points to: it can be re-derived
/// from the container at any time, and it stays valid as long as the element
/// is not removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Cursor<K>(pub K);

impl<K> Cursor<K> {
    /// Returns a reference to the key of the element this cursor points to.
    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.0
    }
}

#[sealed]
impl<K: Clone + Ord + Hash + Debug> Storage for Cursor<K> {
    type Id = K;
    const KIND: StorageKind = StorageKind::Cursor;

    #[inline(always)]
    fn id(&self) -> K {
        self.0.clone()
    }
}
