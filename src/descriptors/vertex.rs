/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Index, Storage, StorageKind};
use crate::traits::VertexContainer;

/// A handle over a vertex.
///
/// The type parameter is the kind of storage: [`Index`] for index-addressed
/// containers, [`Cursor<K>`](super::Cursor) for key-addressed ones.
/// Equality, ordering and hashing are those of the storage value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct VertexDescriptor<S = Index> {
    storage: S,
}

impl<S: Storage> From<S> for VertexDescriptor<S> {
    #[inline(always)]
    fn from(storage: S) -> Self {
        Self::new(storage)
    }
}

impl<S: Storage> VertexDescriptor<S> {
    /// Creates a descriptor from a raw storage value.
    ///
    /// No validation is performed.
    #[inline(always)]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the raw storage value.
    #[inline(always)]
    pub fn value(&self) -> &S {
        &self.storage
    }

    /// Consumes the descriptor, returning the raw storage value.
    #[inline(always)]
    pub fn into_value(self) -> S {
        self.storage
    }

    /// Returns the identifier of the vertex: the index for index storage,
    /// the key for cursor storage.
    #[inline(always)]
    pub fn id(&self) -> S::Id {
        self.storage.id()
    }

    /// Returns the kind of storage of this descriptor.
    #[inline(always)]
    pub fn kind(&self) -> StorageKind {
        S::KIND
    }

    /// Returns the element of `container` referenced by this descriptor.
    ///
    /// `container` must be the container this descriptor was derived from.
    #[inline(always)]
    pub fn resolve<'a, C>(&self, container: &'a C) -> C::Element<'a>
    where
        C: VertexContainer<Storage = S> + ?Sized,
    {
        container.resolve(&self.storage)
    }

    /// Returns the payload of the element of `container` referenced by this
    /// descriptor: the value for key-addressed containers, the whole element
    /// otherwise.
    ///
    /// `container` must be the container this descriptor was derived from.
    #[inline(always)]
    pub fn inner<'a, C>(&self, container: &'a C) -> &'a C::Inner
    where
        C: VertexContainer<Storage = S> + ?Sized,
    {
        container.inner(&self.storage)
    }

    /// Returns the descriptor of the following vertex of `container`, or
    /// `None` if this is the last one.
    #[inline(always)]
    pub fn next_in<C>(&self, container: &C) -> Option<Self>
    where
        C: VertexContainer<Storage = S> + ?Sized,
    {
        container.successor(&self.storage).map(Self::new)
    }
}

impl VertexDescriptor<Index> {
    /// Moves to the next position and returns the updated descriptor.
    ///
    /// Index storage can be advanced without accessing the container. Moving
    /// past the end of the view the descriptor comes from is allowed, but
    /// the resulting descriptor must not be resolved.
    #[inline(always)]
    pub fn advance(&mut self) -> &mut Self {
        self.storage.advance();
        self
    }

    /// Moves to the next position and returns the descriptor before the
    /// move.
    #[inline(always)]
    pub fn post_advance(&mut self) -> Self {
        let old = *self;
        self.storage.advance();
        old
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::Cursor;
    use std::collections::BTreeMap;

    #[test]
    fn test_index_descriptor() {
        let v = vec!["a", "b", "c"];
        let mut d = VertexDescriptor::new(Index(0));
        assert_eq!(d.kind(), StorageKind::Index);
        assert_eq!(d.post_advance().id(), 0);
        assert_eq!(*d.resolve(&v), "b");
        d.advance();
        assert_eq!(*d.inner(&v), "c");
        assert_eq!(d.next_in(&v), None);
    }

    #[test]
    fn test_cursor_descriptor() {
        let map = BTreeMap::from([(5, "five"), (7, "seven")]);
        let d = VertexDescriptor::new(Cursor(5));
        assert_eq!(d.kind(), StorageKind::Cursor);
        assert_eq!(d.id(), 5);
        assert_eq!(d.resolve(&map), (&5, &"five"));
        assert_eq!(*d.inner(&map), "five");
        let e = d.next_in(&map).unwrap();
        assert_eq!(e.id(), 7);
        assert!(d < e);
        assert_eq!(e.next_in(&map), None);
    }
}
