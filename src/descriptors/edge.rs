/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Index, Storage, StorageKind, VertexDescriptor};
use crate::traits::EdgeContainer;

/// A handle over an edge.
///
/// An edge descriptor is made of the storage value of the edge in the edge
/// container of its source, and of a copy of the descriptor of the source.
/// The source is fixed at construction: advancing an edge descriptor moves
/// only its edge storage.
///
/// Equality, ordering and hashing consider the source first, and then the
/// edge storage. Note that the identity of an edge is positional (or, for
/// key-addressed edge containers, the target key): it is not stable under
/// mutation of the edge container, and parallel edges cannot be told apart
/// in key-addressed containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeDescriptor<E = Index, V = Index> {
    source: VertexDescriptor<V>,
    edge: E,
}

impl<E: Storage, V: Storage> EdgeDescriptor<E, V> {
    /// Creates a descriptor from a raw edge storage value and the
    /// descriptor of the source.
    ///
    /// No validation is performed.
    #[inline(always)]
    pub fn new(edge: E, source: VertexDescriptor<V>) -> Self {
        Self { source, edge }
    }

    /// Returns the raw edge storage value.
    #[inline(always)]
    pub fn value(&self) -> &E {
        &self.edge
    }

    /// Returns the identifier of the edge storage: the position of the edge
    /// for index storage, the key for cursor storage.
    #[inline(always)]
    pub fn id(&self) -> E::Id {
        self.edge.id()
    }

    /// Returns the kind of edge storage of this descriptor.
    #[inline(always)]
    pub fn kind(&self) -> StorageKind {
        E::KIND
    }

    /// Returns the descriptor of the source vertex.
    #[inline(always)]
    pub fn source(&self) -> &VertexDescriptor<V> {
        &self.source
    }

    /// Returns the identifier of the source vertex.
    #[inline(always)]
    pub fn source_id(&self) -> V::Id {
        self.source.id()
    }

    /// Returns the element of `edges` referenced by this descriptor.
    ///
    /// `edges` must be the edge container this descriptor was derived from.
    #[inline(always)]
    pub fn resolve<'a, C>(&self, edges: &'a C) -> C::Element<'a>
    where
        C: EdgeContainer<Storage = E> + ?Sized,
    {
        edges.resolve(&self.edge)
    }

    /// Returns the identifier of the target vertex.
    ///
    /// `edges` must be the edge container this descriptor was derived from.
    #[inline(always)]
    pub fn target_id<C>(&self, edges: &C) -> C::Target
    where
        C: EdgeContainer<Storage = E> + ?Sized,
    {
        edges.target_id(&self.edge)
    }

    /// Returns the property of the edge, excluding the target.
    ///
    /// See [`EdgeValue`](crate::traits::EdgeValue) for the shape of the
    /// result. `edges` must be the edge container this descriptor was
    /// derived from.
    #[inline(always)]
    pub fn inner<'a, C>(&self, edges: &'a C) -> C::Inner<'a>
    where
        C: EdgeContainer<Storage = E> + ?Sized,
    {
        edges.inner(&self.edge)
    }

    /// Returns the descriptor of the following edge of `edges`, with the
    /// same source, or `None` if this is the last one.
    #[inline(always)]
    pub fn next_in<C>(&self, edges: &C) -> Option<Self>
    where
        C: EdgeContainer<Storage = E> + ?Sized,
    {
        edges
            .successor(&self.edge)
            .map(|edge| Self::new(edge, self.source.clone()))
    }
}

impl<V: Storage> EdgeDescriptor<Index, V> {
    /// Moves to the next edge position and returns the updated descriptor.
    ///
    /// The source is not modified.
    #[inline(always)]
    pub fn advance(&mut self) -> &mut Self {
        self.edge.advance();
        self
    }

    /// Moves to the next edge position and returns the descriptor before
    /// the move.
    #[inline(always)]
    pub fn post_advance(&mut self) -> Self {
        let old = self.clone();
        self.edge.advance();
        old
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::Cursor;

    #[test]
    fn test_advance_keeps_source() {
        let edges = vec![(4_usize, 'x'), (6, 'y')];
        let source = VertexDescriptor::new(Cursor("u"));
        let mut e = EdgeDescriptor::new(Index(0), source);
        let first = e.post_advance();
        assert_eq!(first.target_id(&edges), 4);
        assert_eq!(*e.inner(&edges), 'y');
        assert_eq!(e.source(), &source);
        assert_eq!(e.source_id(), "u");
        assert_eq!(e.next_in(&edges), None);
        assert_eq!(first.next_in(&edges), Some(e));
    }
}
