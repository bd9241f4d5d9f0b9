/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::ops::Range;

use super::{EdgePositions, IndexRange, Positions};
use crate::descriptors::{EdgeDescriptor, Index, Storage, VertexDescriptor};
use crate::traits::{EdgeContainer, VertexContainer};

/// A lazy, restartable sequence of [edge descriptors](EdgeDescriptor)
/// sharing the same source.
///
/// As for [vertex views](super::VertexView), the size and the boundary
/// descriptors are available only for index-based views; cursor views are
/// traversed only through [`iter`](EdgeView::iter), and tested with
/// [`is_empty`](EdgeView::is_empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeView<P, V = Index> {
    positions: P,
    source: VertexDescriptor<V>,
}

impl<P: EdgePositions, V: Storage> EdgeView<P, V> {
    /// Creates a view over the given edge positions, all sharing `source`.
    #[inline(always)]
    pub fn new(positions: P, source: VertexDescriptor<V>) -> Self {
        Self { positions, source }
    }

    /// Returns the positions of this view.
    #[inline(always)]
    pub fn positions(&self) -> &P {
        &self.positions
    }

    /// Returns the descriptor of the source shared by all edges.
    #[inline(always)]
    pub fn source(&self) -> &VertexDescriptor<V> {
        &self.source
    }

    /// Returns an iterator over the descriptors of this view, starting from
    /// the beginning.
    #[inline(always)]
    pub fn iter(&self) -> EdgeIter<P, V> {
        EdgeIter {
            positions: self.positions.clone(),
            source: self.source.clone(),
        }
    }

    /// Returns true if the view contains no descriptors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.positions.clone().next_position().is_none()
    }
}

impl<V: Storage> EdgeView<IndexRange, V> {
    /// Creates a view over an explicit range of edge indices.
    #[inline(always)]
    pub fn from_range(range: Range<usize>, source: VertexDescriptor<V>) -> Self {
        Self::new(range.into(), source)
    }

    /// Returns the number of descriptors in this view.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns the descriptor of the first edge of the view.
    #[inline(always)]
    pub fn begin(&self) -> EdgeDescriptor<Index, V> {
        EdgeDescriptor::new(self.positions.begin(), self.source.clone())
    }

    /// Returns the descriptor past the last edge of the view, which must not
    /// be resolved.
    #[inline(always)]
    pub fn end(&self) -> EdgeDescriptor<Index, V> {
        EdgeDescriptor::new(self.positions.end(), self.source.clone())
    }
}

/// Returns a view over all the edges of an edge container, with the given
/// source.
#[inline(always)]
pub fn edge_view<C, V>(edges: &C, source: VertexDescriptor<V>) -> EdgeView<C::Positions<'_>, V>
where
    C: EdgeContainer + ?Sized,
    V: Storage,
{
    EdgeView::new(edges.positions(), source)
}

/// Returns a view over the out-edges of `vertex` in an adjacency list, that
/// is, a vertex container whose payloads are edge containers.
///
/// ```rust
/// use graph_descriptors::prelude::*;
///
/// let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![2], vec![]];
/// let u = vertex_view(&g).iter().next().unwrap();
/// let targets: Vec<_> = edges(&g, &u)
///     .iter()
///     .map(|e| e.target_id(u.inner(&g)))
///     .collect();
/// assert_eq!(targets, vec![1, 2]);
/// ```
#[inline(always)]
pub fn edges<'a, G>(
    graph: &'a G,
    vertex: &VertexDescriptor<G::Storage>,
) -> EdgeView<<G::Inner as EdgeContainer>::Positions<'a>, G::Storage>
where
    G: VertexContainer + ?Sized,
    G::Inner: EdgeContainer + 'a,
{
    edge_view(vertex.inner(graph), vertex.clone())
}

/// The iterator returned by [`EdgeView::iter`].
#[derive(Debug, Clone)]
pub struct EdgeIter<P, V = Index> {
    positions: P,
    source: VertexDescriptor<V>,
}

impl<P: EdgePositions, V: Storage> Iterator for EdgeIter<P, V> {
    type Item = EdgeDescriptor<P::Storage, V>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.positions
            .next_position()
            .map(|edge| EdgeDescriptor::new(edge, self.source.clone()))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<V: Storage> ExactSizeIterator for EdgeIter<IndexRange, V> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.positions.len()
    }
}

impl<P: EdgePositions, V: Storage> IntoIterator for &EdgeView<P, V> {
    type Item = EdgeDescriptor<P::Storage, V>;
    type IntoIter = EdgeIter<P, V>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: EdgePositions, V: Storage> IntoIterator for EdgeView<P, V> {
    type Item = EdgeDescriptor<P::Storage, V>;
    type IntoIter = EdgeIter<P, V>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        EdgeIter {
            positions: self.positions,
            source: self.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_edge_view() {
        let succ = BTreeSet::from([3, 1, 2]);
        let view = edge_view(&succ, VertexDescriptor::new(Index(7)));
        let targets: Vec<_> = view.iter().map(|e| e.target_id(&succ)).collect();
        assert_eq!(targets, vec![1, 2, 3]);
        assert!(view.iter().all(|e| e.source_id() == 7));

        let view = EdgeView::from_range(0..0, VertexDescriptor::new(Index(0)));
        assert!(view.is_empty());
        assert_eq!(view.begin(), view.end());
    }
}
