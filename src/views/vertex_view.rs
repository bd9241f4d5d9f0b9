/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::ops::Range;

use super::{IndexRange, KeyCursors, Positions, VertexPositions};
use crate::descriptors::{Index, VertexDescriptor};
use crate::traits::VertexContainer;

/// A lazy, restartable sequence of [vertex descriptors](VertexDescriptor).
///
/// The size of the view (through [`len`](VertexView::len)) and its boundary
/// descriptors (through [`begin`](VertexView::begin) and
/// [`end`](VertexView::end)) are available only for index-based views.
/// Cursor views are traversed only through [`iter`](VertexView::iter), and
/// their emptiness is tested with [`is_empty`](VertexView::is_empty) rather
/// than by comparing `begin()` and `end()`. For instance, this does not
/// compile:
/// ```compile_fail
/// use graph_descriptors::prelude::*;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([(1, 'a')]);
/// vertex_view(&map).len();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexView<P> {
    positions: P,
}

impl<P: VertexPositions> VertexView<P> {
    /// Creates a view over the given positions.
    #[inline(always)]
    pub fn new(positions: P) -> Self {
        Self { positions }
    }

    /// Returns the positions of this view.
    #[inline(always)]
    pub fn positions(&self) -> &P {
        &self.positions
    }

    /// Returns an iterator over the descriptors of this view, starting from
    /// the beginning.
    #[inline(always)]
    pub fn iter(&self) -> VertexIter<P> {
        VertexIter {
            positions: self.positions.clone(),
        }
    }

    /// Returns true if the view contains no descriptors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.positions.clone().next_position().is_none()
    }
}

impl VertexView<IndexRange> {
    /// Creates a view over an explicit range of indices.
    #[inline(always)]
    pub fn from_range(range: Range<usize>) -> Self {
        Self::new(range.into())
    }

    /// Returns the number of descriptors in this view.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns the descriptor of the first vertex of the view.
    #[inline(always)]
    pub fn begin(&self) -> VertexDescriptor<Index> {
        VertexDescriptor::new(self.positions.begin())
    }

    /// Returns the descriptor past the last vertex of the view, which must
    /// not be resolved.
    #[inline(always)]
    pub fn end(&self) -> VertexDescriptor<Index> {
        VertexDescriptor::new(self.positions.end())
    }
}

/// Returns a view over all the vertices of a container, in the native order
/// of the container.
///
/// For index-addressed containers the view covers the indices
/// [0 . . `len`); for key-addressed containers it captures the native
/// iterator of the container.
#[inline(always)]
pub fn vertex_view<C: VertexContainer + ?Sized>(container: &C) -> VertexView<C::Positions<'_>> {
    VertexView::new(container.positions())
}

/// The iterator returned by [`VertexView::iter`].
#[derive(Debug, Clone)]
pub struct VertexIter<P> {
    positions: P,
}

impl<P: VertexPositions> Iterator for VertexIter<P> {
    type Item = VertexDescriptor<P::Storage>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.positions.next_position().map(VertexDescriptor::new)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl ExactSizeIterator for VertexIter<IndexRange> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.positions.len()
    }
}

impl<P: VertexPositions> IntoIterator for &VertexView<P> {
    type Item = VertexDescriptor<P::Storage>;
    type IntoIter = VertexIter<P>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: VertexPositions> IntoIterator for VertexView<P> {
    type Item = VertexDescriptor<P::Storage>;
    type IntoIter = VertexIter<P>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        VertexIter {
            positions: self.positions,
        }
    }
}

/// Conversion of a raw range of vertex positions into a [`VertexView`].
///
/// Views convert into themselves, unchanged.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be turned into a vertex view",
    note = "vertex ranges must be a `VertexView`, a `Range<usize>`, an `IndexRange`, or `KeyCursors` over pair-like elements"
)]
pub trait IntoVertexView {
    /// The positions of the resulting view.
    type Positions: VertexPositions;
    /// Converts this range into a view.
    fn into_vertex_view(self) -> VertexView<Self::Positions>;
}

impl<P: VertexPositions> IntoVertexView for VertexView<P> {
    type Positions = P;

    #[inline(always)]
    fn into_vertex_view(self) -> Self {
        self
    }
}

impl IntoVertexView for IndexRange {
    type Positions = IndexRange;

    #[inline(always)]
    fn into_vertex_view(self) -> VertexView<IndexRange> {
        VertexView::new(self)
    }
}

impl IntoVertexView for Range<usize> {
    type Positions = IndexRange;

    #[inline(always)]
    fn into_vertex_view(self) -> VertexView<IndexRange> {
        VertexView::from_range(self)
    }
}

impl<I> IntoVertexView for KeyCursors<I>
where
    KeyCursors<I>: VertexPositions,
{
    type Positions = Self;

    #[inline(always)]
    fn into_vertex_view(self) -> VertexView<Self> {
        VertexView::new(self)
    }
}
