/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Ranges of storage values from which views synthesize descriptors.
//!
//! There are two kinds of positions: [`IndexRange`], a half-open interval of
//! indices into a random-access container, and [`KeyCursors`], which wraps
//! the (cloneable) native iterator of a key-addressed container and turns
//! its items into [cursors](Cursor). Neither materializes anything: cloning
//! positions restarts the iteration from the beginning of the range.

use core::ops::Range;

use crate::descriptors::{Cursor, Index, Storage};
use crate::traits::{EntryItem, KeyItem};

/// A restartable source of storage values.
pub trait Positions: Clone {
    /// The storage values produced.
    type Storage: Storage;

    /// Returns the next storage value, or `None` at the end of the range.
    fn next_position(&mut self) -> Option<Self::Storage>;

    /// Returns bounds on the number of remaining positions, with the same
    /// semantics as [`Iterator::size_hint`].
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

/// Positions admissible for vertex storage.
///
/// Random-access positions ([`IndexRange`]) are always admissible; cursor
/// positions are admissible only if the underlying iterator is bidirectional
/// and returns [map entries](EntryItem), whose key is the vertex identifier.
/// Cursors over a set are rejected, even if its elements are pairs:
/// ```compile_fail
/// use graph_descriptors::prelude::*;
/// use std::collections::BTreeSet;
///
/// let set = BTreeSet::from([(1, 'a'), (2, 'b')]);
/// VertexView::new(KeyCursors::new(set.iter()));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot enumerate vertices",
    note = "vertex positions must be random access (`IndexRange`) or cursors over a `DoubleEndedIterator` of `(&K, &V)` map entries"
)]
pub trait VertexPositions: Positions {}

/// Positions admissible for edge storage.
///
/// Any forward-traversable range is admissible: [`IndexRange`], or cursors
/// over any cloneable iterator returning [keyed items](KeyItem).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot enumerate edges",
    note = "edge positions must be an `IndexRange` or cursors over a cloneable iterator of `&K` or `(&K, &V)` items"
)]
pub trait EdgePositions: Positions {}

/// A half-open range of [indices](Index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndexRange {
    begin: usize,
    end: usize,
}

impl IndexRange {
    /// Creates the range [`begin` . . `end`).
    #[inline(always)]
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Returns the first index of the range.
    #[inline(always)]
    pub fn begin(&self) -> Index {
        Index(self.begin)
    }

    /// Returns the index past the last index of the range.
    #[inline(always)]
    pub fn end(&self) -> Index {
        Index(self.end)
    }

    /// Returns the number of indices in the range.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// Returns true if the range is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.begin >= self.end
    }
}

impl From<Range<usize>> for IndexRange {
    #[inline(always)]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl Positions for IndexRange {
    type Storage = Index;

    #[inline(always)]
    fn next_position(&mut self) -> Option<Index> {
        if self.begin < self.end {
            self.begin += 1;
            Some(Index(self.begin - 1))
        } else {
            None
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl VertexPositions for IndexRange {}
impl EdgePositions for IndexRange {}

/// Cursors over the elements returned by the native iterator of a
/// key-addressed container.
///
/// The iterator is cloned, never consumed, when a view is iterated, so the
/// iterator itself plays the role of the pair of begin and end cursors.
#[derive(Debug, Clone)]
pub struct KeyCursors<I> {
    iter: I,
}

impl<I> KeyCursors<I> {
    /// Wraps the native iterator of a container.
    #[inline(always)]
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Returns the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> Positions for KeyCursors<I>
where
    I: Iterator + Clone,
    I::Item: KeyItem,
{
    type Storage = Cursor<<I::Item as KeyItem>::Key>;

    #[inline(always)]
    fn next_position(&mut self) -> Option<Self::Storage> {
        self.iter.next().map(|item| Cursor(item.key()))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> VertexPositions for KeyCursors<I>
where
    I: DoubleEndedIterator + Clone,
    I::Item: EntryItem,
{
}

impl<I> EdgePositions for KeyCursors<I>
where
    I: Iterator + Clone,
    I::Item: KeyItem,
{
}
