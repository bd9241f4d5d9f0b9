/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The access contract between descriptors and the containers they come from.

A [`VertexContainer`] stores vertices, an [`EdgeContainer`] stores the
out-edges of a single vertex. Both expose the [positions](crate::views::Positions)
of their elements, and resolve a storage value back to the stored element.
Index-addressed containers (vectors, slices, deques, boxed slices) use
[`Index`] storage; key-addressed containers (`BTreeMap`, and `BTreeSet` for
edges) use [`Cursor`] storage.

Resolution is precondition-based: a storage value must have been derived
from the very container it is resolved against, and the addressed element
must still exist. Violating the precondition panics (out-of-bounds index,
missing key) or silently returns an unrelated element; no identity check is
performed.

*/

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::Bound;
use impl_tools::autoimpl;
use std::collections::{btree_map, btree_set, BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;

use crate::descriptors::{Cursor, Index, Storage};
use crate::traits::EdgeValue;
use crate::views::{EdgePositions, IndexRange, KeyCursors, VertexPositions};

/// A container of vertices.
///
/// This is the structural capability used by the
/// [structural-default strategy](crate::cpo::StructuralDefault): a type
/// implementing this trait can enumerate its vertices without declaring any
/// dedicated operation.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S, Rc<S>)]
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a vertex container",
    note = "vertex containers must be index-addressed or key-addressed with pair-like elements"
)]
pub trait VertexContainer {
    /// The storage of descriptors over this container.
    type Storage: Storage;
    /// The positions of the vertices of this container.
    type Positions<'a>: VertexPositions<Storage = Self::Storage>
    where
        Self: 'a;
    /// The element returned by [`resolve`](VertexContainer::resolve).
    type Element<'a>
    where
        Self: 'a;
    /// The payload returned by [`inner`](VertexContainer::inner).
    type Inner: ?Sized;

    /// Returns the positions of all vertices, in the native order of the
    /// container.
    fn positions(&self) -> Self::Positions<'_>;

    /// Returns the element addressed by `storage`.
    fn resolve(&self, storage: &Self::Storage) -> Self::Element<'_>;

    /// Returns the payload of the element addressed by `storage`: the whole
    /// element for index-addressed containers, the value (not the key) for
    /// key-addressed ones.
    fn inner(&self, storage: &Self::Storage) -> &Self::Inner;

    /// Returns the position following `storage`, or `None` if `storage` is
    /// the last position.
    fn successor(&self, storage: &Self::Storage) -> Option<Self::Storage>;
}

/// A container of the out-edges of a vertex.
///
/// The elements of an index-addressed edge container must be
/// [edge values](EdgeValue), and so must be the elements of a `BTreeSet`,
/// which are addressed by the whole element; a `BTreeMap` maps targets to
/// properties.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S, Rc<S>)]
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an edge container",
    note = "edge containers are index-addressed containers of `EdgeValue`s, `BTreeMap`s from targets to properties, or `BTreeSet`s of `EdgeValue`s"
)]
pub trait EdgeContainer {
    /// The storage of descriptors over this container.
    type Storage: Storage;
    /// The positions of the edges of this container.
    type Positions<'a>: EdgePositions<Storage = Self::Storage>
    where
        Self: 'a;
    /// The element returned by [`resolve`](EdgeContainer::resolve).
    type Element<'a>
    where
        Self: 'a;
    /// The type of target identifiers.
    type Target;
    /// The property returned by [`inner`](EdgeContainer::inner).
    type Inner<'a>
    where
        Self: 'a;

    /// Returns the positions of all edges, in the native order of the
    /// container.
    fn positions(&self) -> Self::Positions<'_>;

    /// Returns the element addressed by `storage`.
    fn resolve(&self, storage: &Self::Storage) -> Self::Element<'_>;

    /// Returns the target of the edge addressed by `storage`.
    fn target_id(&self, storage: &Self::Storage) -> Self::Target;

    /// Returns the property of the edge addressed by `storage`.
    fn inner(&self, storage: &Self::Storage) -> Self::Inner<'_>;

    /// Returns the position following `storage`, or `None` if `storage` is
    /// the last position.
    fn successor(&self, storage: &Self::Storage) -> Option<Self::Storage>;
}

#[inline(always)]
fn index_successor(storage: &Index, len: usize) -> Option<Index> {
    let next = storage.0 + 1;
    (next < len).then_some(Index(next))
}

macro_rules! impl_random_access {
    ($t:ident => $($ty:tt)+) => {
        impl<$t> VertexContainer for $($ty)+ {
            type Storage = Index;
            type Positions<'a>
                = IndexRange
            where
                Self: 'a;
            type Element<'a>
                = &'a $t
            where
                Self: 'a;
            type Inner = $t;

            #[inline(always)]
            fn positions(&self) -> IndexRange {
                IndexRange::new(0, self.len())
            }

            #[inline(always)]
            fn resolve(&self, storage: &Index) -> &$t {
                &self[storage.0]
            }

            #[inline(always)]
            fn inner(&self, storage: &Index) -> &$t {
                &self[storage.0]
            }

            #[inline(always)]
            fn successor(&self, storage: &Index) -> Option<Index> {
                index_successor(storage, self.len())
            }
        }

        impl<$t: EdgeValue> EdgeContainer for $($ty)+ {
            type Storage = Index;
            type Positions<'a>
                = IndexRange
            where
                Self: 'a;
            type Element<'a>
                = &'a $t
            where
                Self: 'a;
            type Target = $t::Target;
            type Inner<'a>
                = $t::Inner<'a>
            where
                Self: 'a;

            #[inline(always)]
            fn positions(&self) -> IndexRange {
                IndexRange::new(0, self.len())
            }

            #[inline(always)]
            fn resolve(&self, storage: &Index) -> &$t {
                &self[storage.0]
            }

            #[inline(always)]
            fn target_id(&self, storage: &Index) -> Self::Target {
                self[storage.0].target_id()
            }

            #[inline(always)]
            fn inner(&self, storage: &Index) -> Self::Inner<'_> {
                self[storage.0].inner()
            }

            #[inline(always)]
            fn successor(&self, storage: &Index) -> Option<Index> {
                index_successor(storage, self.len())
            }
        }
    };
}

impl_random_access!(T => [T]);
impl_random_access!(T => Vec<T>);
impl_random_access!(T => Box<[T]>);
impl_random_access!(T => VecDeque<T>);

#[inline(always)]
fn after<K: Ord>(key: &K) -> (Bound<&K>, Bound<&K>) {
    (Bound::Excluded(key), Bound::Unbounded)
}

impl<K: Clone + Ord + Hash + Debug, V> VertexContainer for BTreeMap<K, V> {
    type Storage = Cursor<K>;
    type Positions<'a>
        = KeyCursors<btree_map::Iter<'a, K, V>>
    where
        Self: 'a;
    type Element<'a>
        = (&'a K, &'a V)
    where
        Self: 'a;
    type Inner = V;

    #[inline(always)]
    fn positions(&self) -> Self::Positions<'_> {
        KeyCursors::new(self.iter())
    }

    fn resolve(&self, storage: &Cursor<K>) -> (&K, &V) {
        match self.get_key_value(&storage.0) {
            Some(element) => element,
            None => panic!(
                "Cursor {:?} does not address an element of the container",
                storage.0
            ),
        }
    }

    #[inline(always)]
    fn inner(&self, storage: &Cursor<K>) -> &V {
        &self[&storage.0]
    }

    #[inline(always)]
    fn successor(&self, storage: &Cursor<K>) -> Option<Cursor<K>> {
        self.range(after(&storage.0))
            .next()
            .map(|(key, _)| Cursor(key.clone()))
    }
}

impl<K: Clone + Ord + Hash + Debug, W> EdgeContainer for BTreeMap<K, W> {
    type Storage = Cursor<K>;
    type Positions<'a>
        = KeyCursors<btree_map::Iter<'a, K, W>>
    where
        Self: 'a;
    type Element<'a>
        = (&'a K, &'a W)
    where
        Self: 'a;
    type Target = K;
    type Inner<'a>
        = &'a W
    where
        Self: 'a;

    #[inline(always)]
    fn positions(&self) -> Self::Positions<'_> {
        KeyCursors::new(self.iter())
    }

    #[inline(always)]
    fn resolve(&self, storage: &Cursor<K>) -> (&K, &W) {
        <Self as VertexContainer>::resolve(self, storage)
    }

    #[inline(always)]
    fn target_id(&self, storage: &Cursor<K>) -> K {
        storage.0.clone()
    }

    #[inline(always)]
    fn inner(&self, storage: &Cursor<K>) -> &W {
        &self[&storage.0]
    }

    #[inline(always)]
    fn successor(&self, storage: &Cursor<K>) -> Option<Cursor<K>> {
        <Self as VertexContainer>::successor(self, storage)
    }
}

impl<K: EdgeValue + Clone + Ord + Hash + Debug> EdgeContainer for BTreeSet<K> {
    type Storage = Cursor<K>;
    type Positions<'a>
        = KeyCursors<btree_set::Iter<'a, K>>
    where
        Self: 'a;
    type Element<'a>
        = &'a K
    where
        Self: 'a;
    type Target = K::Target;
    type Inner<'a>
        = K::Inner<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn positions(&self) -> Self::Positions<'_> {
        KeyCursors::new(self.iter())
    }

    fn resolve(&self, storage: &Cursor<K>) -> &K {
        match self.get(&storage.0) {
            Some(element) => element,
            None => panic!(
                "Cursor {:?} does not address an element of the container",
                storage.0
            ),
        }
    }

    #[inline(always)]
    fn target_id(&self, storage: &Cursor<K>) -> Self::Target {
        self.resolve(storage).target_id()
    }

    #[inline(always)]
    fn inner(&self, storage: &Cursor<K>) -> Self::Inner<'_> {
        self.resolve(storage).inner()
    }

    #[inline(always)]
    fn successor(&self, storage: &Cursor<K>) -> Option<Cursor<K>> {
        self.range(after(&storage.0))
            .next()
            .map(|key| Cursor(key.clone()))
    }
}
