/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Structural predicates and container access traits.
//!
//! Nothing in this module is nominal: a type is pair-like, or usable as edge
//! data, or usable as vertex storage, because it supports the required
//! operations, not because of its name. Types that do not satisfy a
//! predicate are rejected at compile time, with a diagnostic naming the
//! missing requirement.

use core::fmt::Debug;
use core::hash::Hash;
use impl_tools::autoimpl;
use sealed::sealed;

/**

A value that can be decomposed into a first and a second component.

This is the Rust counterpart of a pair: 2-tuples are pair-like out of the
box, and structs with two named members can be made pair-like with
[`impl_pair_like!`](crate::impl_pair_like), which requires nothing more than
the existence of the two members.

Pair-like elements play two roles: in a key-addressed vertex container the
first component is the key (the vertex identifier) and the second is the
payload; in an edge container the first component is the target and the
second is the edge property.

*/
#[autoimpl(for<S: trait + ?Sized> &S)]
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not pair-like",
    label = "no first/second decomposition",
    note = "2-tuples are pair-like; structs with two named members can use `impl_pair_like!`"
)]
pub trait PairLike {
    /// The type of the first component.
    type First;
    /// The type of the second component.
    type Second;
    /// Returns the first component.
    fn first(&self) -> &Self::First;
    /// Returns the second component.
    fn second(&self) -> &Self::Second;
}

impl<A, B> PairLike for (A, B) {
    type First = A;
    type Second = B;

    #[inline(always)]
    fn first(&self) -> &A {
        &self.0
    }

    #[inline(always)]
    fn second(&self) -> &B {
        &self.1
    }
}

/// An item returned by the native iterator of a key-addressed container,
/// from which the key used as [`Cursor`](crate::descriptors::Cursor) can be
/// extracted.
///
/// Set-like containers return `&K`, map-like containers return `(&K, &V)`.
#[diagnostic::on_unimplemented(
    message = "cannot extract a cursor key from `{Self}`",
    note = "cursor positions need items of the form `&K` (sets) or `(&K, &V)` (maps)"
)]
pub trait KeyItem {
    /// The type of the key.
    type Key: Clone + Ord + Hash + Debug;
    /// Returns the key of this item.
    fn key(self) -> Self::Key;
}

impl<K: Clone + Ord + Hash + Debug> KeyItem for &K {
    type Key = K;

    #[inline(always)]
    fn key(self) -> K {
        self.clone()
    }
}

impl<K: Clone + Ord + Hash + Debug, V> KeyItem for (&K, &V) {
    type Key = K;

    #[inline(always)]
    fn key(self) -> K {
        self.0.clone()
    }
}

/// A [`KeyItem`] that is a map entry `(&K, &V)`: the key is the first
/// component and the payload is the second.
///
/// Only map entries can address vertices: the whole element of a set is its
/// own key, so it has no separate payload. This trait is sealed.
#[sealed]
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a map entry",
    note = "vertex cursors need items of the form `(&K, &V)`"
)]
pub trait EntryItem: KeyItem + PairLike {}

#[sealed]
impl<'a, K: Clone + Ord + Hash + Debug, V> EntryItem for (&'a K, &'a V) {}

/// Makes a struct with two named members [pair-like](PairLike).
///
/// The struct also becomes a pair-shaped [edge value](EdgeValue): the first
/// member is the target, and the second member is the edge property.
///
/// ```rust
/// use graph_descriptors::prelude::*;
///
/// struct Arc {
///     dst: usize,
///     weight: f64,
/// }
///
/// graph_descriptors::impl_pair_like!(Arc { dst: usize, weight: f64 });
///
/// let arc = Arc { dst: 3, weight: 0.5 };
/// assert_eq!(*arc.first(), 3);
/// assert_eq!(arc.target_id(), 3);
/// assert_eq!(*EdgeValue::inner(&arc), 0.5);
/// ```
#[macro_export]
macro_rules! impl_pair_like {
    ($ty:ty { $first:ident : $first_ty:ty, $second:ident : $second_ty:ty $(,)? }) => {
        impl $crate::traits::PairLike for $ty {
            type First = $first_ty;
            type Second = $second_ty;

            #[inline(always)]
            fn first(&self) -> &Self::First {
                &self.$first
            }

            #[inline(always)]
            fn second(&self) -> &Self::Second {
                &self.$second
            }
        }

        impl $crate::traits::EdgeValue for $ty {
            type Target = $first_ty;
            type Inner<'a>
                = &'a $second_ty
            where
                Self: 'a;

            #[inline(always)]
            fn target_id(&self) -> Self::Target {
                ::core::clone::Clone::clone(&self.$first)
            }

            #[inline(always)]
            fn inner(&self) -> Self::Inner<'_> {
                &self.$second
            }
        }
    };
}

pub mod edge_value;
pub use edge_value::*;

pub mod containers;
pub use containers::*;
