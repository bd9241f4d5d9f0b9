/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::{BTreeMap, VecDeque};

use super::{
    Choice, Flag, FreeFunction, OwnOperation, Select, Strategy, StrategyTag, StructuralDefault,
};
use crate::traits::VertexContainer;
use crate::views::{vertex_view, IntoVertexView, VertexPositions, VertexView};

/// The capability tiers through which a graph type can enumerate its
/// vertices.
///
/// Each associated type is [`Yes`](super::Yes) or [`No`](super::No). This
/// trait is usually implemented with
/// [`vertex_capabilities!`](crate::vertex_capabilities).
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare how to enumerate its vertices",
    note = "declare the available tiers with `vertex_capabilities!`"
)]
pub trait VertexCapabilities {
    /// Whether the type implements [`OwnVertices`].
    type Own: Flag;
    /// Whether a free function is registered through [`FreeVertices`].
    type Free: Flag;
    /// Whether the type is a [`VertexContainer`].
    type Structural: Flag;
}

/// Vertex enumeration declared by the graph type itself.
///
/// The returned range is turned into a [`VertexView`] if it is not one
/// already.
pub trait OwnVertices {
    /// The range of vertices returned.
    type Vertices<'a>: IntoVertexView
    where
        Self: 'a;

    /// Whether [`vertices`](OwnVertices::vertices) is guaranteed not to
    /// fail.
    const NO_FAIL: bool = false;

    /// Returns the vertices of this graph.
    fn vertices(&self) -> Self::Vertices<'_>;
}

/// Vertex enumeration provided by a free function taking the graph.
///
/// This trait is meant to be implemented with
/// [`register_vertices!`](crate::register_vertices), which binds the free
/// function living next to the graph type.
pub trait FreeVertices {
    /// The range of vertices returned.
    type Range<'a>: IntoVertexView
    where
        Self: 'a;

    /// Whether the free function is guaranteed not to fail.
    const NO_FAIL: bool = false;

    /// Calls the registered free function.
    fn free_vertices(graph: &Self) -> Self::Range<'_>;
}

/// A strategy that can enumerate the vertices of graphs of type `G`.
///
/// There is no implementation for [`Unsupported`](super::Unsupported).
#[diagnostic::on_unimplemented(
    message = "the vertices of `{G}` cannot be enumerated using `{Self}`",
    note = "`{G}` declares no way to enumerate its vertices, or declares a tier it does not implement"
)]
pub trait VertexStrategy<G: ?Sized>: StrategyTag {
    /// The positions of the resulting view.
    type Positions<'a>: VertexPositions
    where
        G: 'a;

    /// Whether this strategy is guaranteed not to fail on `G`.
    const NO_FAIL: bool;

    /// Returns a view over the vertices of `graph`.
    fn vertices(graph: &G) -> VertexView<Self::Positions<'_>>;
}

impl<G: OwnVertices + ?Sized> VertexStrategy<G> for OwnOperation {
    type Positions<'a>
        = <G::Vertices<'a> as IntoVertexView>::Positions
    where
        G: 'a;

    const NO_FAIL: bool = G::NO_FAIL;

    #[inline(always)]
    fn vertices(graph: &G) -> VertexView<Self::Positions<'_>> {
        OwnVertices::vertices(graph).into_vertex_view()
    }
}

impl<G: FreeVertices + ?Sized> VertexStrategy<G> for FreeFunction {
    type Positions<'a>
        = <G::Range<'a> as IntoVertexView>::Positions
    where
        G: 'a;

    const NO_FAIL: bool = G::NO_FAIL;

    #[inline(always)]
    fn vertices(graph: &G) -> VertexView<Self::Positions<'_>> {
        G::free_vertices(graph).into_vertex_view()
    }
}

impl<G: VertexContainer + ?Sized> VertexStrategy<G> for StructuralDefault {
    type Positions<'a>
        = G::Positions<'a>
    where
        G: 'a;

    const NO_FAIL: bool = true;

    #[inline(always)]
    fn vertices(graph: &G) -> VertexView<Self::Positions<'_>> {
        vertex_view(graph)
    }
}

/// Graph types whose vertices can be enumerated.
///
/// This trait has a blanket implementation for every type whose declared
/// [capabilities](VertexCapabilities) select a strategy other than
/// [`Unsupported`](super::Unsupported), provided that the type actually
/// implements the selected tier.
pub trait Vertices {
    /// The selected strategy.
    type Strategy: VertexStrategy<Self>;
    /// The outcome of the resolution.
    const CHOICE: Choice;
}

impl<G> Vertices for G
where
    G: VertexCapabilities + ?Sized,
    (G::Own, G::Free, G::Structural): Select,
    <(G::Own, G::Free, G::Structural) as Select>::Strategy: VertexStrategy<G>,
{
    type Strategy = <(G::Own, G::Free, G::Structural) as Select>::Strategy;
    const CHOICE: Choice = Choice::new(
        <Self::Strategy as StrategyTag>::STRATEGY,
        <Self::Strategy as VertexStrategy<G>>::NO_FAIL,
    );
}

/// Returns a view over the vertices of a graph, using the best strategy
/// available for its type.
///
/// ```rust
/// use graph_descriptors::prelude::*;
/// use std::collections::BTreeMap;
///
/// let v = vec!['a', 'b', 'c'];
/// assert_eq!(vertices(&v).len(), 3);
///
/// let m = BTreeMap::from([(7, 'x'), (2, 'y')]);
/// let ids: Vec<_> = vertices(&m).iter().map(|d| d.id()).collect();
/// assert_eq!(ids, [2, 7]);
/// ```
///
/// Types with no strategy are rejected at compile time:
/// ```compile_fail
/// use graph_descriptors::prelude::*;
///
/// struct Opaque;
/// graph_descriptors::vertex_capabilities!(Opaque:);
/// vertices(&Opaque);
/// ```
#[inline(always)]
pub fn vertices<G: Vertices + ?Sized>(
    graph: &G,
) -> VertexView<<G::Strategy as VertexStrategy<G>>::Positions<'_>> {
    <G::Strategy as VertexStrategy<G>>::vertices(graph)
}

/// Returns the outcome of the resolution of [`vertices`] for `G`.
#[inline(always)]
pub const fn choice<G: Vertices + ?Sized>() -> Choice {
    G::CHOICE
}

/// Returns the strategy selected for [`vertices`] by the capabilities
/// declared by `G`.
///
/// Differently from [`choice`], this function accepts also types for which
/// no strategy applies, returning [`Strategy::None`].
#[inline(always)]
pub const fn strategy_of<G>() -> Strategy
where
    G: VertexCapabilities + ?Sized,
    (G::Own, G::Free, G::Structural): Select,
{
    <<(G::Own, G::Free, G::Structural) as Select>::Strategy as StrategyTag>::STRATEGY
}

/// Declares the [capabilities](VertexCapabilities) of a graph type.
///
/// The type is followed by a colon and by the list of available tiers, in
/// any order, chosen among `own`, `free` and `structural`. Generic types are
/// introduced by `impl<...>`.
///
/// ```rust
/// use graph_descriptors::prelude::*;
///
/// struct Ring(usize);
///
/// impl OwnVertices for Ring {
///     type Vertices<'a> = core::ops::Range<usize>;
///     const NO_FAIL: bool = true;
///     fn vertices(&self) -> Self::Vertices<'_> {
///         0..self.0
///     }
/// }
///
/// graph_descriptors::vertex_capabilities!(Ring: own);
///
/// assert_eq!(vertices(&Ring(4)).len(), 4);
/// assert_eq!(choice::<Ring>(), Choice::new(Strategy::OwnOperation, true));
/// ```
#[macro_export]
macro_rules! vertex_capabilities {
    (impl<$($g:ident),+ $(,)?> $ty:ty : $($tier:ident),* $(,)?) => {
        impl<$($g),+> $crate::cpo::VertexCapabilities for $ty {
            type Own = $crate::__tier_flag!(own; $($tier)*);
            type Free = $crate::__tier_flag!(free; $($tier)*);
            type Structural = $crate::__tier_flag!(structural; $($tier)*);
        }
    };
    ($ty:ty : $($tier:ident),* $(,)?) => {
        impl $crate::cpo::VertexCapabilities for $ty {
            type Own = $crate::__tier_flag!(own; $($tier)*);
            type Free = $crate::__tier_flag!(free; $($tier)*);
            type Structural = $crate::__tier_flag!(structural; $($tier)*);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tier_flag {
    (own; own $($rest:ident)*) => { $crate::cpo::Yes };
    (free; free $($rest:ident)*) => { $crate::cpo::Yes };
    (structural; structural $($rest:ident)*) => { $crate::cpo::Yes };
    ($tier:ident; own $($rest:ident)*) => { $crate::__tier_flag!($tier; $($rest)*) };
    ($tier:ident; free $($rest:ident)*) => { $crate::__tier_flag!($tier; $($rest)*) };
    ($tier:ident; structural $($rest:ident)*) => { $crate::__tier_flag!($tier; $($rest)*) };
    ($tier:ident; $other:ident $($rest:ident)*) => {
        ::core::compile_error!(::core::concat!(
            "unknown capability tier `",
            ::core::stringify!($other),
            "` (expected `own`, `free` or `structural`)"
        ))
    };
    ($tier:ident;) => { $crate::cpo::No };
}

/// Registers a free function as the vertex enumeration of a graph type.
///
/// The function must take a reference to the graph and return a range
/// convertible [into a view](IntoVertexView); the range type is given with
/// its lifetime parameter. Optionally, `no_fail = true` states that the
/// function cannot fail. The graph type must then declare the `free` tier
/// with [`vertex_capabilities!`](crate::vertex_capabilities).
///
/// ```rust
/// use graph_descriptors::prelude::*;
///
/// mod grid {
///     pub struct Grid {
///         pub width: usize,
///         pub height: usize,
///     }
///
///     pub fn cells(grid: &Grid) -> core::ops::Range<usize> {
///         0..grid.width * grid.height
///     }
/// }
///
/// graph_descriptors::register_vertices!(grid::Grid => grid::cells, <'g> core::ops::Range<usize>);
/// graph_descriptors::vertex_capabilities!(grid::Grid: free);
///
/// let g = grid::Grid { width: 3, height: 2 };
/// assert_eq!(vertices(&g).len(), 6);
/// assert_eq!(choice::<grid::Grid>(), Choice::new(Strategy::FreeFunction, false));
/// ```
#[macro_export]
macro_rules! register_vertices {
    ($graph:ty => $func:path, <$lt:lifetime> $range:ty $(, no_fail = $no_fail:expr)? $(,)?) => {
        impl $crate::cpo::FreeVertices for $graph {
            type Range<$lt>
                = $range
            where
                Self: $lt;

            $(const NO_FAIL: bool = $no_fail;)?

            #[inline(always)]
            fn free_vertices(graph: &Self) -> Self::Range<'_> {
                $func(graph)
            }
        }
    };
}

crate::vertex_capabilities!(impl<T> [T]: structural);
crate::vertex_capabilities!(impl<T> Vec<T>: structural);
crate::vertex_capabilities!(impl<T> Box<[T]>: structural);
crate::vertex_capabilities!(impl<T> VecDeque<T>: structural);
crate::vertex_capabilities!(impl<K, V> BTreeMap<K, V>: structural);
