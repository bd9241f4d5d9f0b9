/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Tiered capability resolution.

A graph operation can be provided in several ways, ranked by priority:

1. the graph type declares the operation itself ([`OwnOperation`]);
2. a free function taking the graph is registered for the graph type
   ([`FreeFunction`]);
3. the shape of the graph alone makes it possible to synthesize the
   operation ([`StructuralDefault`]).

If none applies, the operation is unsupported, and requesting it is a
compile-time error.

Each graph type states which tiers it provides through type-level
[flags](Flag) (see [`VertexCapabilities`] and the
[`vertex_capabilities!`](crate::vertex_capabilities) macro); the [`Select`]
type-level function turns the flags into the strategy type, always in the
same order. The choice is thus made once per graph type, at compile time,
and recorded as data in a [`Choice`], which also tells whether the selected
path can fail.

The only operation currently resolved this way is vertex enumeration,
[`vertices`].

*/

use sealed::sealed;

mod vertices;
pub use vertices::*;

/// The strategy selected for an operation on a graph type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// The operation is not available.
    None,
    /// The graph type declares the operation itself.
    OwnOperation,
    /// A free function is registered for the graph type.
    FreeFunction,
    /// The operation is synthesized from the shape of the graph type.
    StructuralDefault,
}

/// The outcome of capability resolution for an operation on a graph type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    /// The selected strategy.
    pub strategy: Strategy,
    /// Whether the selected strategy is guaranteed not to fail.
    pub no_fail: bool,
}

impl Choice {
    /// The choice of an unsupported operation.
    pub const NONE: Choice = Choice::new(Strategy::None, false);

    /// Creates a new choice.
    pub const fn new(strategy: Strategy, no_fail: bool) -> Self {
        Self { strategy, no_fail }
    }
}

/// A type-level boolean.
#[sealed]
pub trait Flag {
    /// The value of the flag.
    const VALUE: bool;
}

/// The type-level `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Yes;

/// The type-level `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct No;

#[sealed]
impl Flag for Yes {
    const VALUE: bool = true;
}

#[sealed]
impl Flag for No {
    const VALUE: bool = false;
}

/// A type-level strategy.
#[sealed]
pub trait StrategyTag {
    /// The runtime counterpart of this strategy.
    const STRATEGY: Strategy;
}

/// Strategy: use the operation declared by the graph type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OwnOperation;

/// Strategy: use the free function registered for the graph type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FreeFunction;

/// Strategy: synthesize the operation from the shape of the graph type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StructuralDefault;

/// Strategy: the operation is not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unsupported;

#[sealed]
impl StrategyTag for OwnOperation {
    const STRATEGY: Strategy = Strategy::OwnOperation;
}

#[sealed]
impl StrategyTag for FreeFunction {
    const STRATEGY: Strategy = Strategy::FreeFunction;
}

#[sealed]
impl StrategyTag for StructuralDefault {
    const STRATEGY: Strategy = Strategy::StructuralDefault;
}

#[sealed]
impl StrategyTag for Unsupported {
    const STRATEGY: Strategy = Strategy::None;
}

/// Type-level selection of a strategy from a triple of flags
/// `(own, free, structural)`.
///
/// The first available tier wins: own operation, then free function, then
/// structural default.
pub trait Select {
    /// The selected strategy.
    type Strategy: StrategyTag;
}

impl<F: Flag, S: Flag> Select for (Yes, F, S) {
    type Strategy = OwnOperation;
}

impl<S: Flag> Select for (No, Yes, S) {
    type Strategy = FreeFunction;
}

impl Select for (No, No, Yes) {
    type Strategy = StructuralDefault;
}

impl Select for (No, No, No) {
    type Strategy = Unsupported;
}
