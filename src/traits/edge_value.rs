/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Classification of the elements stored in an edge container.

An edge element comes in one of four shapes:

- a *bare identifier* (any primitive integer, a string slice or a `String`):
  the element is the target, and the property is the element itself;
- a *pair* `(target, property)`: the property is the second component;
- a *tuple* `(target, p₁, …, pₖ)` with 2 ≤ *k* ≤ 5: the property is a tuple of
  references `(&p₁, …, &pₖ)` to the trailing components, which can be
  further decomposed as any tuple;
- an *opaque struct*, registered with [`impl_opaque_edge!`](crate::impl_opaque_edge):
  the target is one of its members and the property is the whole element,
  whose interpretation is up to the consumer.

Structs with two named members can also be registered as pairs using
[`impl_pair_like!`](crate::impl_pair_like).

*/

/// The shape of an edge element, which determines how the target and the
/// property of an edge are extracted.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as edge data",
    label = "not a bare id, a pair or a tuple",
    note = "edge elements must be primitive integers, `(target, property)` pairs, `(target, p1, p2, ...)` tuples, or types registered with `impl_pair_like!` or `impl_opaque_edge!`"
)]
pub trait EdgeValue {
    /// The type of the target identifier.
    type Target: Clone;
    /// The type of the property returned by [`inner`](EdgeValue::inner).
    type Inner<'a>
    where
        Self: 'a;

    /// Returns the identifier of the target of the edge.
    fn target_id(&self) -> Self::Target;

    /// Returns the property of the edge, excluding the target.
    fn inner(&self) -> Self::Inner<'_>;
}

macro_rules! impl_bare_id {
    ($($ty:ty),*) => {$(
        impl EdgeValue for $ty {
            type Target = $ty;
            type Inner<'a> = &'a $ty;

            #[inline(always)]
            fn target_id(&self) -> $ty {
                *self
            }

            #[inline(always)]
            fn inner(&self) -> &$ty {
                self
            }
        }
    )*};
}

impl_bare_id!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<'s> EdgeValue for &'s str {
    type Target = &'s str;
    type Inner<'a>
        = &'a &'s str
    where
        Self: 'a;

    #[inline(always)]
    fn target_id(&self) -> &'s str {
        *self
    }

    #[inline(always)]
    fn inner(&self) -> &&'s str {
        self
    }
}

impl EdgeValue for String {
    type Target = String;
    type Inner<'a> = &'a String;

    #[inline(always)]
    fn target_id(&self) -> String {
        self.clone()
    }

    #[inline(always)]
    fn inner(&self) -> &String {
        self
    }
}

impl<T: Clone, P> EdgeValue for (T, P) {
    type Target = T;
    type Inner<'a>
        = &'a P
    where
        Self: 'a;

    #[inline(always)]
    fn target_id(&self) -> T {
        self.0.clone()
    }

    #[inline(always)]
    fn inner(&self) -> &P {
        &self.1
    }
}

macro_rules! impl_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<T: Clone, $($name),+> EdgeValue for (T, $($name),+) {
            type Target = T;
            type Inner<'a>
                = ($(&'a $name,)+)
            where
                Self: 'a;

            #[inline(always)]
            fn target_id(&self) -> T {
                self.0.clone()
            }

            #[inline(always)]
            fn inner(&self) -> Self::Inner<'_> {
                ($(&self.$idx,)+)
            }
        }
    };
}

impl_tuple!(A: 1, B: 2);
impl_tuple!(A: 1, B: 2, C: 3);
impl_tuple!(A: 1, B: 2, C: 3, D: 4);
impl_tuple!(A: 1, B: 2, C: 3, D: 4, E: 5);

/// Registers a struct as an opaque [edge value](EdgeValue).
///
/// The given member is the target; the property is the whole element.
///
/// ```rust
/// use graph_descriptors::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Road {
///     to: u32,
///     name: &'static str,
///     lanes: u8,
/// }
///
/// graph_descriptors::impl_opaque_edge!(Road { to: u32 });
///
/// let road = Road { to: 7, name: "Main", lanes: 2 };
/// assert_eq!(road.target_id(), 7);
/// assert_eq!(road.inner().lanes, 2);
/// ```
#[macro_export]
macro_rules! impl_opaque_edge {
    ($ty:ty { $target:ident : $target_ty:ty $(,)? }) => {
        impl $crate::traits::EdgeValue for $ty {
            type Target = $target_ty;
            type Inner<'a>
                = &'a $ty
            where
                Self: 'a;

            #[inline(always)]
            fn target_id(&self) -> Self::Target {
                ::core::clone::Clone::clone(&self.$target)
            }

            #[inline(always)]
            fn inner(&self) -> Self::Inner<'_> {
                self
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        assert_eq!(5_u32.target_id(), 5);
        assert_eq!(*5_u32.inner(), 5);

        let pair = (2_usize, "x");
        assert_eq!(pair.target_id(), 2);
        assert_eq!(*pair.inner(), "x");

        let triple = (1_usize, 10_i32, 20_i32);
        assert_eq!(triple.target_id(), 1);
        assert_eq!(triple.inner(), (&10, &20));

        let name = "v";
        assert_eq!(name.target_id(), "v");
        assert_eq!(String::from("w").target_id(), "w");

        let wide = (0_u8, 'a', 'b', 'c', 'd', 'e');
        let (_, _, c, _, e) = wide.inner();
        assert_eq!((*c, *e), ('c', 'e'));
    }
}
