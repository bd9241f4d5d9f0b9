/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Lazy views synthesizing descriptors.

A [`VertexView`] (or [`EdgeView`]) holds a range of [positions](Positions),
never a collection of descriptors: each call to `iter` starts again from the
beginning of the range, and descriptors are built on the fly as the iterator
advances. Views are immutable once built, so they can be iterated any
number of times, and concurrently, as long as the underlying container is
not modified.

Views are built either from explicit positions, or from a container with
[`vertex_view`] and [`edge_view`]. [`edges`] builds the view of the
out-edges of a vertex of an adjacency list, that is, of a vertex container
whose payloads are edge containers.

*/

mod positions;
pub use positions::*;

mod vertex_view;
pub use vertex_view::*;

mod edge_view;
pub use edge_view::*;
