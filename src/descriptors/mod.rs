/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Vertex and edge descriptors.

A descriptor is a lightweight, copyable handle identifying a vertex or an
edge without owning it. It contains only a [storage value](Storage) (and, for
edges, the descriptor of the source vertex); every access to the underlying
data goes through the container the descriptor was derived from, which must
be passed explicitly:

```rust
use graph_descriptors::prelude::*;

let v = vec![10, 20, 30, 40, 50];
let d = vertex_view(&v).iter().nth(2).unwrap();
assert_eq!(d.id(), 2);
assert_eq!(*d.resolve(&v), 30);
```

Descriptors perform no validity tracking: they become dangling exactly when
the referenced element is removed, or when the container is modified in a way
that changes the meaning of its positions.

*/

mod storage;
pub use storage::*;

mod vertex;
pub use vertex::*;

mod edge;
pub use edge::*;
