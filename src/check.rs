/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Consistency checks for container implementations.

Implementing [`VertexContainer`] or [`EdgeContainer`] for a new type means
providing two independent ways of walking its elements: the
[positions](crate::views::Positions) used by views, and the
[`successor`](VertexContainer::successor) used to advance a single
descriptor. [`check_vertices`] and [`check_edges`] verify that the two agree,
that no two positions are equal, and that walking the positions again gives
the same sequence.

*/

use std::collections::BTreeSet;

use thiserror::Error;

use crate::traits::{EdgeContainer, VertexContainer};
use crate::views::Positions;

/// Error types that can occur when checking a container implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckViewError {
    /// Following successors from the first position yields a different
    /// number of positions than the view.
    #[error("Different number of positions: {view} (view) != {successors} (successors)")]
    Length { view: usize, successors: usize },

    /// The successor of a position is not the next position of the view.
    #[error("Different positions at index {index}: {view} (view) != {successor} (successor)")]
    Successor {
        index: usize,
        view: String,
        successor: String,
    },

    /// The view returns the same position twice.
    #[error("Duplicate position at index {index}: {id}")]
    DuplicateId { index: usize, id: String },

    /// Iterating again over the view yields a different sequence.
    #[error("Different positions on reiteration at index {index}: {first} (first) != {second} (second)")]
    Reiteration {
        index: usize,
        first: String,
        second: String,
    },
}

fn collect<P: Positions>(mut positions: P) -> Vec<P::Storage> {
    let mut result = Vec::with_capacity(positions.size_hint().0);
    while let Some(position) = positions.next_position() {
        result.push(position);
    }
    result
}

fn check_positions<P, F>(positions: P, successor: F) -> Result<(), CheckViewError>
where
    P: Positions,
    F: Fn(&P::Storage) -> Option<P::Storage>,
{
    let first = collect(positions.clone());
    let second = collect(positions);

    for index in 0..first.len().max(second.len()) {
        let (a, b) = (first.get(index), second.get(index));
        if a != b {
            return Err(CheckViewError::Reiteration {
                index,
                first: format!("{:?}", a),
                second: format!("{:?}", b),
            });
        }
    }

    let mut seen = BTreeSet::new();
    for (index, position) in first.iter().enumerate() {
        if !seen.insert(position) {
            return Err(CheckViewError::DuplicateId {
                index,
                id: format!("{:?}", position),
            });
        }
    }

    let mut current = first.first().cloned();
    let mut index = 0;
    while let Some(position) = current {
        match first.get(index) {
            Some(expected) if *expected != position => {
                return Err(CheckViewError::Successor {
                    index,
                    view: format!("{:?}", expected),
                    successor: format!("{:?}", position),
                });
            }
            Some(_) => {}
            None => {
                return Err(CheckViewError::Length {
                    view: first.len(),
                    successors: index + 1,
                });
            }
        }
        current = successor(&position);
        index += 1;
    }

    if index != first.len() {
        return Err(CheckViewError::Length {
            view: first.len(),
            successors: index,
        });
    }
    Ok(())
}

/// Checks that the positions of a vertex container agree with its
/// successor function.
///
/// ```rust
/// use graph_descriptors::prelude::*;
/// use std::collections::BTreeMap;
///
/// # fn main() -> Result<(), CheckViewError> {
/// check_vertices(&vec![1, 2, 3])?;
/// check_vertices(&BTreeMap::from([(2, 'a'), (1, 'b')]))?;
/// # Ok(())
/// # }
/// ```
pub fn check_vertices<C: VertexContainer + ?Sized>(container: &C) -> Result<(), CheckViewError> {
    log::debug!("Checking vertex positions...");
    let result = check_positions(container.positions(), |storage: &C::Storage| {
        container.successor(storage)
    });
    log::debug!("Vertex positions checked: {:?}", result);
    result
}

/// Checks that the positions of an edge container agree with its successor
/// function.
pub fn check_edges<C: EdgeContainer + ?Sized>(container: &C) -> Result<(), CheckViewError> {
    log::debug!("Checking edge positions...");
    let result = check_positions(container.positions(), |storage: &C::Storage| {
        container.successor(storage)
    });
    log::debug!("Edge positions checked: {:?}", result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::Index;
    use crate::views::IndexRange;

    #[test]
    fn test_check_positions() {
        let succ = |i: &Index| (i.0 < 3).then_some(Index(i.0 + 1));
        assert_eq!(check_positions(IndexRange::new(0, 4), succ), Ok(()));
        assert_eq!(
            check_positions(IndexRange::new(0, 3), succ),
            Err(CheckViewError::Length {
                view: 3,
                successors: 4
            })
        );
        assert_eq!(
            check_positions(IndexRange::new(0, 6), succ),
            Err(CheckViewError::Length {
                view: 6,
                successors: 4
            })
        );
        let skip = |i: &Index| (i.0 < 3).then_some(Index(i.0 + 2));
        assert_eq!(
            check_positions(IndexRange::new(0, 4), skip),
            Err(CheckViewError::Successor {
                index: 1,
                view: "Index(1)".into(),
                successor: "Index(2)".into()
            })
        );
    }
}
