/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use anyhow::Result;
use graph_descriptors::prelude::*;

mod common;

#[test]
fn test_std_containers() -> Result<()> {
    common::init_logger();
    let g = common::adjacency_list();
    check_vertices(&g)?;
    for u in &vertex_view(&g) {
        check_edges(u.inner(&g))?;
    }

    let h = common::keyed_graph();
    check_vertices(&h)?;
    for u in &vertex_view(&h) {
        check_edges(u.inner(&h))?;
    }

    check_vertices(&VecDeque::from([1, 2, 3]))?;
    check_vertices(&Vec::<u8>::new())?;
    check_edges(&BTreeMap::from([(1, 'a'), (2, 'b')]))?;
    check_edges(&BTreeSet::<u64>::new())?;
    check_edges(&vec![(0_usize, 1.0), (0, 2.0)])?;
    check_vertices([1, 2].as_slice())?;
    Ok(())
}

/// A ring of vertices whose successor function wraps around.
struct Ring(usize);

impl VertexContainer for Ring {
    type Storage = Index;
    type Positions<'a> = IndexRange;
    type Element<'a> = usize;
    type Inner = usize;

    fn positions(&self) -> IndexRange {
        IndexRange::new(0, self.0)
    }

    fn resolve(&self, storage: &Index) -> usize {
        storage.0
    }

    fn inner(&self, _storage: &Index) -> &usize {
        &self.0
    }

    fn successor(&self, storage: &Index) -> Option<Index> {
        Some(Index((storage.0 + 1) % self.0))
    }
}

#[test]
fn test_wrapping_successor() -> Result<()> {
    common::init_logger();
    let err = check_vertices(&Ring(3)).unwrap_err();
    assert_eq!(
        err,
        CheckViewError::Length {
            view: 3,
            successors: 4
        }
    );
    assert_eq!(
        err.to_string(),
        "Different number of positions: 3 (view) != 4 (successors)"
    );
    Ok(())
}

/// An edge list whose successor function skips every other edge.
struct Skipping(Vec<u32>);

impl EdgeContainer for Skipping {
    type Storage = Index;
    type Positions<'a> = IndexRange;
    type Element<'a> = &'a u32;
    type Target = u32;
    type Inner<'a> = &'a u32;

    fn positions(&self) -> IndexRange {
        IndexRange::new(0, self.0.len())
    }

    fn resolve(&self, storage: &Index) -> &u32 {
        &self.0[storage.0]
    }

    fn target_id(&self, storage: &Index) -> u32 {
        self.0[storage.0]
    }

    fn inner(&self, storage: &Index) -> &u32 {
        &self.0[storage.0]
    }

    fn successor(&self, storage: &Index) -> Option<Index> {
        let next = storage.0 + 2;
        (next < self.0.len()).then_some(Index(next))
    }
}

#[test]
fn test_skipping_successor() -> Result<()> {
    common::init_logger();
    assert_eq!(
        check_edges(&Skipping(vec![5, 6, 7])),
        Err(CheckViewError::Successor {
            index: 1,
            view: "Index(1)".to_string(),
            successor: "Index(2)".to_string(),
        })
    );
    // With a single edge there is nothing to skip
    check_edges(&Skipping(vec![5]))?;
    Ok(())
}
