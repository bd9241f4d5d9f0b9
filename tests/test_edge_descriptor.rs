/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::{BTreeMap, BTreeSet, HashSet};

use anyhow::Result;
use graph_descriptors::prelude::*;
use itertools::assert_equal;

mod common;

#[test]
fn test_adjacency_list() -> Result<()> {
    let g = common::adjacency_list();
    let mut arcs = vec![];
    for u in &vertex_view(&g) {
        let succ = u.inner(&g);
        for e in &edges(&g, &u) {
            assert_eq!(e.source(), &u);
            arcs.push((e.source_id(), e.target_id(succ)));
        }
    }
    assert_eq!(arcs, common::ARCS);
    Ok(())
}

#[test]
fn test_keyed_graph() -> Result<()> {
    let g = common::keyed_graph();
    let mut arcs = vec![];
    for u in &vertex_view(&g) {
        let succ = u.inner(&g);
        let view = edges(&g, &u);
        assert_eq!(view.source().id(), u.id());
        for e in &view {
            assert_eq!(e.kind(), StorageKind::Cursor);
            assert_eq!(e.id(), e.target_id(succ));
            arcs.push((e.source_id(), e.target_id(succ)));
        }
    }
    assert_equal(
        arcs,
        [
            ("a", "b"),
            ("a", "c"),
            ("b", "c"),
            ("b", "d"),
            ("c", "e"),
            ("d", "e"),
        ],
    );
    Ok(())
}

#[test]
fn test_bare_targets() -> Result<()> {
    let succ: Vec<u32> = vec![4, 8, 15];
    let view = edge_view(&succ, VertexDescriptor::new(Index(0)));
    assert_eq!(view.len(), 3);
    assert_equal(view.iter().map(|e| e.target_id(&succ)), [4, 8, 15]);
    // The property of a bare target is the target itself
    assert_equal(view.iter().map(|e| *e.inner(&succ)), [4, 8, 15]);
    assert_equal(view.iter().map(|e| *e.resolve(&succ)), [4, 8, 15]);
    Ok(())
}

#[test]
fn test_weighted_targets() -> Result<()> {
    let succ = vec![(1_usize, 0.25), (3, 0.75)];
    let view = edge_view(&succ, VertexDescriptor::new(Index(2)));
    assert_equal(view.iter().map(|e| e.target_id(&succ)), [1, 3]);
    assert_equal(view.iter().map(|e| *e.inner(&succ)), [0.25, 0.75]);
    assert_equal(view.iter().map(|e| e.resolve(&succ)), &succ);
    Ok(())
}

#[test]
fn test_tuple_targets() -> Result<()> {
    let succ = vec![(7_u64, 1.5_f32, "red"), (9, 2.5, "blue")];
    let view = edge_view(&succ, VertexDescriptor::new(Index(0)));
    let e = view.begin();
    assert_eq!(e.target_id(&succ), 7);
    let (weight, color) = e.inner(&succ);
    assert_eq!((*weight, *color), (1.5, "red"));
    assert_eq!(e.next_in(&succ).map(|e| e.inner(&succ).1), Some(&"blue"));
    Ok(())
}

#[test]
fn test_keyed_edges() -> Result<()> {
    let weights = BTreeMap::from([("x", 3), ("w", 1)]);
    let view = edge_view(&weights, VertexDescriptor::new(Cursor("v")));
    assert_equal(view.iter().map(|e| e.target_id(&weights)), ["w", "x"]);
    assert_equal(view.iter().map(|e| *e.inner(&weights)), [1, 3]);
    assert_equal(view.iter().map(|e| e.resolve(&weights)), &weights);

    let targets = BTreeSet::from([2_i64, -1]);
    let view = edge_view(&targets, VertexDescriptor::new(Index(5)));
    assert_equal(view.iter().map(|e| e.target_id(&targets)), [-1, 2]);
    assert_equal(view.iter().map(|e| *e.inner(&targets)), [-1, 2]);
    Ok(())
}

#[test]
fn test_keyed_compound_edges() -> Result<()> {
    let labeled = BTreeSet::from([(5_usize, "y".to_string()), (3, "x".to_string())]);
    let view = edge_view(&labeled, VertexDescriptor::new(Index(0)));
    assert_equal(view.iter().map(|e| e.target_id(&labeled)), [3, 5]);
    assert_equal(view.iter().map(|e| e.inner(&labeled).as_str()), ["x", "y"]);
    // The cursor is still the whole element
    let first = view.iter().next().unwrap();
    assert_eq!(first.id(), (3, "x".to_string()));
    check_edges(&labeled)?;

    let weighted = BTreeSet::from([(9_u32, 1_u8, 2_u8), (4, 7, 8)]);
    let view = edge_view(&weighted, VertexDescriptor::new(Cursor('s')));
    assert_equal(view.iter().map(|e| e.target_id(&weighted)), [4, 9]);
    assert_equal(
        view.iter().map(|e| {
            let (a, b) = e.inner(&weighted);
            (*a, *b)
        }),
        [(7, 8), (1, 2)],
    );
    assert_eq!(view.iter().next().unwrap().source_id(), 's');

    let named = BTreeSet::from(["b".to_string(), "a".to_string()]);
    let view = edge_view(&named, VertexDescriptor::new(Index(1)));
    assert_equal(view.iter().map(|e| e.target_id(&named)), ["a", "b"]);
    Ok(())
}

#[test]
fn test_advance_keeps_source() -> Result<()> {
    let succ = vec![1_usize, 2, 3];
    let source = VertexDescriptor::new(Index(42));
    let view = edge_view(&succ, source);
    let mut e = view.begin();
    for expected in 1..=3 {
        assert_eq!(e.target_id(&succ), expected);
        assert_eq!(e.source(), &source);
        e.advance();
    }
    assert_eq!(e, view.end());
    assert_eq!(e.source_id(), 42);

    let mut e = view.begin();
    let old = e.post_advance();
    assert_eq!(old.id() + 1, e.id());
    assert_eq!(old.source(), e.source());
    Ok(())
}

#[test]
fn test_explicit_range() -> Result<()> {
    let succ = vec![10_u16, 20, 30, 40];
    let view = EdgeView::from_range(1..3, VertexDescriptor::new(Index(0)));
    assert_eq!(view.len(), 2);
    assert_equal(view.iter().map(|e| e.target_id(&succ)), [20, 30]);
    Ok(())
}

#[test]
fn test_equality_and_hashing() -> Result<()> {
    let g = common::adjacency_list();
    let all: Vec<_> = vertex_view(&g)
        .iter()
        .flat_map(|u| edges(&g, &u))
        .collect();
    assert_eq!(all.len(), common::ARCS.len());
    let set: HashSet<_> = all.iter().copied().collect();
    assert_eq!(set.len(), all.len());

    // Same edge position, different sources
    let e = EdgeDescriptor::new(Index(0), VertexDescriptor::new(Index(0)));
    let f = EdgeDescriptor::new(Index(0), VertexDescriptor::new(Index(1)));
    assert_ne!(e, f);
    assert!(e < f);
    let mut sorted = all.clone();
    sorted.sort();
    assert_eq!(sorted, all);
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
struct Link {
    to: usize,
    cost: u32,
}

graph_descriptors::impl_pair_like!(Link { to: usize, cost: u32 });

#[derive(Debug, Clone, PartialEq)]
struct Flight {
    code: &'static str,
    destination: u8,
    minutes: u16,
}

graph_descriptors::impl_opaque_edge!(Flight { destination: u8 });

#[test]
fn test_pair_like_struct() -> Result<()> {
    let succ = vec![Link { to: 3, cost: 10 }, Link { to: 5, cost: 20 }];
    let view = edge_view(&succ, VertexDescriptor::new(Index(0)));
    assert_equal(view.iter().map(|e| e.target_id(&succ)), [3, 5]);
    assert_equal(view.iter().map(|e| *e.inner(&succ)), [10, 20]);
    assert_eq!(*succ[1].first(), 5);
    assert_eq!(*succ[1].second(), 20);
    Ok(())
}

#[test]
fn test_opaque_struct() -> Result<()> {
    let succ = vec![
        Flight {
            code: "AZ610",
            destination: 2,
            minutes: 540,
        },
        Flight {
            code: "AF1266",
            destination: 4,
            minutes: 120,
        },
    ];
    let view = edge_view(&succ, VertexDescriptor::new(Cursor("FCO")));
    assert_equal(view.iter().map(|e| e.target_id(&succ)), [2, 4]);
    let last = view.iter().last().unwrap();
    assert_eq!(last.inner(&succ), &succ[1]);
    assert_eq!(last.inner(&succ).minutes, 120);
    assert_eq!(last.resolve(&succ).code, "AF1266");
    assert_eq!(last.source_id(), "FCO");
    Ok(())
}
