/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

/// Initializes logging for tests; repeated calls are harmless.
pub fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

/// Canonical test graph (5 vertices, 6 arcs) as an adjacency list.
///
/// - Outdegree 0: vertex 4 (sink)
/// - Acyclic
pub fn adjacency_list() -> Vec<Vec<usize>> {
    vec![vec![1, 2], vec![2, 3], vec![4], vec![4], vec![]]
}

/// The same graph as [`adjacency_list`], with string keys and successor
/// sets.
pub fn keyed_graph() -> BTreeMap<&'static str, BTreeSet<&'static str>> {
    BTreeMap::from([
        ("a", BTreeSet::from(["b", "c"])),
        ("b", BTreeSet::from(["c", "d"])),
        ("c", BTreeSet::from(["e"])),
        ("d", BTreeSet::from(["e"])),
        ("e", BTreeSet::new()),
    ])
}

/// The arcs of [`adjacency_list`], in lexicographical order.
pub const ARCS: [(usize, usize); 6] = [(0, 1), (0, 2), (1, 2), (1, 3), (2, 4), (3, 4)];
