/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use deep_belief_graph::prelude::*;

fn get_triangle() -> MoralGraph {
    let mut g = MoralGraph::new();
    for node in 0..3 {
        g.add_node(node);
    }
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(0, 2).unwrap();
    g
}

#[test]
fn test_add_node() {
    let mut g = MoralGraph::new();
    assert!(g.is_empty());

    g.add_node(4);
    assert!(g.contains_node(4));

    let expected = 1;
    let actual = g.number_nodes();
    assert_eq!(expected, actual);
}

#[test]
fn test_add_edge() {
    let g = get_triangle();
    assert_eq!(g.number_edges(), 3);
    assert!(g.contains_edge(0, 1));
    assert!(g.contains_edge(1, 0));
    assert!(!g.contains_edge(0, 3));
}

#[test]
fn test_add_edge_missing_node() {
    let mut g = MoralGraph::new();
    g.add_node(0);

    let result = g.add_edge(0, 5);
    assert_eq!(
        result,
        Err(GraphError::EdgeCreationError {
            source: 0,
            target: 5
        })
    );
}

#[test]
fn test_self_loop_is_ignored() {
    let mut g = MoralGraph::new();
    g.add_node(0);

    g.add_edge(0, 0).unwrap();
    assert_eq!(g.number_edges(), 0);
}

#[test]
fn test_remove_node() {
    let mut g = get_triangle();

    let removed = g.remove_node(1);
    assert!(removed);
    assert!(!g.contains_node(1));
    // incident edges disappear with the node
    assert_eq!(g.number_edges(), 1);
    assert!(g.contains_edge(0, 2));

    let removed = g.remove_node(1);
    assert!(!removed);
}

#[test]
fn test_neighbours_sorted() {
    let mut g = MoralGraph::new();
    for node in [9, 2, 5, 0] {
        g.add_node(node);
    }
    g.add_edge(5, 9).unwrap();
    g.add_edge(5, 0).unwrap();
    g.add_edge(5, 2).unwrap();

    assert_eq!(g.neighbours(5), vec![0, 2, 9]);
    assert_eq!(g.nodes(), vec![0, 2, 5, 9]);
}

#[test]
fn test_clone_is_independent() {
    let g = get_triangle();
    let mut copy = g.clone();
    copy.remove_node(0);

    assert!(g.contains_node(0));
    assert_eq!(g.number_edges(), 3);
    assert_eq!(copy.number_edges(), 1);
}
