/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeSet;

use deep_belief_graph::prelude::*;

fn get_diamond() -> DagView {
    // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
    let mut dag = DagView::new();
    for node in 0..4 {
        dag.add_node(node);
    }
    dag.add_arc(0, 1).unwrap();
    dag.add_arc(0, 2).unwrap();
    dag.add_arc(1, 3).unwrap();
    dag.add_arc(2, 3).unwrap();
    dag
}

#[test]
fn test_add_node() {
    let mut dag = DagView::new();
    assert!(dag.is_empty());

    dag.add_node(7);
    assert!(dag.contains_node(7));
    assert!(!dag.contains_node(0));

    let expected = 1;
    let actual = dag.number_nodes();
    assert_eq!(expected, actual);
}

#[test]
fn test_add_arc() {
    let dag = get_diamond();
    assert_eq!(dag.number_arcs(), 4);
    assert_eq!(dag.parents(3), BTreeSet::from([1, 2]));
    assert_eq!(dag.children(0), BTreeSet::from([1, 2]));
    assert!(dag.parents(0).is_empty());
    assert!(dag.children(3).is_empty());
}

#[test]
fn test_add_arc_missing_node() {
    let mut dag = DagView::new();
    dag.add_node(0);

    let result = dag.add_arc(0, 9);
    assert_eq!(
        result,
        Err(GraphError::EdgeCreationError {
            source: 0,
            target: 9
        })
    );
}

#[test]
fn test_nodes_sorted() {
    let mut dag = DagView::new();
    dag.add_node(5);
    dag.add_node(1);
    dag.add_node(3);
    assert_eq!(dag.nodes(), vec![1, 3, 5]);
}

#[test]
fn test_ancestors_or_self() {
    let dag = get_diamond();

    let reached = dag.ancestors_or_self(&BTreeSet::from([3]));
    assert_eq!(reached, BTreeSet::from([0, 1, 2, 3]));

    let reached = dag.ancestors_or_self(&BTreeSet::from([1]));
    assert_eq!(reached, BTreeSet::from([0, 1]));

    // seeds outside the graph are ignored
    let reached = dag.ancestors_or_self(&BTreeSet::from([42]));
    assert!(reached.is_empty());
}

#[test]
fn test_ancestors_or_self_chain() {
    // 0 -> 1 -> 2 -> 3; the complement of ancestors_or_self({1}) is
    // the barren set {2, 3}
    let mut dag = DagView::new();
    for node in 0..4 {
        dag.add_node(node);
    }
    dag.add_arc(0, 1).unwrap();
    dag.add_arc(1, 2).unwrap();
    dag.add_arc(2, 3).unwrap();

    let reached = dag.ancestors_or_self(&BTreeSet::from([1]));
    assert_eq!(reached, BTreeSet::from([0, 1]));

    let barren: BTreeSet<NodeId> = dag
        .nodes()
        .into_iter()
        .filter(|n| !reached.contains(n))
        .collect();
    assert_eq!(barren, BTreeSet::from([2, 3]));
}
