/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeSet;

use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;

use crate::errors::GraphError;
use crate::types::NodeId;

/// A directed acyclic view over node ids.
///
/// The view only stores structure; acyclicity is the caller's
/// invariant (arcs come from a Bayesian network DAG).
#[derive(Debug, Clone, Default)]
pub struct DagView {
    graph: DiGraphMap<NodeId, ()>,
}

impl DagView {
    pub fn new() -> Self {
        Self {
            graph: DiGraphMap::new(),
        }
    }

    pub fn add_node(&mut self, node: NodeId) {
        self.graph.add_node(node);
    }

    pub fn add_arc(&mut self, parent: NodeId, child: NodeId) -> Result<(), GraphError> {
        if parent == child
            || !self.graph.contains_node(parent)
            || !self.graph.contains_node(child)
        {
            return Err(GraphError::EdgeCreationError {
                source: parent,
                target: child,
            });
        }
        self.graph.add_edge(parent, child, ());
        Ok(())
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    /// Node ids in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.graph.nodes().collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn parents(&self, node: NodeId) -> BTreeSet<NodeId> {
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .collect()
    }

    pub fn children(&self, node: NodeId) -> BTreeSet<NodeId> {
        self.graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect()
    }

    pub fn number_nodes(&self) -> usize {
        self.graph.node_count()
    }

    pub fn number_arcs(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Every node from which some node in `seeds` is reachable,
    /// including the seeds themselves (reverse reachability).
    ///
    /// The complement of this set over the DAG nodes is exactly the
    /// set of barren nodes w.r.t. `seeds`.
    pub fn ancestors_or_self(&self, seeds: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
        let mut reached: BTreeSet<NodeId> = seeds
            .iter()
            .copied()
            .filter(|n| self.graph.contains_node(*n))
            .collect();
        let mut frontier: Vec<NodeId> = reached.iter().copied().collect();
        while let Some(node) = frontier.pop() {
            for parent in self.graph.neighbors_directed(node, Direction::Incoming) {
                if reached.insert(parent) {
                    frontier.push(parent);
                }
            }
        }
        reached
    }
}
