/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use petgraph::graphmap::UnGraphMap;

use crate::errors::GraphError;
use crate::types::NodeId;

/// An undirected graph over node ids: the moral graph during
/// junction-tree compilation and the working graph during
/// triangulation.
#[derive(Debug, Clone, Default)]
pub struct MoralGraph {
    graph: UnGraphMap<NodeId, ()>,
}

impl MoralGraph {
    pub fn new() -> Self {
        Self {
            graph: UnGraphMap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.graph = UnGraphMap::new();
    }

    pub fn add_node(&mut self, node: NodeId) {
        self.graph.add_node(node);
    }

    /// Adds an undirected edge. Self-loops are silently ignored;
    /// both endpoints must exist.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        if a == b {
            return Ok(());
        }
        if !self.graph.contains_node(a) || !self.graph.contains_node(b) {
            return Err(GraphError::EdgeCreationError {
                source: a,
                target: b,
            });
        }
        self.graph.add_edge(a, b, ());
        Ok(())
    }

    pub fn remove_node(&mut self, node: NodeId) -> bool {
        self.graph.remove_node(node)
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// Node ids in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.graph.nodes().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Neighbours of `node` in ascending order.
    pub fn neighbours(&self, node: NodeId) -> Vec<NodeId> {
        let mut neighbours: Vec<NodeId> = self.graph.neighbors(node).collect();
        neighbours.sort_unstable();
        neighbours
    }

    pub fn number_nodes(&self) -> usize {
        self.graph.node_count()
    }

    pub fn number_edges(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
