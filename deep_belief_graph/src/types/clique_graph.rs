/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use petgraph::graphmap::UnGraphMap;

use crate::errors::GraphError;
use crate::types::NodeId;

/// Identifier of a clique in a clique graph.
pub type CliqueId = usize;

/// An undirected graph whose nodes are cliques (sets of node ids).
///
/// The separator of an edge is the intersection of its endpoint
/// cliques. Tree-ness, running intersection and coverage are
/// invariants established by the triangulation that builds the graph;
/// this type only stores structure.
#[derive(Debug, Clone, Default)]
pub struct CliqueGraph {
    cliques: BTreeMap<CliqueId, BTreeSet<NodeId>>,
    skeleton: UnGraphMap<CliqueId, ()>,
    next_id: CliqueId,
}

impl CliqueGraph {
    pub fn new() -> Self {
        Self {
            cliques: BTreeMap::new(),
            skeleton: UnGraphMap::new(),
            next_id: 0,
        }
    }

    /// Inserts a clique and returns its fresh id.
    pub fn add_clique(&mut self, nodes: BTreeSet<NodeId>) -> CliqueId {
        let id = self.next_id;
        self.next_id += 1;
        self.cliques.insert(id, nodes);
        self.skeleton.add_node(id);
        id
    }

    pub fn remove_clique(&mut self, id: CliqueId) -> Result<BTreeSet<NodeId>, GraphError> {
        let nodes = self.cliques.remove(&id).ok_or(GraphError::CliqueNotFound(id))?;
        self.skeleton.remove_node(id);
        Ok(nodes)
    }

    pub fn add_edge(&mut self, a: CliqueId, b: CliqueId) -> Result<(), GraphError> {
        if a == b || !self.cliques.contains_key(&a) || !self.cliques.contains_key(&b) {
            return Err(GraphError::EdgeCreationError {
                source: a,
                target: b,
            });
        }
        self.skeleton.add_edge(a, b, ());
        Ok(())
    }

    pub fn remove_edge(&mut self, a: CliqueId, b: CliqueId) -> Result<(), GraphError> {
        if self.skeleton.remove_edge(a, b).is_none() {
            return Err(GraphError::EdgeNotFound {
                source: a,
                target: b,
            });
        }
        Ok(())
    }

    pub fn contains_clique(&self, id: CliqueId) -> bool {
        self.cliques.contains_key(&id)
    }

    pub fn contains_edge(&self, a: CliqueId, b: CliqueId) -> bool {
        self.skeleton.contains_edge(a, b)
    }

    pub fn clique(&self, id: CliqueId) -> Option<&BTreeSet<NodeId>> {
        self.cliques.get(&id)
    }

    /// The separator of the edge (a, b): the intersection of the two
    /// cliques. `None` when either clique is missing.
    pub fn separator(&self, a: CliqueId, b: CliqueId) -> Option<BTreeSet<NodeId>> {
        let ca = self.cliques.get(&a)?;
        let cb = self.cliques.get(&b)?;
        Some(ca.intersection(cb).copied().collect())
    }

    /// Clique ids in ascending order.
    pub fn clique_ids(&self) -> Vec<CliqueId> {
        self.cliques.keys().copied().collect()
    }

    pub fn cliques(&self) -> impl Iterator<Item = (CliqueId, &BTreeSet<NodeId>)> {
        self.cliques.iter().map(|(id, nodes)| (*id, nodes))
    }

    /// Neighbours of `id` in ascending order.
    pub fn neighbours(&self, id: CliqueId) -> Vec<CliqueId> {
        let mut neighbours: Vec<CliqueId> = self.skeleton.neighbors(id).collect();
        neighbours.sort_unstable();
        neighbours
    }

    pub fn degree(&self, id: CliqueId) -> usize {
        self.skeleton.neighbors(id).count()
    }

    /// Undirected edges as ordered pairs (small id first), sorted.
    pub fn edges(&self) -> Vec<(CliqueId, CliqueId)> {
        let mut edges: Vec<(CliqueId, CliqueId)> = self
            .skeleton
            .all_edges()
            .map(|(a, b, _)| if a < b { (a, b) } else { (b, a) })
            .collect();
        edges.sort_unstable();
        edges
    }

    pub fn number_cliques(&self) -> usize {
        self.cliques.len()
    }

    pub fn number_edges(&self) -> usize {
        self.skeleton.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cliques.is_empty()
    }

    /// The first clique (ascending id) containing every node of
    /// `nodes`, if any.
    pub fn find_clique_containing(&self, nodes: &BTreeSet<NodeId>) -> Option<CliqueId> {
        self.cliques
            .iter()
            .find(|(_, clique)| nodes.is_subset(clique))
            .map(|(id, _)| *id)
    }
}
