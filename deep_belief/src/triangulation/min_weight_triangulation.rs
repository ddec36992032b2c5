/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeMap;

use deep_belief_graph::{CliqueGraph, MoralGraph};

use crate::alias::{CliqueId, DomainSizes, NodeId, NodeSet};
use crate::traits::triangulation::Triangulation;

/// The default triangulation: at every step eliminate the node whose
/// induced clique has the smallest product of domain sizes, ties
/// broken by the smallest node id.
///
/// The junction tree is built from the elimination cliques: each
/// clique links to the clique created by the first-eliminated of its
/// other members, then non-maximal cliques are absorbed into the
/// neighbouring superset. The surviving clique of each elimination
/// step is reachable through [`created_clique`](Self::created_clique).
#[derive(Debug, Default)]
pub struct MinWeightTriangulation {
    elim_order: Vec<NodeId>,
    fill_ins: Vec<(NodeId, NodeId)>,
    junction_tree: CliqueGraph,
    node_to_clique: BTreeMap<NodeId, CliqueId>,
}

impl MinWeightTriangulation {
    pub fn new() -> Self {
        Self::default()
    }

    fn domain_of(domains: &DomainSizes, node: NodeId) -> f64 {
        domains.get(&node).copied().unwrap_or(1) as f64
    }

    /// Weight of the clique created by eliminating `node` now.
    fn elimination_weight(work: &MoralGraph, domains: &DomainSizes, node: NodeId) -> f64 {
        let mut weight = Self::domain_of(domains, node);
        for neighbour in work.neighbours(node) {
            weight *= Self::domain_of(domains, neighbour);
        }
        weight
    }
}

impl Triangulation for MinWeightTriangulation {
    fn triangulate(&mut self, graph: &MoralGraph, domains: &DomainSizes) {
        self.elim_order.clear();
        self.fill_ins.clear();
        self.junction_tree = CliqueGraph::new();
        self.node_to_clique.clear();

        let mut work = graph.clone();
        let mut elim_cliques: Vec<NodeSet> = Vec::with_capacity(graph.number_nodes());

        // eliminate nodes one by one, smallest induced clique first
        while !work.is_empty() {
            let mut best: Option<(f64, NodeId)> = None;
            for node in work.nodes() {
                let weight = Self::elimination_weight(&work, domains, node);
                match best {
                    Some((best_weight, _)) if weight >= best_weight => {}
                    _ => best = Some((weight, node)),
                }
            }
            let node = match best {
                Some((_, node)) => node,
                None => break,
            };

            let neighbours = work.neighbours(node);
            for (i, &a) in neighbours.iter().enumerate() {
                for &b in &neighbours[i + 1..] {
                    if !work.contains_edge(a, b) {
                        self.fill_ins.push((a, b));
                        let _ = work.add_edge(a, b);
                    }
                }
            }

            let mut clique: NodeSet = neighbours.into_iter().collect();
            clique.insert(node);
            elim_cliques.push(clique);
            self.elim_order.push(node);
            work.remove_node(node);
        }

        let elim_position: BTreeMap<NodeId, usize> = self
            .elim_order
            .iter()
            .enumerate()
            .map(|(i, node)| (*node, i))
            .collect();

        // elimination tree: clique ids coincide with elimination steps
        for clique in &elim_cliques {
            self.junction_tree.add_clique(clique.clone());
        }
        for (step, clique) in elim_cliques.iter().enumerate() {
            let child = clique
                .iter()
                .filter(|member| **member != self.elim_order[step])
                .map(|member| elim_position[member])
                .min();
            if let Some(child) = child {
                let _ = self.junction_tree.add_edge(step, child);
            }
        }

        // absorb non-maximal cliques into an earlier-created superset
        // neighbour, from the last created clique down to the first
        let mut substitution: Vec<CliqueId> = (0..elim_cliques.len()).collect();
        for step in (0..elim_cliques.len()).rev() {
            let host = self.junction_tree.neighbours(step).into_iter().find(|j| {
                *j < step
                    && match (self.junction_tree.clique(step), self.junction_tree.clique(*j)) {
                        (Some(absorbed), Some(host)) => absorbed.is_subset(host),
                        _ => false,
                    }
            });
            if let Some(host) = host {
                for neighbour in self.junction_tree.neighbours(step) {
                    if neighbour != host {
                        let _ = self.junction_tree.add_edge(host, neighbour);
                    }
                }
                let _ = self.junction_tree.remove_clique(step);
                substitution[step] = host;
            }
        }

        // transitive closure of the substitution map
        for step in 0..substitution.len() {
            let mut target = substitution[step];
            while substitution[target] != target {
                target = substitution[target];
            }
            substitution[step] = target;
        }

        for (step, node) in self.elim_order.iter().enumerate() {
            self.node_to_clique.insert(*node, substitution[step]);
        }
    }

    fn elimination_order(&self) -> &[NodeId] {
        &self.elim_order
    }

    fn junction_tree(&self) -> &CliqueGraph {
        &self.junction_tree
    }

    fn created_clique(&self, node: NodeId) -> Option<CliqueId> {
        self.node_to_clique.get(&node).copied()
    }

    fn fill_ins(&self) -> &[(NodeId, NodeId)] {
        &self.fill_ins
    }
}
