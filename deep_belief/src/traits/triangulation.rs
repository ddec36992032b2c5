/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use deep_belief_graph::{CliqueGraph, MoralGraph};

use crate::alias::{CliqueId, DomainSizes, NodeId};

/// A triangulation strategy: from an undirected graph and the domain
/// sizes of its nodes, produce an elimination order, a junction tree
/// and the mapping from each node to the clique created by its
/// elimination.
///
/// The only contract on the produced tree is that it satisfies the
/// running-intersection property and covers every edge of the
/// triangulated input graph. The engine holds strategies as trait
/// objects, so alternative heuristics can be substituted.
pub trait Triangulation {
    /// Triangulates `graph`, replacing any previous result.
    fn triangulate(&mut self, graph: &MoralGraph, domains: &DomainSizes);

    /// The elimination order of the last triangulation.
    fn elimination_order(&self) -> &[NodeId];

    /// The junction tree of the last triangulation.
    fn junction_tree(&self) -> &CliqueGraph;

    /// The surviving clique created when `node` was eliminated.
    fn created_clique(&self, node: NodeId) -> Option<CliqueId>;

    /// Fill-in edges added during the last triangulation.
    fn fill_ins(&self) -> &[(NodeId, NodeId)];
}
