/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::{BTreeMap, BTreeSet};

use deep_belief_graph::{CliqueGraph, MoralGraph};
use deep_belief_tensor::{combine_and_project, Potential};

use crate::alias::{CliqueId, NodeId, NodeSet};
use crate::traits::bayes_net_view::BayesNetView;
use crate::types::evidence::evidence_store::EvidenceStore;

/// A reference into one of the engine-owned factor stores. Factor
/// lists hold references; the stores own the tensors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FactorRef {
    /// The untouched table of a node, owned by the network.
    Cpt(NodeId),
    /// A table with its hard-evidence variables summed out, owned by
    /// the compiled tree.
    ProjectedCpt(NodeId),
    /// The soft-evidence tensor of a node, owned by the evidence
    /// store.
    SoftEvidence(NodeId),
}

/// The combined factor Φ(C) of a clique: the single element of its
/// factor list (no allocation), or the owned combination of all of
/// them.
#[derive(Debug, Clone)]
pub(crate) enum CliqueFactor {
    Single(FactorRef),
    Combined(Potential),
}

/// A directed separator message.
#[derive(Debug, Clone, Default)]
pub(crate) struct Message {
    pub(crate) computed: bool,
    /// Absent when the message was dropped as all-ones.
    pub(crate) tensor: Option<Potential>,
}

/// Everything derived from one compilation of the junction tree.
///
/// Rebuilt atomically by the compiler; partially invalidated by the
/// incremental-update path. Owned tensors live in exactly one of the
/// maps below.
#[derive(Debug, Default)]
pub(crate) struct CompiledTree {
    /// The reduced moral graph (barren and hard-evidence nodes
    /// removed) the tree was built from.
    pub(crate) graph: MoralGraph,
    pub(crate) tree: CliqueGraph,
    pub(crate) elim_position: BTreeMap<NodeId, usize>,
    /// Triangulation's elimination-clique map, kept for the
    /// undeclared-joint-set lookup rule.
    pub(crate) created_clique: BTreeMap<NodeId, CliqueId>,
    pub(crate) node_to_clique: BTreeMap<NodeId, CliqueId>,
    pub(crate) joint_target_to_clique: BTreeMap<NodeSet, CliqueId>,
    pub(crate) hard_ev_nodes: NodeSet,
    pub(crate) clique_factors: BTreeMap<CliqueId, Vec<FactorRef>>,
    pub(crate) projected_cpts: BTreeMap<NodeId, Potential>,
    pub(crate) combined_factors: BTreeMap<CliqueId, CliqueFactor>,
    /// Tables that collapsed to a scalar because every variable
    /// carried hard evidence.
    pub(crate) constants: BTreeMap<NodeId, f64>,
    pub(crate) roots: Vec<CliqueId>,
    pub(crate) messages: BTreeMap<(CliqueId, CliqueId), Message>,
    pub(crate) posterior_cache: BTreeMap<NodeId, Potential>,
    pub(crate) joint_posterior_cache: BTreeMap<NodeSet, Potential>,
}

impl CompiledTree {
    pub(crate) fn factor_potential<'s>(
        &'s self,
        bn: &'s dyn BayesNetView,
        evidence: &'s EvidenceStore,
        factor: &FactorRef,
    ) -> Option<&'s Potential> {
        match factor {
            FactorRef::Cpt(node) => bn.cpt(*node),
            FactorRef::ProjectedCpt(node) => self.projected_cpts.get(node),
            FactorRef::SoftEvidence(node) => evidence.potential(*node),
        }
    }

    /// The combined factor Φ of a clique, if it holds any factor.
    pub(crate) fn clique_phi<'s>(
        &'s self,
        bn: &'s dyn BayesNetView,
        evidence: &'s EvidenceStore,
        clique: CliqueId,
    ) -> Option<&'s Potential> {
        match self.combined_factors.get(&clique)? {
            CliqueFactor::Combined(potential) => Some(potential),
            CliqueFactor::Single(factor) => self.factor_potential(bn, evidence, factor),
        }
    }

    /// Recomputes Φ(C) from the clique's current factor list.
    pub(crate) fn recombine(
        &mut self,
        bn: &dyn BayesNetView,
        evidence: &EvidenceStore,
        clique: CliqueId,
    ) {
        let combined = match self.clique_factors.get(&clique).map(Vec::as_slice) {
            None | Some([]) => None,
            Some([single]) => Some(CliqueFactor::Single(single.clone())),
            Some(list) => {
                let pots: Vec<&Potential> = list
                    .iter()
                    .filter_map(|factor| self.factor_potential(bn, evidence, factor))
                    .collect();
                Some(CliqueFactor::Combined(combine_and_project(
                    &pots,
                    &NodeSet::new(),
                )))
            }
        };
        match combined {
            Some(factor) => {
                self.combined_factors.insert(clique, factor);
            }
            None => {
                self.combined_factors.remove(&clique);
            }
        }
    }

    pub(crate) fn is_message_computed(&self, from: CliqueId, to: CliqueId) -> bool {
        self.messages.get(&(from, to)).is_some_and(|m| m.computed)
    }

    /// Invalidates the message on the arc (from, to) and, when it had
    /// been computed, every message downstream of it; every clique
    /// reached is added to `invalidated`.
    pub(crate) fn diffuse_invalidations(
        &mut self,
        from: CliqueId,
        to: CliqueId,
        invalidated: &mut BTreeSet<CliqueId>,
    ) {
        let mut stack = vec![(from, to)];
        while let Some((from, to)) = stack.pop() {
            invalidated.insert(to);
            if let Some(message) = self.messages.get_mut(&(from, to)) {
                if message.computed {
                    message.computed = false;
                    message.tensor = None;
                    for next in self.tree.neighbours(to) {
                        if next != from {
                            stack.push((to, next));
                        }
                    }
                }
            }
        }
    }
}
