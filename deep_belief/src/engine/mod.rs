/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

mod collect;
mod compile;
mod compiled_tree;
mod query;

use deep_belief_graph::CliqueGraph;
use deep_belief_tensor::Potential;

use crate::alias::{CliqueId, NodeId, NodeSet};
use crate::errors::{EvidenceError, InferenceError};
use crate::traits::bayes_net_view::BayesNetView;
use crate::traits::triangulation::Triangulation;
use crate::triangulation::min_weight_triangulation::MinWeightTriangulation;
use crate::types::evidence::evidence_store::EvidenceStore;
use crate::types::schedule::change_log::ChangeLog;
use crate::types::targets::target_registry::TargetRegistry;

pub(crate) use compiled_tree::{CompiledTree, FactorRef, Message};

/// Exact inference engine over a borrowed Bayesian network, using
/// junction-tree compilation and Shafer-Shenoy message passing.
///
/// The engine owns every tensor it creates (projected tables,
/// combined clique factors, separator messages, cached posteriors)
/// and borrows the network and its tables for its whole lifetime.
/// Queries run to completion on the calling thread.
pub struct ShaferShenoy<'a, B: BayesNetView> {
    bn: &'a B,
    evidence: EvidenceStore,
    targets: TargetRegistry,
    change_log: ChangeLog,
    triangulation: Box<dyn Triangulation>,
    barren_nodes: bool,
    binary_join_tree: bool,
    compiled: CompiledTree,
    has_tree: bool,
}

impl<'a, B: BayesNetView> ShaferShenoy<'a, B> {
    /// Creates an engine with the default configuration: barren-node
    /// pruning enabled, binary join tree enabled, min-weight
    /// triangulation.
    pub fn new(bn: &'a B) -> Self {
        Self {
            bn,
            evidence: EvidenceStore::new(),
            targets: TargetRegistry::new(),
            change_log: ChangeLog::new(),
            triangulation: Box::new(MinWeightTriangulation::new()),
            barren_nodes: true,
            binary_join_tree: true,
            compiled: CompiledTree::default(),
            has_tree: false,
        }
    }

    // ------------------------------------------------------------------
    // configuration
    // ------------------------------------------------------------------

    pub fn set_barren_nodes(&mut self, enabled: bool) {
        if self.barren_nodes != enabled {
            self.barren_nodes = enabled;
            self.change_log.set_structure_dirty();
        }
    }

    pub fn barren_nodes(&self) -> bool {
        self.barren_nodes
    }

    pub fn set_binary_join_tree(&mut self, enabled: bool) {
        if self.binary_join_tree != enabled {
            self.binary_join_tree = enabled;
            self.change_log.set_structure_dirty();
        }
    }

    pub fn binary_join_tree(&self) -> bool {
        self.binary_join_tree
    }

    pub fn set_triangulation(&mut self, strategy: Box<dyn Triangulation>) {
        self.triangulation = strategy;
        self.change_log.set_structure_dirty();
    }

    /// Caller hook after any mutation of the underlying network:
    /// forces a full recompilation on the next query.
    pub fn set_outdated_structure(&mut self) {
        self.change_log.set_structure_dirty();
    }

    // ------------------------------------------------------------------
    // evidence
    // ------------------------------------------------------------------

    pub fn add_hard_evidence(&mut self, node: NodeId, label: usize) -> Result<(), InferenceError> {
        let variable = self
            .bn
            .variable(node)
            .cloned()
            .ok_or(InferenceError::UnknownNode { node })?;
        self.evidence.add_hard(&variable, label)?;
        // a hard-evidence node is cut out of the moral graph
        self.change_log.set_structure_dirty();
        Ok(())
    }

    pub fn add_soft_evidence(&mut self, potential: Potential) -> Result<(), InferenceError> {
        let node = self.validate_soft(&potential)?;
        self.evidence.add_soft(potential)?;
        if self.has_tree && self.compiled.graph.contains_node(node) {
            self.change_log.record_added(node);
        } else {
            self.change_log.set_structure_dirty();
        }
        Ok(())
    }

    pub fn change_hard_evidence(
        &mut self,
        node: NodeId,
        label: usize,
    ) -> Result<(), InferenceError> {
        let variable = self
            .bn
            .variable(node)
            .cloned()
            .ok_or(InferenceError::UnknownNode { node })?;
        let flipped = self.evidence.change_hard(&variable, label)?;
        if flipped {
            self.change_log.set_structure_dirty();
        } else {
            self.change_log.record_modified(node);
        }
        Ok(())
    }

    pub fn change_soft_evidence(&mut self, potential: Potential) -> Result<(), InferenceError> {
        let node = self.validate_soft(&potential)?;
        let flipped = self.evidence.change_soft(potential)?;
        if flipped {
            self.change_log.set_structure_dirty();
        } else {
            self.change_log.record_modified(node);
        }
        Ok(())
    }

    pub fn erase_evidence(&mut self, node: NodeId) -> Result<(), InferenceError> {
        let was_hard = self.evidence.erase(node)?;
        if was_hard {
            self.change_log.set_structure_dirty();
        } else {
            self.change_log.record_erased(node);
        }
        Ok(())
    }

    pub fn erase_all_evidence(&mut self) {
        let (had_hard, soft_nodes) = self.evidence.erase_all();
        if had_hard {
            self.change_log.set_structure_dirty();
        } else {
            for node in soft_nodes {
                self.change_log.record_erased(node);
            }
        }
    }

    pub fn evidence(&self) -> &EvidenceStore {
        &self.evidence
    }

    pub fn hard_evidence_nodes(&self) -> NodeSet {
        self.evidence.hard_nodes()
    }

    fn validate_soft(&self, potential: &Potential) -> Result<NodeId, InferenceError> {
        if potential.rank() != 1 {
            return Err(EvidenceError::NotSingleVariable.into());
        }
        let node = potential.vars()[0].id();
        let variable = self
            .bn
            .variable(node)
            .ok_or(InferenceError::UnknownNode { node })?;
        if variable.domain_size() != potential.len() {
            return Err(InferenceError::InvalidArgument(format!(
                "soft evidence for node {node} has {} values, expected {}",
                potential.len(),
                variable.domain_size()
            )));
        }
        Ok(node)
    }

    // ------------------------------------------------------------------
    // targets
    // ------------------------------------------------------------------

    pub fn add_target(&mut self, node: NodeId) -> Result<(), InferenceError> {
        if !self.bn.contains_node(node) {
            return Err(InferenceError::UnknownNode { node });
        }
        self.targets.add_single(node);
        Ok(())
    }

    pub fn erase_target(&mut self, node: NodeId) -> bool {
        self.targets.erase_single(node)
    }

    pub fn add_joint_target(&mut self, target: NodeSet) -> Result<(), InferenceError> {
        for &node in &target {
            if !self.bn.contains_node(node) {
                return Err(InferenceError::UnknownNode { node });
            }
        }
        self.targets.add_joint(target)?;
        Ok(())
    }

    pub fn erase_joint_target(&mut self, target: &NodeSet) -> bool {
        self.targets.erase_joint(target)
    }

    pub fn erase_all_targets(&mut self) {
        self.targets.erase_all();
    }

    pub fn add_all_single_targets(&mut self) {
        self.targets.add_all_singles(self.bn.nodes());
    }

    pub fn targets(&self) -> &TargetRegistry {
        &self.targets
    }

    // ------------------------------------------------------------------
    // compiled-state accessors
    // ------------------------------------------------------------------

    /// The compiled junction tree, rebuilding it first if needed.
    pub fn junction_tree(&mut self) -> Result<&CliqueGraph, InferenceError> {
        self.prepare()?;
        Ok(&self.compiled.tree)
    }

    /// One root clique per connected component of the compiled tree.
    pub fn roots(&mut self) -> Result<&[CliqueId], InferenceError> {
        self.prepare()?;
        Ok(&self.compiled.roots)
    }

    /// The clique holding the (possibly projected) table of `node`.
    pub fn clique_of(&mut self, node: NodeId) -> Result<Option<CliqueId>, InferenceError> {
        self.prepare()?;
        Ok(self.compiled.node_to_clique.get(&node).copied())
    }
}
