/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use deep_belief_tensor::{combine_and_project, Potential};

use crate::alias::{CliqueId, NodeId, NodeSet, ProbabilityValue};
use crate::engine::ShaferShenoy;
use crate::errors::InferenceError;
use crate::traits::bayes_net_view::BayesNetView;
use crate::types::evidence::evidence_entry::EvidenceEntry;

impl<'a, B: BayesNetView> ShaferShenoy<'a, B> {
    /// Runs every collect the declared targets need, so subsequent
    /// queries answer from cached messages.
    pub fn make_inference(&mut self) -> Result<(), InferenceError> {
        self.prepare()?;
        let mut cliques: Vec<CliqueId> = Vec::new();
        for &node in self.targets.singles() {
            if self.compiled.graph.contains_node(node) {
                if let Some(&clique) = self.compiled.node_to_clique.get(&node) {
                    cliques.push(clique);
                }
            }
        }
        cliques.extend(self.compiled.joint_target_to_clique.values().copied());

        let bn: &dyn BayesNetView = self.bn;
        for clique in cliques {
            self.compiled.collect(bn, &self.evidence, clique);
        }
        Ok(())
    }

    /// The posterior distribution of a single node given the entered
    /// evidence.
    pub fn posterior(&mut self, node: NodeId) -> Result<Potential, InferenceError> {
        if !self.bn.contains_node(node) {
            return Err(InferenceError::UnknownNode { node });
        }
        // a hard-observed node has the indicator as its posterior
        if let Some(EvidenceEntry::Hard { indicator, .. }) = self.evidence.entry(node) {
            return Ok(indicator.clone());
        }
        // querying a node makes it a target, so barren pruning and
        // rebuild detection account for it
        self.targets.add_single(node);
        self.prepare()?;

        if let Some(cached) = self.compiled.posterior_cache.get(&node) {
            return Ok(cached.clone());
        }

        let mut posterior = self.unnormalized_posterior(node)?;
        posterior.normalize()?;
        self.compiled.posterior_cache.insert(node, posterior.clone());
        Ok(posterior)
    }

    /// The joint posterior over a set of nodes.
    ///
    /// The set must be a declared joint target, a subset of one, or
    /// coverable by the clique created when its first-eliminated
    /// member was removed; anything else fails with
    /// `UndefinedTarget`. No clique is ever synthesised for a query.
    pub fn joint_posterior(&mut self, target: &NodeSet) -> Result<Potential, InferenceError> {
        if target.is_empty() {
            return Err(crate::errors::TargetError::EmptyJointTarget.into());
        }
        for &node in target {
            if !self.bn.contains_node(node) {
                return Err(InferenceError::UnknownNode { node });
            }
        }
        if target.len() == 1 {
            if let Some(&node) = target.iter().next() {
                return self.posterior(node);
            }
        }
        self.prepare()?;

        if let Some(cached) = self.compiled.joint_posterior_cache.get(target) {
            return Ok(cached.clone());
        }

        // a strict subset of a declared joint target marginalises
        // from the declared one
        if !self.targets.is_joint_target(target) {
            if let Some(superset) = self.targets.joint_superset(target).cloned() {
                if superset != *target {
                    let declared = self.joint_posterior(&superset)?;
                    let marginal = declared.project_to(target);
                    // bind the subset to the declared clique so cache
                    // eviction reaches it
                    if let Some(&clique) = self.compiled.joint_target_to_clique.get(&superset) {
                        self.compiled
                            .joint_target_to_clique
                            .insert(target.clone(), clique);
                    }
                    self.compiled
                        .joint_posterior_cache
                        .insert(target.clone(), marginal.clone());
                    return Ok(marginal);
                }
            }
        }

        let mut posterior = self.unnormalized_joint_posterior(target)?;
        posterior.normalize()?;
        self.compiled
            .joint_posterior_cache
            .insert(target.clone(), posterior.clone());
        Ok(posterior)
    }

    /// The probability of the entered evidence, multiplied across the
    /// tree's connected components and the projected constants.
    pub fn evidence_probability(&mut self) -> Result<ProbabilityValue, InferenceError> {
        self.prepare()?;

        let mut probability = 1.0;
        let roots = self.compiled.roots.clone();
        let bn: &dyn BayesNetView = self.bn;
        for root in roots {
            let node = match self.compiled.tree.clique(root).and_then(|c| c.iter().next()) {
                Some(&node) => node,
                None => continue,
            };
            let clique = match self.compiled.node_to_clique.get(&node) {
                Some(&clique) => clique,
                None => continue,
            };
            self.compiled.collect(bn, &self.evidence, clique);
            let keep = NodeSet::from([node]);
            let joint = self.compiled.clique_joint(bn, &self.evidence, clique, &keep);
            probability *= joint.sum();
        }
        for value in self.compiled.constants.values() {
            probability *= value;
        }
        Ok(probability)
    }

    /// The posterior of `target` as a function of every joint
    /// assignment of `conditioning`, computed on a fresh engine over
    /// the same network with no evidence entered.
    pub fn evidence_impact(
        &mut self,
        target: NodeId,
        conditioning: &NodeSet,
    ) -> Result<Potential, InferenceError> {
        if conditioning.contains(&target) {
            return Err(InferenceError::InvalidArgument(
                "the target of evidence_impact must not belong to the conditioning set".into(),
            ));
        }
        if !self.bn.contains_node(target) {
            return Err(InferenceError::UnknownNode { node: target });
        }
        for &node in conditioning {
            if !self.bn.contains_node(node) {
                return Err(InferenceError::UnknownNode { node });
            }
        }

        let mut union = conditioning.clone();
        union.insert(target);

        let mut inner = ShaferShenoy::new(self.bn);
        inner.set_barren_nodes(self.barren_nodes);
        inner.set_binary_join_tree(self.binary_join_tree);
        inner.add_joint_target(union.clone())?;
        let joint = inner.joint_posterior(&union)?;

        // renormalise each conditioning slice to a distribution over
        // the target
        let marginal = joint.project_out(&NodeSet::from([target]));
        Ok(joint.divide(&marginal)?)
    }

    // ------------------------------------------------------------------
    // internals
    // ------------------------------------------------------------------

    /// P(node, evidence) up to the component constant: the clique
    /// factor of the node's clique combined with all incoming
    /// messages, projected onto the node.
    fn unnormalized_posterior(&mut self, node: NodeId) -> Result<Potential, InferenceError> {
        let clique = *self
            .compiled
            .node_to_clique
            .get(&node)
            .ok_or_else(|| InferenceError::UndefinedTarget(vec![node]))?;
        let bn: &dyn BayesNetView = self.bn;
        self.compiled.collect(bn, &self.evidence, clique);
        let keep = NodeSet::from([node]);
        let joint = self.compiled.clique_joint(bn, &self.evidence, clique, &keep);
        if joint.is_all_zeros() {
            return Err(InferenceError::IncompatibleEvidence);
        }
        Ok(joint)
    }

    fn unnormalized_joint_posterior(
        &mut self,
        target: &NodeSet,
    ) -> Result<Potential, InferenceError> {
        let hard_ev = self.evidence.hard_nodes();
        let reduced: NodeSet = target.difference(&hard_ev).copied().collect();

        // a fully observed set is the product of its indicators
        if reduced.is_empty() {
            let mut pots: Vec<&Potential> = Vec::new();
            for &node in target {
                match self.evidence.potential(node) {
                    Some(indicator) => pots.push(indicator),
                    None => return Err(InferenceError::UndefinedTarget(vec![node])),
                }
            }
            return Ok(combine_and_project(&pots, &NodeSet::new()));
        }

        let clique = self.resolve_joint_clique(target, &reduced)?;
        let bn: &dyn BayesNetView = self.bn;
        self.compiled.collect(bn, &self.evidence, clique);
        let mut joint = self
            .compiled
            .clique_joint(bn, &self.evidence, clique, &reduced);

        // fold the indicators of the observed members back in
        for node in target.intersection(&hard_ev) {
            if let Some(indicator) = self.evidence.potential(*node) {
                joint = joint.combine(indicator);
            }
        }

        if joint.is_all_zeros() {
            return Err(InferenceError::IncompatibleEvidence);
        }
        Ok(joint)
    }

    /// The clique a joint query projects from.
    ///
    /// Declared targets may use any covering clique; undeclared sets
    /// are bound to the clique created by their first-eliminated
    /// member and fail when it does not contain them.
    fn resolve_joint_clique(
        &mut self,
        target: &NodeSet,
        reduced: &NodeSet,
    ) -> Result<CliqueId, InferenceError> {
        if let Some(&clique) = self.compiled.joint_target_to_clique.get(target) {
            return Ok(clique);
        }

        if self.targets.is_joint_target(target) {
            return match self.compiled.tree.find_clique_containing(reduced) {
                Some(clique) => {
                    self.compiled
                        .joint_target_to_clique
                        .insert(target.clone(), clique);
                    Ok(clique)
                }
                None => Err(InferenceError::UndefinedTarget(
                    target.iter().copied().collect(),
                )),
            };
        }

        for &node in reduced {
            if !self.compiled.graph.contains_node(node) {
                return Err(InferenceError::UndefinedTarget(
                    target.iter().copied().collect(),
                ));
            }
        }
        let first = reduced
            .iter()
            .copied()
            .min_by_key(|node| self.compiled.elim_position.get(node).copied())
            .ok_or_else(|| InferenceError::UndefinedTarget(target.iter().copied().collect()))?;
        let clique = self
            .compiled
            .created_clique
            .get(&first)
            .copied()
            .ok_or_else(|| InferenceError::UndefinedTarget(target.iter().copied().collect()))?;
        let covered = self
            .compiled
            .tree
            .clique(clique)
            .is_some_and(|nodes| reduced.is_subset(nodes));
        if !covered {
            return Err(InferenceError::UndefinedTarget(
                target.iter().copied().collect(),
            ));
        }
        self.compiled
            .joint_target_to_clique
            .insert(target.clone(), clique);
        Ok(clique)
    }
}
