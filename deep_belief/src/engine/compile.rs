/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::{BTreeMap, BTreeSet};

use deep_belief_graph::{DagView, MoralGraph};
use deep_belief_tensor::{combine_and_project, Potential};

use crate::alias::{CliqueId, DomainSizes, NodeId, NodeSet};
use crate::engine::{CompiledTree, FactorRef, Message, ShaferShenoy};
use crate::errors::InferenceError;
use crate::traits::bayes_net_view::BayesNetView;
use crate::triangulation::binary_tree_converter::BinaryTreeConverter;
use crate::types::schedule::change_log::EvidenceChange;

impl<'a, B: BayesNetView> ShaferShenoy<'a, B> {
    /// Brings the compiled tree up to date: full recompilation when
    /// the structure changed, incremental maintenance when only
    /// evidence values did.
    pub(crate) fn prepare(&mut self) -> Result<(), InferenceError> {
        if self.is_new_jt_needed() {
            self.create_new_jt()?;
        } else if !self.change_log.is_empty() {
            self.update_outdated_potentials()?;
        }
        Ok(())
    }

    /// Whether the current junction tree can serve the next query.
    pub(crate) fn is_new_jt_needed(&self) -> bool {
        if !self.has_tree || self.change_log.is_structure_dirty() {
            return true;
        }

        // targets that fell out of the compiled graph (e.g. pruned as
        // barren before they became targets) force a rebuild; hard-
        // evidence nodes never belong to the graph
        let hard_ev = self.evidence.hard_nodes();
        for &node in self.targets.singles() {
            if !self.compiled.graph.contains_node(node) && !hard_ev.contains(&node) {
                return true;
            }
        }

        for joint in self.targets.joints() {
            if self.compiled.joint_target_to_clique.contains_key(joint) {
                continue;
            }
            let reduced: NodeSet = joint.difference(&hard_ev).copied().collect();
            if reduced.is_empty() {
                continue;
            }
            if reduced
                .iter()
                .any(|node| !self.compiled.graph.contains_node(*node))
            {
                return true;
            }
            if self.compiled.tree.find_clique_containing(&reduced).is_none() {
                return true;
            }
        }

        // new soft evidence on a node outside the compiled graph
        for (node, change) in self.change_log.changed_nodes() {
            if change == EvidenceChange::Added && !self.compiled.graph.contains_node(node) {
                return true;
            }
        }

        false
    }

    /// Full compilation: moralise, prune, triangulate, place factors,
    /// reset messages and caches.
    pub(crate) fn create_new_jt(&mut self) -> Result<(), InferenceError> {
        let nodes = self.bn.nodes();

        // directed view, needed for moralisation and barren analysis
        let mut dag = DagView::new();
        for &node in &nodes {
            dag.add_node(node);
        }
        for &node in &nodes {
            for parent in self.bn.parents(node) {
                dag.add_arc(parent, node)?;
            }
        }

        // 1. undirected graph over the network's nodes, no edges yet
        let mut graph = MoralGraph::new();
        for &node in &nodes {
            graph.add_node(node);
        }

        // 2. drop barren nodes: non-target non-evidence nodes whose
        // descendants are neither targets nor evidence. They factor
        // out to one and cannot influence any remaining posterior.
        if self.barren_nodes {
            let mut seeds = self.targets.all_target_nodes();
            seeds.extend(self.evidence.nodes());
            if seeds.len() != nodes.len() {
                let relevant = dag.ancestors_or_self(&seeds);
                for &node in &nodes {
                    if !relevant.contains(&node) {
                        graph.remove_node(node);
                    }
                }
            }
        }

        // 3. moralisation: each node forms a clique with its parents
        for node in graph.nodes() {
            let parents: Vec<NodeId> = dag
                .parents(node)
                .into_iter()
                .filter(|parent| graph.contains_node(*parent))
                .collect();
            for (i, &parent) in parents.iter().enumerate() {
                graph.add_edge(parent, node)?;
                for &other in &parents[i + 1..] {
                    graph.add_edge(parent, other)?;
                }
            }
        }

        // 4. each joint target must end up inside one clique
        for joint in self.targets.joints() {
            let members: Vec<NodeId> = joint
                .iter()
                .copied()
                .filter(|node| graph.contains_node(*node))
                .collect();
            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    graph.add_edge(a, b)?;
                }
            }
        }

        // 5. hard-evidence nodes leave the graph after moralisation,
        // so their parents stay connected
        let hard_ev = self.evidence.hard_nodes();
        for &node in &hard_ev {
            graph.remove_node(node);
        }

        // 6. triangulate the reduced moral graph
        let domains: DomainSizes = graph
            .nodes()
            .into_iter()
            .map(|node| (node, self.bn.domain_size(node)))
            .collect();
        self.triangulation.triangulate(&graph, &domains);
        let mut tree = self.triangulation.junction_tree().clone();
        let elim_position: BTreeMap<NodeId, usize> = self
            .triangulation
            .elimination_order()
            .iter()
            .enumerate()
            .map(|(i, node)| (*node, i))
            .collect();
        let created_clique: BTreeMap<NodeId, CliqueId> = graph
            .nodes()
            .into_iter()
            .filter_map(|node| self.triangulation.created_clique(node).map(|c| (node, c)))
            .collect();

        // 7. optionally bound the distribute cost
        if self.binary_join_tree {
            BinaryTreeConverter::new().convert(&mut tree);
        }

        // 8. assign each node the clique created when the first
        // eliminated member of {node} ∪ parents was removed; that
        // clique holds the node and its surviving parents
        let mut node_to_clique: BTreeMap<NodeId, CliqueId> = BTreeMap::new();
        for node in graph.nodes() {
            let mut first = node;
            let mut first_pos = elim_position[&node];
            for parent in dag.parents(node) {
                if graph.contains_node(parent) && elim_position[&parent] < first_pos {
                    first_pos = elim_position[&parent];
                    first = parent;
                }
            }
            if let Some(&clique) = created_clique.get(&first) {
                node_to_clique.insert(node, clique);
            }
        }
        // hard-evidence nodes with surviving parents still need a
        // clique for their projected table
        for &node in &hard_ev {
            let parents: Vec<NodeId> = dag
                .parents(node)
                .into_iter()
                .filter(|parent| graph.contains_node(*parent))
                .collect();
            let first = parents.iter().copied().min_by_key(|p| elim_position[p]);
            if let Some(first) = first {
                if let Some(&clique) = created_clique.get(&first) {
                    node_to_clique.insert(node, clique);
                }
            }
        }

        // 9. same first-eliminated rule for the declared joint targets
        let mut joint_target_to_clique: BTreeMap<NodeSet, CliqueId> = BTreeMap::new();
        for joint in self.targets.joints() {
            let reduced: NodeSet = joint.difference(&hard_ev).copied().collect();
            let first = reduced
                .iter()
                .copied()
                .filter(|node| elim_position.contains_key(node))
                .min_by_key(|node| elim_position[node]);
            if let Some(first) = first {
                if let Some(&clique) = created_clique.get(&first) {
                    joint_target_to_clique.insert(joint.clone(), clique);
                }
            }
        }

        // 10. place the tables: untouched where possible, projected
        // when hard evidence cuts into them, a plain constant when
        // hard evidence covers them entirely
        let mut clique_factors: BTreeMap<CliqueId, Vec<FactorRef>> = BTreeMap::new();
        let mut projected_cpts: BTreeMap<NodeId, Potential> = BTreeMap::new();
        let mut constants: BTreeMap<NodeId, f64> = BTreeMap::new();
        for &node in &nodes {
            if !graph.contains_node(node) && !hard_ev.contains(&node) {
                continue;
            }
            let cpt = self
                .bn
                .cpt(node)
                .ok_or(InferenceError::UnknownNode { node })?;
            let hard_in_cpt: NodeSet = cpt
                .variable_ids()
                .filter(|id| hard_ev.contains(id))
                .collect();

            if hard_in_cpt.is_empty() {
                if let Some(&clique) = node_to_clique.get(&node) {
                    clique_factors.entry(clique).or_default().push(FactorRef::Cpt(node));
                }
            } else if hard_in_cpt.len() == cpt.rank() {
                let instantiation: Vec<usize> = cpt
                    .vars()
                    .iter()
                    .map(|v| self.evidence.hard_label(v.id()).unwrap_or(0))
                    .collect();
                let value = cpt.get(&instantiation).unwrap_or(0.0);
                constants.insert(node, value);
            } else {
                let mut pots: Vec<&Potential> = vec![cpt];
                for &hard_node in &hard_in_cpt {
                    if let Some(indicator) = self.evidence.potential(hard_node) {
                        pots.push(indicator);
                    }
                }
                let projected = combine_and_project(&pots, &hard_in_cpt);
                projected_cpts.insert(node, projected);
                if let Some(&clique) = node_to_clique.get(&node) {
                    clique_factors
                        .entry(clique)
                        .or_default()
                        .push(FactorRef::ProjectedCpt(node));
                }
            }
        }
        for node in self.evidence.soft_nodes() {
            if let Some(&clique) = node_to_clique.get(&node) {
                clique_factors
                    .entry(clique)
                    .or_default()
                    .push(FactorRef::SoftEvidence(node));
            }
        }

        // 12/13. fresh message store, empty caches
        let mut messages: BTreeMap<(CliqueId, CliqueId), Message> = BTreeMap::new();
        for (a, b) in tree.edges() {
            messages.insert((a, b), Message::default());
            messages.insert((b, a), Message::default());
        }

        self.compiled = CompiledTree {
            graph,
            tree,
            elim_position,
            created_clique,
            node_to_clique,
            joint_target_to_clique,
            hard_ev_nodes: hard_ev,
            clique_factors,
            projected_cpts,
            combined_factors: BTreeMap::new(),
            constants,
            roots: Vec::new(),
            messages,
            posterior_cache: BTreeMap::new(),
            joint_posterior_cache: BTreeMap::new(),
        };
        self.has_tree = true;

        // 11. combine each clique's factor list into Φ(C)
        let bn: &dyn BayesNetView = self.bn;
        let cliques: Vec<CliqueId> = self.compiled.clique_factors.keys().copied().collect();
        for clique in cliques {
            self.compiled.recombine(bn, &self.evidence, clique);
        }

        self.compute_roots();
        self.change_log.clear();
        Ok(())
    }

    /// One root per connected component, preferring the lightest
    /// clique that answers a declared target.
    fn compute_roots(&mut self) {
        let weight = |tree: &deep_belief_graph::CliqueGraph, clique: CliqueId| -> f64 {
            tree.clique(clique).map_or(1.0, |nodes| {
                nodes
                    .iter()
                    .map(|n| self.bn.domain_size(*n) as f64)
                    .product()
            })
        };

        let tree = &self.compiled.tree;
        let mut target_cliques: BTreeSet<CliqueId> = BTreeSet::new();
        for &node in self.targets.singles() {
            if let Some(&clique) = self.compiled.node_to_clique.get(&node) {
                if self.compiled.graph.contains_node(node) {
                    target_cliques.insert(clique);
                }
            }
        }
        for clique in self.compiled.joint_target_to_clique.values() {
            target_cliques.insert(*clique);
        }

        let mut candidates: Vec<CliqueId> = target_cliques.iter().copied().collect();
        candidates.sort_by(|a, b| {
            weight(tree, *a)
                .partial_cmp(&weight(tree, *b))
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(b))
        });
        // remaining cliques guarantee a root in components without
        // any target, which evidence_probability relies on
        let mut rest: Vec<CliqueId> = tree
            .clique_ids()
            .into_iter()
            .filter(|c| !target_cliques.contains(c))
            .collect();
        rest.sort_by(|a, b| {
            weight(tree, *a)
                .partial_cmp(&weight(tree, *b))
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(b))
        });
        candidates.extend(rest);

        let mut marked: BTreeSet<CliqueId> = BTreeSet::new();
        let mut roots = Vec::new();
        for candidate in candidates {
            if marked.contains(&candidate) {
                continue;
            }
            roots.push(candidate);
            let mut stack = vec![candidate];
            while let Some(clique) = stack.pop() {
                if marked.insert(clique) {
                    stack.extend(self.compiled.tree.neighbours(clique));
                }
            }
        }
        self.compiled.roots = roots;
    }

    /// Incremental maintenance when the structure is intact: refresh
    /// projections hit by changed hard values, invalidate downstream
    /// messages, recombine touched cliques, evict stale posteriors.
    pub(crate) fn update_outdated_potentials(&mut self) -> Result<(), InferenceError> {
        let hard_changed: NodeSet = self
            .compiled
            .hard_ev_nodes
            .iter()
            .copied()
            .filter(|node| self.change_log.contains(*node))
            .collect();

        // projected tables whose hard parents changed value
        let mut projections_changed: NodeSet = NodeSet::new();
        for &node in self.compiled.projected_cpts.keys() {
            let cpt = self
                .bn
                .cpt(node)
                .ok_or(InferenceError::UnknownNode { node })?;
            if cpt.variable_ids().any(|id| hard_changed.contains(&id)) {
                projections_changed.insert(node);
            }
        }

        // message invalidation spreads outward from every touched
        // clique
        let mut seeds: Vec<CliqueId> = Vec::new();
        for (node, _) in self.change_log.changed_nodes() {
            if let Some(&clique) = self.compiled.node_to_clique.get(&node) {
                seeds.push(clique);
            }
        }
        for &node in &projections_changed {
            if let Some(&clique) = self.compiled.node_to_clique.get(&node) {
                seeds.push(clique);
            }
        }
        let mut invalidated: BTreeSet<CliqueId> = BTreeSet::new();
        for seed in seeds {
            invalidated.insert(seed);
            for neighbour in self.compiled.tree.neighbours(seed) {
                self.compiled
                    .diffuse_invalidations(seed, neighbour, &mut invalidated);
            }
        }

        // recompute the affected projections against the new values
        for &node in &projections_changed {
            let cpt = self
                .bn
                .cpt(node)
                .ok_or(InferenceError::UnknownNode { node })?;
            let hard_in_cpt: NodeSet = cpt
                .variable_ids()
                .filter(|id| self.compiled.hard_ev_nodes.contains(id))
                .collect();
            let mut pots: Vec<&Potential> = vec![cpt];
            for &hard_node in &hard_in_cpt {
                if let Some(indicator) = self.evidence.potential(hard_node) {
                    pots.push(indicator);
                }
            }
            let projected = combine_and_project(&pots, &hard_in_cpt);
            self.compiled.projected_cpts.insert(node, projected);
        }

        // refresh the soft-evidence entries of the factor lists
        for list in self.compiled.clique_factors.values_mut() {
            list.retain(|factor| !matches!(factor, FactorRef::SoftEvidence(_)));
        }
        for node in self.evidence.soft_nodes() {
            if let Some(&clique) = self.compiled.node_to_clique.get(&node) {
                self.compiled
                    .clique_factors
                    .entry(clique)
                    .or_default()
                    .push(FactorRef::SoftEvidence(node));
            }
        }

        // recombine Φ for every invalidated clique
        let bn: &dyn BayesNetView = self.bn;
        for &clique in &invalidated {
            self.compiled.recombine(bn, &self.evidence, clique);
        }

        // evict posteriors that can no longer be served
        let node_to_clique = &self.compiled.node_to_clique;
        let graph = &self.compiled.graph;
        self.compiled.posterior_cache.retain(|node, _| {
            let clique_invalidated = graph.contains_node(*node)
                && node_to_clique
                    .get(node)
                    .is_some_and(|clique| invalidated.contains(clique));
            !clique_invalidated && !hard_changed.contains(node)
        });
        let joint_target_to_clique = &self.compiled.joint_target_to_clique;
        self.compiled.joint_posterior_cache.retain(|target, _| {
            let clique_invalidated = joint_target_to_clique
                .get(target)
                .is_some_and(|clique| invalidated.contains(clique));
            let hard_member_changed = target.iter().any(|node| hard_changed.contains(node));
            !clique_invalidated && !hard_member_changed
        });

        // constants follow the current hard values
        let mut constants = std::mem::take(&mut self.compiled.constants);
        for (node, value) in constants.iter_mut() {
            let cpt = self
                .bn
                .cpt(*node)
                .ok_or(InferenceError::UnknownNode { node: *node })?;
            let instantiation: Vec<usize> = cpt
                .vars()
                .iter()
                .map(|v| self.evidence.hard_label(v.id()).unwrap_or(0))
                .collect();
            *value = cpt.get(&instantiation).unwrap_or(0.0);
        }
        self.compiled.constants = constants;

        self.change_log.clear();
        Ok(())
    }
}
