/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use deep_belief_tensor::{combine_and_project, Potential};

use crate::alias::{CliqueId, NodeSet};
use crate::engine::CompiledTree;
use crate::traits::bayes_net_view::BayesNetView;
use crate::types::evidence::evidence_store::EvidenceStore;

impl CompiledTree {
    /// Collect phase toward `root`: computes every missing message on
    /// the arcs pointing at `root` in the tree rooted there.
    ///
    /// Iterative post-order over the rooted tree; junction trees can
    /// be deep, so no recursion.
    pub(crate) fn collect(
        &mut self,
        bn: &dyn BayesNetView,
        evidence: &EvidenceStore,
        root: CliqueId,
    ) {
        let mut stack: Vec<(CliqueId, CliqueId, bool)> = vec![(root, root, false)];
        while let Some((clique, parent, expanded)) = stack.pop() {
            if expanded {
                if clique != parent && !self.is_message_computed(clique, parent) {
                    self.produce_message(bn, evidence, clique, parent);
                }
            } else {
                stack.push((clique, parent, true));
                for neighbour in self.tree.neighbours(clique) {
                    if neighbour != parent && !self.is_message_computed(neighbour, clique) {
                        stack.push((neighbour, clique, false));
                    }
                }
            }
        }
    }

    /// Combines Φ(from) with every message entering `from` except the
    /// one from `to`, projects onto the separator and stores the
    /// result on the arc (from, to).
    pub(crate) fn produce_message(
        &mut self,
        bn: &dyn BayesNetView,
        evidence: &EvidenceStore,
        from: CliqueId,
        to: CliqueId,
    ) {
        let message = {
            let clique_vars = match self.tree.clique(from) {
                Some(vars) => vars.clone(),
                None => return,
            };
            let separator = self.tree.separator(from, to).unwrap_or_default();
            let del_vars: NodeSet = clique_vars.difference(&separator).copied().collect();

            let mut pots: Vec<&Potential> = Vec::new();
            if let Some(phi) = self.clique_phi(bn, evidence, from) {
                pots.push(phi);
            }
            for neighbour in self.tree.neighbours(from) {
                if neighbour == to {
                    continue;
                }
                if let Some(tensor) = self
                    .messages
                    .get(&(neighbour, from))
                    .and_then(|m| m.tensor.as_ref())
                {
                    pots.push(tensor);
                }
            }

            combine_and_project(&pots, &del_vars)
        };

        // unit messages carry no information
        let keep = !(message.rank() <= 1 && message.is_all_ones());
        if let Some(entry) = self.messages.get_mut(&(from, to)) {
            entry.computed = true;
            entry.tensor = keep.then_some(message);
        }
    }

    /// ψ(clique) projected onto `keep`: the combination of Φ(clique)
    /// with every incoming message, summed down to the kept
    /// variables. Callers must have collected toward `clique` first.
    pub(crate) fn clique_joint(
        &self,
        bn: &dyn BayesNetView,
        evidence: &EvidenceStore,
        clique: CliqueId,
        keep: &NodeSet,
    ) -> Potential {
        let clique_vars = match self.tree.clique(clique) {
            Some(vars) => vars.clone(),
            None => return Potential::scalar(1.0),
        };
        let del_vars: NodeSet = clique_vars.difference(keep).copied().collect();

        let mut pots: Vec<&Potential> = Vec::new();
        if let Some(phi) = self.clique_phi(bn, evidence, clique) {
            pots.push(phi);
        }
        for neighbour in self.tree.neighbours(clique) {
            if let Some(tensor) = self
                .messages
                .get(&(neighbour, clique))
                .and_then(|m| m.tensor.as_ref())
            {
                pots.push(tensor);
            }
        }

        combine_and_project(&pots, &del_vars)
    }
}
