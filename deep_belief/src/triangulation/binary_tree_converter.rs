/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use deep_belief_graph::CliqueGraph;

use crate::alias::CliqueId;

/// Rewrites a junction tree so that no clique keeps a degree above
/// three, by chaining pseudo-cliques off high-degree cliques.
///
/// A pseudo-clique duplicates the variable set of its host, so every
/// separator stays exact and message semantics are unchanged; the
/// rewrite trades a small collect overhead for a lower worst-case
/// distribute cost. Factor placement is unaffected because pseudo-
/// cliques receive no factors.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryTreeConverter;

impl BinaryTreeConverter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the ids of the pseudo-cliques it introduced.
    pub fn convert(&self, tree: &mut CliqueGraph) -> Vec<CliqueId> {
        let mut created = Vec::new();
        let mut pending: Vec<CliqueId> = tree.clique_ids();

        while let Some(clique) = pending.pop() {
            if !tree.contains_clique(clique) || tree.degree(clique) <= 3 {
                continue;
            }

            let nodes = match tree.clique(clique) {
                Some(nodes) => nodes.clone(),
                None => continue,
            };
            let pseudo = tree.add_clique(nodes);
            created.push(pseudo);

            // move the two highest-numbered neighbours to the pseudo-
            // clique, then reattach it; the host loses one degree
            let neighbours = tree.neighbours(clique);
            for moved in neighbours.iter().rev().take(2) {
                let _ = tree.remove_edge(clique, *moved);
                let _ = tree.add_edge(pseudo, *moved);
            }
            let _ = tree.add_edge(clique, pseudo);

            // either endpoint may still exceed the bound
            pending.push(clique);
            pending.push(pseudo);
        }

        created
    }
}
