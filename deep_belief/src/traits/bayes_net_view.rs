/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use deep_belief_tensor::{Potential, VariableRef};

use crate::alias::{NodeId, NodeSet};

/// Read-only view of a discrete Bayesian network.
///
/// The inference engine borrows a view for its whole lifetime and
/// never mutates it. A caller that mutates the underlying network
/// must call [`set_outdated_structure`](crate::ShaferShenoy::set_outdated_structure)
/// on every engine borrowing it before the next query.
///
/// The conditional probability table of a node is a [`Potential`]
/// whose variable sequence is the node followed by its parents in a
/// network-defined order.
pub trait BayesNetView {
    /// Node ids in ascending order.
    fn nodes(&self) -> Vec<NodeId>;

    /// Parents of `node`; empty for roots and unknown ids.
    fn parents(&self, node: NodeId) -> NodeSet;

    /// The variable descriptor of `node`.
    fn variable(&self, node: NodeId) -> Option<&VariableRef>;

    /// The conditional probability table of `node`.
    fn cpt(&self, node: NodeId) -> Option<&Potential>;

    fn contains_node(&self, node: NodeId) -> bool {
        self.variable(node).is_some()
    }

    fn domain_size(&self, node: NodeId) -> usize {
        self.variable(node).map_or(0, |v| v.domain_size())
    }
}
