/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::{BTreeMap, BTreeSet};

/// Identifier of a node in a Bayesian network.
pub type NodeId = deep_belief_tensor::NodeId;

/// Identifier of a clique in a junction tree.
pub type CliqueId = deep_belief_graph::CliqueId;

/// Scalar probability type used throughout the engine.
pub type ProbabilityValue = f64;

/// An ordered set of node ids.
pub type NodeSet = BTreeSet<NodeId>;

/// Domain size per node id, consumed by triangulation strategies.
pub type DomainSizes = BTreeMap<NodeId, usize>;
