/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

// Aliases
pub use crate::alias::*;
// Engine
pub use crate::engine::ShaferShenoy;
// Errors
pub use crate::errors::BayesNetError;
pub use crate::errors::EvidenceError;
pub use crate::errors::InferenceError;
pub use crate::errors::TargetError;
// Traits
pub use crate::traits::bayes_net_view::BayesNetView;
pub use crate::traits::triangulation::Triangulation;
// Triangulation strategies
pub use crate::triangulation::binary_tree_converter::BinaryTreeConverter;
pub use crate::triangulation::min_weight_triangulation::MinWeightTriangulation;
// Types
pub use crate::types::bayes_net::BayesNet;
pub use crate::types::evidence::evidence_entry::EvidenceEntry;
pub use crate::types::evidence::evidence_store::EvidenceStore;
pub use crate::types::schedule::change_log::ChangeLog;
pub use crate::types::schedule::change_log::EvidenceChange;
pub use crate::types::targets::target_registry::TargetRegistry;
// Re-exports from the member crates
pub use deep_belief_graph::prelude::{CliqueGraph, DagView, GraphError, MoralGraph};
pub use deep_belief_tensor::prelude::{
    combine_and_project, DiscreteVariable, Potential, PotentialError, VariableRef,
};
