/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::error::Error;
use std::fmt;

use deep_belief_graph::GraphError;
use deep_belief_tensor::PotentialError;

use crate::alias::NodeId;
use crate::errors::{EvidenceError, TargetError};

#[derive(Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// The joint probability of the entered evidence is zero.
    IncompatibleEvidence,
    /// The queried set is neither a declared joint target nor covered
    /// by any clique of the compiled tree.
    UndefinedTarget(Vec<NodeId>),
    /// Normalisation of an all-zero tensor outside the
    /// evidence-probability check.
    Degenerate,
    /// A malformed argument, e.g. an `evidence_impact` call whose
    /// target and conditioning set overlap.
    InvalidArgument(String),
    /// The node id is not part of the Bayesian network.
    UnknownNode { node: NodeId },
    Evidence(EvidenceError),
    Target(TargetError),
}

impl Error for InferenceError {}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InferenceError::IncompatibleEvidence => {
                write!(
                    f,
                    "The entered evidence is incompatible: its joint probability is zero"
                )
            }
            InferenceError::UndefinedTarget(nodes) => {
                write!(
                    f,
                    "The set {nodes:?} is neither a declared joint target nor covered by any clique"
                )
            }
            InferenceError::Degenerate => {
                write!(f, "Normalization of an all-zero posterior")
            }
            InferenceError::InvalidArgument(msg) => {
                write!(f, "Invalid argument: {msg}")
            }
            InferenceError::UnknownNode { node } => {
                write!(f, "Node {node} is not part of the Bayesian network")
            }
            InferenceError::Evidence(err) => write!(f, "{err}"),
            InferenceError::Target(err) => write!(f, "{err}"),
        }
    }
}

impl From<EvidenceError> for InferenceError {
    fn from(err: EvidenceError) -> Self {
        InferenceError::Evidence(err)
    }
}

impl From<TargetError> for InferenceError {
    fn from(err: TargetError) -> Self {
        InferenceError::Target(err)
    }
}

impl From<PotentialError> for InferenceError {
    fn from(err: PotentialError) -> Self {
        match err {
            PotentialError::Degenerate => InferenceError::Degenerate,
            other => InferenceError::InvalidArgument(other.to_string()),
        }
    }
}

impl From<GraphError> for InferenceError {
    fn from(err: GraphError) -> Self {
        InferenceError::InvalidArgument(err.to_string())
    }
}
