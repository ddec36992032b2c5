/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::error::Error;
use std::fmt;

use deep_belief_tensor::PotentialError;

use crate::alias::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BayesNetError {
    UnknownNode { node: NodeId },
    MissingCpt { node: NodeId },
    InvalidCpt { node: NodeId },
    ArcCreatesNothing { parent: NodeId, child: NodeId },
    InvalidVariable(PotentialError),
}

impl Error for BayesNetError {}

impl fmt::Display for BayesNetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BayesNetError::UnknownNode { node } => {
                write!(f, "Node {node} is not part of the Bayesian network")
            }
            BayesNetError::MissingCpt { node } => {
                write!(f, "Node {node} has no conditional probability table")
            }
            BayesNetError::InvalidCpt { node } => {
                write!(
                    f,
                    "The conditional probability table of node {node} does not match its parent set"
                )
            }
            BayesNetError::ArcCreatesNothing { parent, child } => {
                write!(f, "Arc from {parent} to {child} could not be created")
            }
            BayesNetError::InvalidVariable(err) => {
                write!(f, "Invalid variable: {err}")
            }
        }
    }
}

impl From<PotentialError> for BayesNetError {
    fn from(err: PotentialError) -> Self {
        BayesNetError::InvalidVariable(err)
    }
}
