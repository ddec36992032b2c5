/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::fmt;
use std::sync::Arc;

use crate::errors::PotentialError;

/// Identifier of a node in a Bayesian network.
pub type NodeId = usize;

/// Shared handle to a variable descriptor.
///
/// Potentials clone handles, never descriptors; the descriptors live
/// once with the network that declared them.
pub type VariableRef = Arc<DiscreteVariable>;

/// A discrete random variable: an id, a human-readable name, and a
/// finite, ordered set of labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscreteVariable {
    id: NodeId,
    name: String,
    labels: Vec<String>,
}

impl DiscreteVariable {
    pub fn new(
        id: NodeId,
        name: impl Into<String>,
        labels: Vec<String>,
    ) -> Result<Self, PotentialError> {
        if labels.is_empty() {
            return Err(PotentialError::EmptyDomain);
        }
        Ok(Self {
            id,
            name: name.into(),
            labels,
        })
    }

    /// Builds a binary variable labelled `0` / `1`.
    pub fn binary(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            labels: vec!["0".to_string(), "1".to_string()],
        }
    }

    /// Builds a variable with `domain_size` numeric labels `0..domain_size`.
    pub fn with_domain(
        id: NodeId,
        name: impl Into<String>,
        domain_size: usize,
    ) -> Result<Self, PotentialError> {
        if domain_size == 0 {
            return Err(PotentialError::EmptyDomain);
        }
        Ok(Self {
            id,
            name: name.into(),
            labels: (0..domain_size).map(|i| i.to_string()).collect(),
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn domain_size(&self) -> usize {
        self.labels.len()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

impl fmt::Display for DiscreteVariable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DiscreteVariable: id: {}, name: {}, domain size: {}",
            self.id,
            self.name,
            self.domain_size()
        )
    }
}
