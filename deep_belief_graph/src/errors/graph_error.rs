/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::error::Error;
use std::fmt;

use crate::types::clique_graph::CliqueId;
use crate::types::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    NodeNotFound(NodeId),
    CliqueNotFound(CliqueId),
    EdgeCreationError { source: NodeId, target: NodeId },
    EdgeNotFound { source: NodeId, target: NodeId },
}

impl Error for GraphError {}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphError::NodeNotFound(id) => {
                write!(
                    f,
                    "Node with id {id} not found; it may have been removed from the graph."
                )
            }
            GraphError::CliqueNotFound(id) => {
                write!(
                    f,
                    "Clique with id {id} not found; it may have been absorbed or removed."
                )
            }
            GraphError::EdgeCreationError { source, target } => {
                write!(
                    f,
                    "Edge from {source} to {target} could not be created; a node may not exist."
                )
            }
            GraphError::EdgeNotFound { source, target } => {
                write!(f, "Edge from {source} to {target} not found.")
            }
        }
    }
}
