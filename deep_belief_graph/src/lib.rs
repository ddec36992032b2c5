/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

//! Graph views used by junction-tree compilation: a directed acyclic
//! view of the network, an undirected moral graph, and a clique graph
//! whose nodes carry node-id sets.
//!
//! All three views share one plain `usize` node-id namespace, so no
//! index translation layer sits between the network and the graphs.

#![forbid(unsafe_code)]

pub mod errors;
pub mod prelude;
pub mod types;

pub use crate::errors::*;
pub use crate::types::clique_graph::{CliqueGraph, CliqueId};
pub use crate::types::dag_view::DagView;
pub use crate::types::moral_graph::MoralGraph;
pub use crate::types::NodeId;
