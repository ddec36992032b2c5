/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

// Graph types
pub use crate::errors::GraphError;
pub use crate::types::clique_graph::CliqueGraph;
pub use crate::types::clique_graph::CliqueId;
pub use crate::types::dag_view::DagView;
pub use crate::types::moral_graph::MoralGraph;
pub use crate::types::NodeId;
