/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

// Potential types
pub use crate::errors::PotentialError;
pub use crate::types::discrete_variable::DiscreteVariable;
pub use crate::types::discrete_variable::NodeId;
pub use crate::types::discrete_variable::VariableRef;
pub use crate::types::potential::combine_and_project::combine_and_project;
pub use crate::types::potential::Potential;
