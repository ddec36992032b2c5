/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

//! Discrete potential (factor) algebra.
//!
//! A [`Potential`](crate::Potential) is a dense table of non-negative
//! reals over an ordered sequence of discrete variables. It is the
//! single tensor type used by the junction-tree inference engine:
//! conditional probability tables, evidence indicators, separator
//! messages and posteriors are all potentials.

#![forbid(unsafe_code)]

pub mod errors;
pub mod prelude;
pub mod types;

pub use crate::errors::*;
pub use crate::types::discrete_variable::{DiscreteVariable, NodeId, VariableRef};
pub use crate::types::potential::combine_and_project::combine_and_project;
pub use crate::types::potential::Potential;
