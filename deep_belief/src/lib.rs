/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

//! Exact inference in discrete Bayesian networks.
//!
//! The engine compiles a network, the declared targets and the
//! entered evidence into a junction tree, runs Shafer-Shenoy message
//! passing over it, and answers marginal and joint posterior queries
//! from the collected messages. Between queries the compiled tree is
//! reused whenever targets and evidence permit; evidence edits that
//! keep the structure intact only invalidate the affected messages.
//!
//! ```
//! use deep_belief::prelude::*;
//!
//! let mut bn = BayesNet::new();
//! let a = bn.add_variable("a", 2).unwrap();
//! let b = bn.add_variable("b", 2).unwrap();
//! bn.add_arc(a, b).unwrap();
//! bn.set_cpt(a, vec![0.4, 0.6]).unwrap();
//! bn.set_cpt(b, vec![0.9, 0.1, 0.2, 0.8]).unwrap();
//!
//! let mut engine = ShaferShenoy::new(&bn);
//! engine.add_hard_evidence(b, 1).unwrap();
//! let posterior = engine.posterior(a).unwrap();
//! assert!((posterior.sum() - 1.0).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]

pub mod alias;
pub mod engine;
pub mod errors;
pub mod prelude;
pub mod traits;
pub mod triangulation;
pub mod types;
pub mod utils_test;

pub use crate::alias::*;
pub use crate::engine::ShaferShenoy;
pub use crate::errors::*;
pub use crate::traits::bayes_net_view::BayesNetView;
pub use crate::traits::triangulation::Triangulation;
pub use crate::triangulation::binary_tree_converter::BinaryTreeConverter;
pub use crate::triangulation::min_weight_triangulation::MinWeightTriangulation;
pub use crate::types::bayes_net::BayesNet;
pub use crate::types::evidence::evidence_entry::EvidenceEntry;
pub use crate::types::evidence::evidence_store::EvidenceStore;
pub use crate::types::schedule::change_log::{ChangeLog, EvidenceChange};
pub use crate::types::targets::target_registry::TargetRegistry;
