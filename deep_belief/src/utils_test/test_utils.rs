/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

//! Shared fixtures for tests and benches: small reference networks
//! and a brute-force oracle to check the engine against.

use std::collections::BTreeSet;

use deep_belief_tensor::Potential;

use crate::alias::{NodeId, NodeSet};
use crate::traits::bayes_net_view::BayesNetView;
use crate::types::bayes_net::BayesNet;

/// The five-node chain-and-fork network:
///
/// ```text
///      a   b          a -> c, a -> d
///     / \ / \         c -> e, d -> e
///    c   d   |        b -> d, b -> e
///     \ / \ /
///      e ---
/// ```
///
/// All variables binary except `e`, which is ternary. Returns the
/// network and the node ids `(a, b, c, d, e)`.
pub fn get_five_node_bn() -> (BayesNet, [NodeId; 5]) {
    let mut bn = BayesNet::new();
    let a = bn.add_variable("a", 2).unwrap();
    let b = bn.add_variable("b", 2).unwrap();
    let c = bn.add_variable("c", 2).unwrap();
    let d = bn.add_variable("d", 2).unwrap();
    let e = bn.add_variable("e", 3).unwrap();

    bn.add_arc(a, c).unwrap();
    bn.add_arc(a, d).unwrap();
    bn.add_arc(c, e).unwrap();
    bn.add_arc(d, e).unwrap();
    bn.add_arc(b, d).unwrap();
    bn.add_arc(b, e).unwrap();

    bn.set_cpt(a, vec![0.2, 0.8]).unwrap();
    bn.set_cpt(b, vec![0.3, 0.7]).unwrap();
    // rows are parent instantiations in ascending-id, row-major order
    bn.set_cpt(c, vec![0.9, 0.1, 0.1, 0.9]).unwrap();
    bn.set_cpt(
        d,
        vec![
            0.4, 0.6, // a=0, b=0
            0.5, 0.5, // a=0, b=1
            0.5, 0.5, // a=1, b=0
            1.0, 0.0, // a=1, b=1
        ],
    )
    .unwrap();
    bn.set_cpt(
        e,
        vec![
            0.1, 0.2, 0.7, // b=0, c=0, d=0
            0.3, 0.3, 0.4, // b=0, c=0, d=1
            0.4, 0.4, 0.2, // b=0, c=1, d=0
            0.5, 0.25, 0.25, // b=0, c=1, d=1
            0.6, 0.1, 0.3, // b=1, c=0, d=0
            0.2, 0.5, 0.3, // b=1, c=0, d=1
            0.15, 0.15, 0.7, // b=1, c=1, d=0
            0.34, 0.33, 0.33, // b=1, c=1, d=1
        ],
    )
    .unwrap();

    (bn, [a, b, c, d, e])
}

/// A three-node chain a -> b -> c, all binary.
pub fn get_chain_bn() -> (BayesNet, [NodeId; 3]) {
    let mut bn = BayesNet::new();
    let a = bn.add_variable("a", 2).unwrap();
    let b = bn.add_variable("b", 2).unwrap();
    let c = bn.add_variable("c", 2).unwrap();
    bn.add_arc(a, b).unwrap();
    bn.add_arc(b, c).unwrap();

    bn.set_cpt(a, vec![0.35, 0.65]).unwrap();
    bn.set_cpt(b, vec![0.8, 0.2, 0.25, 0.75]).unwrap();
    bn.set_cpt(c, vec![0.9, 0.1, 0.3, 0.7]).unwrap();
    (bn, [a, b, c])
}

/// A fork a -> b, a -> c with deterministic children: b copies a,
/// c negates a. Observing b = 0 and c = 0 is impossible.
pub fn get_deterministic_bn() -> (BayesNet, [NodeId; 3]) {
    let mut bn = BayesNet::new();
    let a = bn.add_variable("a", 2).unwrap();
    let b = bn.add_variable("b", 2).unwrap();
    let c = bn.add_variable("c", 2).unwrap();
    bn.add_arc(a, b).unwrap();
    bn.add_arc(a, c).unwrap();

    bn.set_cpt(a, vec![0.5, 0.5]).unwrap();
    bn.set_cpt(b, vec![1.0, 0.0, 0.0, 1.0]).unwrap();
    bn.set_cpt(c, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
    (bn, [a, b, c])
}

/// The full joint distribution: the product of every table and every
/// entered evidence potential. Exponential in the network size; only
/// for checking the engine on small fixtures.
pub fn brute_force_joint<BN: BayesNetView>(bn: &BN, evidence: &[&Potential]) -> Potential {
    let mut joint = Potential::scalar(1.0);
    for node in bn.nodes() {
        if let Some(cpt) = bn.cpt(node) {
            joint = joint.combine(cpt);
        }
    }
    for potential in evidence {
        joint = joint.combine(potential);
    }
    joint
}

/// The brute-force posterior of `target` given the evidence
/// potentials, normalised.
pub fn brute_force_posterior<BN: BayesNetView>(
    bn: &BN,
    evidence: &[&Potential],
    target: &NodeSet,
) -> Potential {
    let joint = brute_force_joint(bn, evidence);
    let mut marginal = joint.project_to(target);
    marginal.normalize().unwrap();
    marginal
}

/// Asserts two potentials agree entrywise within `epsilon`, aligning
/// the second to the first's variable order first.
pub fn assert_potentials_close(expected: &Potential, actual: &Potential, epsilon: f64) {
    let keep: BTreeSet<NodeId> = expected.variable_ids().collect();
    let aligned = Potential::ones(expected.vars().to_vec()).combine(&actual.project_to(&keep));
    let diff = expected
        .max_abs_diff(&aligned)
        .expect("potentials must range over the same variables");
    assert!(
        diff <= epsilon,
        "potentials differ by {diff}, more than {epsilon}: expected {expected}, actual {actual}"
    );
}
