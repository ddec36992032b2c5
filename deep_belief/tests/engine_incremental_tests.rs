/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeSet;
use std::sync::Arc;

use deep_belief::prelude::*;
use deep_belief::utils_test::test_utils::*;

const EPSILON: f64 = 1e-6;

fn soft(bn: &BayesNet, node: usize, values: Vec<f64>) -> Potential {
    Potential::new(vec![Arc::clone(bn.variable(node).unwrap())], values).unwrap()
}

#[test]
fn test_soft_evidence_update_without_recompilation() {
    let (bn, [a, _, _, d, _]) = get_five_node_bn();
    let mut engine = ShaferShenoy::new(&bn);
    engine.add_all_single_targets();

    engine.add_soft_evidence(soft(&bn, d, vec![0.6, 0.3])).unwrap();
    engine.posterior(a).unwrap();
    let tree_edges = engine.junction_tree().unwrap().edges();

    // a value-only change keeps the compiled tree
    engine
        .change_soft_evidence(soft(&bn, d, vec![0.1, 0.8]))
        .unwrap();
    let actual = engine.posterior(a).unwrap();
    assert_eq!(engine.junction_tree().unwrap().edges(), tree_edges);

    let evidence = soft(&bn, d, vec![0.1, 0.8]);
    let expected = brute_force_posterior(&bn, &[&evidence], &BTreeSet::from([a]));
    assert_potentials_close(&expected, &actual, EPSILON);
}

#[test]
fn test_soft_evidence_added_after_first_inference() {
    let (bn, [a, b, _, _, _]) = get_five_node_bn();
    let mut engine = ShaferShenoy::new(&bn);
    engine.add_all_single_targets();

    engine.posterior(a).unwrap();

    engine.add_soft_evidence(soft(&bn, b, vec![0.2, 0.9])).unwrap();
    let actual = engine.posterior(a).unwrap();

    let evidence = soft(&bn, b, vec![0.2, 0.9]);
    let expected = brute_force_posterior(&bn, &[&evidence], &BTreeSet::from([a]));
    assert_potentials_close(&expected, &actual, EPSILON);
}

#[test]
fn test_soft_evidence_erased_incrementally() {
    let (bn, [a, _, c, _, _]) = get_five_node_bn();
    let mut engine = ShaferShenoy::new(&bn);
    engine.add_all_single_targets();

    engine.add_soft_evidence(soft(&bn, c, vec![0.4, 0.5])).unwrap();
    engine.posterior(a).unwrap();

    engine.erase_evidence(c).unwrap();
    let actual = engine.posterior(a).unwrap();

    let expected = brute_force_posterior(&bn, &[], &BTreeSet::from([a]));
    assert_potentials_close(&expected, &actual, EPSILON);
}

#[test]
fn test_hard_value_change_refreshes_projections() {
    let (bn, nodes) = get_five_node_bn();
    let [a, b, _, _, e] = nodes;
    let mut engine = ShaferShenoy::new(&bn);
    engine.add_all_single_targets();

    engine.add_hard_evidence(e, 0).unwrap();
    engine.posterior(a).unwrap();
    engine.posterior(b).unwrap();

    engine.change_hard_evidence(e, 1).unwrap();

    let indicator = Potential::indicator(bn.variable(e).unwrap(), 1).unwrap();
    for node in [a, b] {
        let actual = engine.posterior(node).unwrap();
        let expected = brute_force_posterior(&bn, &[&indicator], &BTreeSet::from([node]));
        assert_potentials_close(&expected, &actual, EPSILON);
    }
}

#[test]
fn test_interleaved_queries_and_mutations() {
    let (bn, nodes) = get_five_node_bn();
    let [a, b, c, d, e] = nodes;
    let mut engine = ShaferShenoy::new(&bn);
    engine.add_all_single_targets();

    engine.add_soft_evidence(soft(&bn, c, vec![0.7, 0.7])).unwrap();
    engine.posterior(d).unwrap();

    engine.change_soft_evidence(soft(&bn, c, vec![0.9, 0.1])).unwrap();
    engine.add_hard_evidence(e, 2).unwrap();
    engine.posterior(a).unwrap();

    engine.erase_evidence(c).unwrap();

    let indicator = Potential::indicator(bn.variable(e).unwrap(), 2).unwrap();
    for node in [a, b, c, d] {
        let actual = engine.posterior(node).unwrap();
        let expected = brute_force_posterior(&bn, &[&indicator], &BTreeSet::from([node]));
        assert_potentials_close(&expected, &actual, EPSILON);
    }
}

#[test]
fn test_structure_override_forces_recompilation() {
    let (bn, [a, ..]) = get_five_node_bn();
    let mut engine = ShaferShenoy::new(&bn);
    engine.add_all_single_targets();

    let before = engine.posterior(a).unwrap();
    engine.set_outdated_structure();
    let after = engine.posterior(a).unwrap();

    assert_potentials_close(&before, &after, EPSILON);
}
