/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeSet;
use std::sync::Arc;

use deep_belief_tensor::{combine_and_project, DiscreteVariable, Potential, VariableRef};

fn var(id: usize, domain_size: usize) -> VariableRef {
    Arc::new(DiscreteVariable::with_domain(id, format!("v{id}"), domain_size).unwrap())
}

#[test]
fn test_matches_naive_combine_then_project() {
    let a = var(0, 2);
    let b = var(1, 2);
    let c = var(2, 3);

    let p = Potential::new(vec![Arc::clone(&a)], vec![0.2, 0.8]).unwrap();
    let q = Potential::new(
        vec![Arc::clone(&a), Arc::clone(&b)],
        vec![0.9, 0.1, 0.3, 0.7],
    )
    .unwrap();
    let r = Potential::new(
        vec![Arc::clone(&b), Arc::clone(&c)],
        vec![0.5, 0.3, 0.2, 0.1, 0.1, 0.8],
    )
    .unwrap();

    let del = BTreeSet::from([0, 1]);
    let incremental = combine_and_project(&[&p, &q, &r], &del);
    let naive = p.combine(&q).combine(&r).project_out(&del);

    let diff = incremental
        .project_to(&BTreeSet::from([2]))
        .max_abs_diff(&naive)
        .unwrap();
    assert!(diff < 1e-12);
}

#[test]
fn test_single_potential() {
    let a = var(0, 2);
    let b = var(1, 2);
    let p = Potential::new(
        vec![Arc::clone(&a), Arc::clone(&b)],
        vec![0.1, 0.2, 0.3, 0.4],
    )
    .unwrap();

    let q = combine_and_project(&[&p], &BTreeSet::from([0]));
    let expected = p.project_out(&BTreeSet::from([0]));
    assert_eq!(q.max_abs_diff(&expected), Some(0.0));
}

#[test]
fn test_no_deletion_combines_everything() {
    let a = var(0, 2);
    let b = var(1, 2);
    let p = Potential::new(vec![Arc::clone(&a)], vec![0.4, 0.6]).unwrap();
    let q = Potential::new(vec![Arc::clone(&b)], vec![0.5, 0.5]).unwrap();

    let r = combine_and_project(&[&p, &q], &BTreeSet::new());
    assert_eq!(r.rank(), 2);
    assert!((r.sum() - 1.0).abs() < 1e-12);
}

#[test]
fn test_delete_all_yields_scalar() {
    let a = var(0, 2);
    let b = var(1, 2);
    let p = Potential::new(vec![Arc::clone(&a)], vec![0.4, 0.6]).unwrap();
    let q = Potential::new(
        vec![Arc::clone(&a), Arc::clone(&b)],
        vec![0.9, 0.1, 0.3, 0.7],
    )
    .unwrap();

    let r = combine_and_project(&[&p, &q], &BTreeSet::from([0, 1]));
    assert_eq!(r.rank(), 0);
    // sum over the full joint is 1 since q rows are conditional distributions
    assert!((r.get(&[]).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_empty_input_is_neutral() {
    let r = combine_and_project(&[], &BTreeSet::from([0]));
    assert_eq!(r.rank(), 0);
    assert_eq!(r.get(&[]), Some(1.0));
}

#[test]
fn test_untouched_potentials_are_not_joined_with_deleted_ones() {
    // c is independent of the deleted chain a - b; the result over
    // (b, c) must still match the naive computation
    let a = var(0, 2);
    let b = var(1, 2);
    let c = var(2, 2);

    let p = Potential::new(
        vec![Arc::clone(&a), Arc::clone(&b)],
        vec![0.2, 0.8, 0.6, 0.4],
    )
    .unwrap();
    let q = Potential::new(vec![Arc::clone(&c)], vec![0.3, 0.7]).unwrap();

    let del = BTreeSet::from([0]);
    let incremental = combine_and_project(&[&p, &q], &del);
    let naive = p.combine(&q).project_out(&del);

    let aligned = incremental.project_to(&BTreeSet::from([1, 2]));
    for i in 0..2 {
        for j in 0..2 {
            let expected = naive.get(&[i, j]).unwrap();
            let actual = aligned
                .get(&match aligned.variable_ids().next().unwrap() {
                    1 => [i, j],
                    _ => [j, i],
                })
                .unwrap();
            assert!((expected - actual).abs() < 1e-12);
        }
    }
}
