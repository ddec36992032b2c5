/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeSet;
use std::sync::Arc;

use deep_belief_tensor::{DiscreteVariable, Potential, PotentialError, VariableRef};

fn var(id: usize, domain_size: usize) -> VariableRef {
    Arc::new(DiscreteVariable::with_domain(id, format!("v{id}"), domain_size).unwrap())
}

#[test]
fn test_divide_by_marginal_conditionalizes() {
    let a = var(0, 2);
    let b = var(1, 2);
    // joint over (a, b)
    let joint = Potential::new(
        vec![Arc::clone(&a), Arc::clone(&b)],
        vec![0.1, 0.3, 0.2, 0.4],
    )
    .unwrap();

    let marginal_b = joint.project_out(&BTreeSet::from([0]));
    let conditional = joint.divide(&marginal_b).unwrap();

    // each b-slice sums to one: P(a | b)
    for b_val in 0..2 {
        let total: f64 = (0..2)
            .map(|a_val| conditional.get(&[a_val, b_val]).unwrap())
            .sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
    // P(a=0 | b=0) = 0.1 / 0.3
    assert!((conditional.get(&[0, 0]).unwrap() - 0.1 / 0.3).abs() < 1e-12);
}

#[test]
fn test_divide_by_scalar() {
    let a = var(0, 2);
    let p = Potential::new(vec![a], vec![0.2, 0.6]).unwrap();
    let s = Potential::scalar(2.0);

    let r = p.divide(&s).unwrap();
    assert_eq!(r.as_slice(), &[0.1, 0.3]);
}

#[test]
fn test_divide_zero_divisor_yields_zero() {
    let a = var(0, 2);
    let b = var(1, 2);
    let joint = Potential::new(
        vec![Arc::clone(&a), Arc::clone(&b)],
        vec![0.0, 0.3, 0.0, 0.7],
    )
    .unwrap();

    // marginal over b = (0.0, 1.0); the b = 0 slice divides by zero
    let marginal_b = joint.project_out(&BTreeSet::from([0]));
    let conditional = joint.divide(&marginal_b).unwrap();

    assert_eq!(conditional.get(&[0, 0]), Some(0.0));
    assert_eq!(conditional.get(&[1, 0]), Some(0.0));
    assert!((conditional.get(&[0, 1]).unwrap() - 0.3).abs() < 1e-12);
}

#[test]
fn test_divide_unknown_variable() {
    let a = var(0, 2);
    let c = var(2, 2);
    let p = Potential::new(vec![a], vec![0.5, 0.5]).unwrap();
    let q = Potential::new(vec![c], vec![0.5, 0.5]).unwrap();

    assert_eq!(p.divide(&q), Err(PotentialError::UnknownVariable(2)));
}
