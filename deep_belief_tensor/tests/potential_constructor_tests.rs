/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::sync::Arc;

use deep_belief_tensor::{DiscreteVariable, Potential, PotentialError, VariableRef};

fn var(id: usize, domain_size: usize) -> VariableRef {
    Arc::new(DiscreteVariable::with_domain(id, format!("v{id}"), domain_size).unwrap())
}

#[test]
fn test_new_success() {
    let a = var(0, 2);
    let b = var(1, 3);
    let values = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
    let pot = Potential::new(vec![a, b], values.clone()).unwrap();

    assert_eq!(pot.as_slice(), values.as_slice());
    assert_eq!(pot.rank(), 2);
    assert_eq!(pot.len(), 6);
    // row-major: the second variable is the fastest axis
    assert_eq!(pot.get(&[0, 0]), Some(0.1));
    assert_eq!(pot.get(&[0, 2]), Some(0.3));
    assert_eq!(pot.get(&[1, 0]), Some(0.4));
    assert_eq!(pot.get(&[1, 2]), Some(0.6));
}

#[test]
fn test_new_shape_mismatch() {
    let a = var(0, 2);
    let b = var(1, 3);
    let result = Potential::new(vec![a, b], vec![0.1; 5]);
    assert_eq!(result, Err(PotentialError::ShapeMismatch));
}

#[test]
fn test_new_duplicate_variable() {
    let a = var(0, 2);
    let a2 = var(0, 2);
    let result = Potential::new(vec![a, a2], vec![0.1; 4]);
    assert_eq!(result, Err(PotentialError::DuplicateVariable(0)));
}

#[test]
fn test_scalar() {
    let pot = Potential::scalar(0.25);
    assert_eq!(pot.rank(), 0);
    assert_eq!(pot.len(), 1);
    assert_eq!(pot.get(&[]), Some(0.25));
    assert_eq!(pot.sum(), 0.25);
}

#[test]
fn test_ones() {
    let a = var(0, 2);
    let b = var(1, 2);
    let pot = Potential::ones(vec![a, b]);
    assert_eq!(pot.as_slice(), &[1.0, 1.0, 1.0, 1.0]);
    assert!(pot.is_all_ones());
}

#[test]
fn test_indicator() {
    let a = var(4, 3);
    let pot = Potential::indicator(&a, 1).unwrap();
    assert_eq!(pot.as_slice(), &[0.0, 1.0, 0.0]);

    let result = Potential::indicator(&a, 3);
    assert_eq!(result, Err(PotentialError::InvalidInstantiation));
}

#[test]
fn test_get_and_set() {
    let a = var(0, 2);
    let mut pot = Potential::new(vec![a], vec![0.5, 0.5]).unwrap();

    pot.set(&[1], 0.9).unwrap();
    assert_eq!(pot.get(&[1]), Some(0.9));

    // wrong arity
    assert_eq!(pot.get(&[0, 0]), None);
    // out-of-range label
    assert_eq!(pot.get(&[2]), None);
    assert_eq!(pot.set(&[2], 0.1), Err(PotentialError::InvalidInstantiation));
    // negative values are rejected
    assert_eq!(pot.set(&[0], -0.1), Err(PotentialError::NegativeValue));
}

#[test]
fn test_contains_variable() {
    let a = var(0, 2);
    let b = var(1, 3);
    let pot = Potential::new(vec![a, b], vec![0.0; 6]).unwrap();

    assert!(pot.contains_variable(0));
    assert!(pot.contains_variable(1));
    assert!(!pot.contains_variable(2));
}
