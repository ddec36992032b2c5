/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeSet;
use std::sync::Arc;

use criterion::{criterion_group, Criterion};

use deep_belief::prelude::*;

fn chain_potentials(length: usize) -> Vec<Potential> {
    let vars: Vec<VariableRef> = (0..length)
        .map(|id| Arc::new(DiscreteVariable::with_domain(id, format!("v{id}"), 3).unwrap()))
        .collect();
    let mut pots = vec![Potential::new(vec![vars[0].clone()], vec![0.2, 0.5, 0.3]).unwrap()];
    for pair in vars.windows(2) {
        let values: Vec<f64> = (0..9).map(|i| (i as f64 + 1.0) / 45.0).collect();
        pots.push(Potential::new(vec![pair[1].clone(), pair[0].clone()], values).unwrap());
    }
    pots
}

fn combine_benchmark(criterion: &mut Criterion) {
    let pots = chain_potentials(8);
    criterion.bench_function("combine_chain", |bencher| {
        bencher.iter(|| {
            let mut joint = pots[0].clone();
            for pot in &pots[1..] {
                joint = joint.combine(pot);
            }
            joint
        })
    });
}

fn combine_and_project_benchmark(criterion: &mut Criterion) {
    let pots = chain_potentials(8);
    let refs: Vec<&Potential> = pots.iter().collect();
    let del: BTreeSet<usize> = (0..7).collect();
    criterion.bench_function("combine_and_project_chain", |bencher| {
        bencher.iter(|| combine_and_project(&refs, &del))
    });
}

criterion_group! {
    name = potential_ops;
    config = Criterion::default().sample_size(100);
    targets =
    combine_benchmark,
    combine_and_project_benchmark,
}
