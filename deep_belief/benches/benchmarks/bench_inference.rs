/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use criterion::{criterion_group, Criterion};

use deep_belief::prelude::*;
use deep_belief::utils_test::test_utils::get_five_node_bn;

fn compile_and_posterior_benchmark(criterion: &mut Criterion) {
    let (bn, [a, ..]) = get_five_node_bn();
    criterion.bench_function("compile_and_posterior", |bencher| {
        bencher.iter(|| {
            let mut engine = ShaferShenoy::new(&bn);
            engine.posterior(a).unwrap()
        })
    });
}

fn cached_posterior_benchmark(criterion: &mut Criterion) {
    let (bn, [a, ..]) = get_five_node_bn();
    let mut engine = ShaferShenoy::new(&bn);
    engine.add_all_single_targets();
    engine.make_inference().unwrap();
    criterion.bench_function("cached_posterior", |bencher| {
        bencher.iter(|| engine.posterior(a).unwrap())
    });
}

fn soft_evidence_update_benchmark(criterion: &mut Criterion) {
    let (bn, [a, _, _, d, _]) = get_five_node_bn();
    let mut engine = ShaferShenoy::new(&bn);
    engine.add_all_single_targets();
    let variable = bn.variable(d).unwrap().clone();
    engine
        .add_soft_evidence(Potential::new(vec![variable.clone()], vec![0.5, 0.5]).unwrap())
        .unwrap();
    engine.make_inference().unwrap();

    let mut flip = 0.1;
    criterion.bench_function("soft_evidence_update", |bencher| {
        bencher.iter(|| {
            flip = 1.0 - flip;
            let soft = Potential::new(vec![variable.clone()], vec![flip, 1.0 - flip]).unwrap();
            engine.change_soft_evidence(soft).unwrap();
            engine.posterior(a).unwrap()
        })
    });
}

criterion_group! {
    name = inference;
    config = Criterion::default().sample_size(100);
    targets =
    compile_and_posterior_benchmark,
    cached_posterior_benchmark,
    soft_evidence_update_benchmark,
}
