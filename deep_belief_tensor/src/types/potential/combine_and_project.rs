/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::types::discrete_variable::NodeId;
use crate::types::potential::Potential;

/// Combines a set of potentials and sums out `del_vars`, equivalent to
/// `combine_all(potentials).project_out(del_vars)`.
///
/// The deletion proceeds one variable at a time: at each step the
/// variable whose elimination touches the smallest joint table is
/// summed out of the combination of only the potentials that carry it.
/// The fully combined table is never materialised unless every
/// deleted variable occurs in every potential. Ties break on the
/// smallest node id.
///
/// An empty input yields the neutral scalar potential 1.
pub fn combine_and_project(potentials: &[&Potential], del_vars: &BTreeSet<NodeId>) -> Potential {
    let mut work: Vec<Cow<'_, Potential>> =
        potentials.iter().map(|p| Cow::Borrowed(*p)).collect();

    let mut remaining: BTreeSet<NodeId> = del_vars
        .iter()
        .copied()
        .filter(|id| work.iter().any(|p| p.contains_variable(*id)))
        .collect();

    while let Some(var) = pick_cheapest(&work, &remaining) {
        remaining.remove(&var);

        let (with_var, rest): (Vec<_>, Vec<_>) =
            work.into_iter().partition(|p| p.contains_variable(var));
        work = rest;

        let mut joint: Option<Potential> = None;
        for pot in &with_var {
            joint = Some(match joint {
                None => pot.as_ref().clone(),
                Some(j) => j.combine(pot.as_ref()),
            });
        }
        if let Some(joint) = joint {
            let single: BTreeSet<NodeId> = BTreeSet::from([var]);
            work.push(Cow::Owned(joint.project_out(&single)));
        }
    }

    let mut result: Option<Potential> = None;
    for pot in &work {
        result = Some(match result {
            None => pot.as_ref().clone(),
            Some(r) => r.combine(pot.as_ref()),
        });
    }
    result.unwrap_or_else(|| Potential::scalar(1.0))
}

/// The remaining deletion variable whose induced joint table is
/// smallest, or `None` when no deletion variable is left.
fn pick_cheapest(work: &[Cow<'_, Potential>], remaining: &BTreeSet<NodeId>) -> Option<NodeId> {
    let mut best: Option<(usize, NodeId)> = None;
    for &var in remaining {
        let mut joint_vars: BTreeSet<NodeId> = BTreeSet::new();
        let mut cost = 1usize;
        for pot in work.iter().filter(|p| p.contains_variable(var)) {
            for v in pot.vars() {
                if joint_vars.insert(v.id()) {
                    cost = cost.saturating_mul(v.domain_size());
                }
            }
        }
        match best {
            Some((best_cost, _)) if cost >= best_cost => {}
            _ => best = Some((cost, var)),
        }
    }
    best.map(|(_, var)| var)
}
