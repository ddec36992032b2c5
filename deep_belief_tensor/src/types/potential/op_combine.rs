/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::sync::Arc;

use crate::types::potential::Potential;
use crate::types::discrete_variable::VariableRef;

/// Strides of `operand` aligned to the axes of `result_vars`; axes the
/// operand does not carry get stride zero so its offset never moves
/// along them.
pub(crate) fn aligned_strides(operand: &Potential, result_vars: &[VariableRef]) -> Vec<usize> {
    let strides = operand.strides();
    result_vars
        .iter()
        .map(|v| operand.position(v.id()).map_or(0, |j| strides[j]))
        .collect()
}

impl Potential {
    /// Pointwise product.
    ///
    /// The result's variable sequence is this potential's sequence
    /// followed by the other's remaining variables in their relative
    /// order. Runs in O(result size).
    pub fn combine(&self, other: &Potential) -> Potential {
        let mut vars = self.vars().to_vec();
        for v in other.vars() {
            if !self.contains_variable(v.id()) {
                vars.push(Arc::clone(v));
            }
        }

        let shape: Vec<usize> = vars.iter().map(|v| v.domain_size()).collect();
        let len: usize = shape.iter().product();
        let a_strides = aligned_strides(self, &vars);
        let b_strides = aligned_strides(other, &vars);

        let mut values = Vec::with_capacity(len);
        let mut digits = vec![0usize; vars.len()];
        let mut a_off = 0usize;
        let mut b_off = 0usize;
        for _ in 0..len {
            values.push(self.as_slice()[a_off] * other.as_slice()[b_off]);
            for axis in (0..digits.len()).rev() {
                digits[axis] += 1;
                a_off += a_strides[axis];
                b_off += b_strides[axis];
                if digits[axis] < shape[axis] {
                    break;
                }
                digits[axis] = 0;
                a_off -= a_strides[axis] * shape[axis];
                b_off -= b_strides[axis] * shape[axis];
            }
        }

        Potential { vars, values }
    }
}
