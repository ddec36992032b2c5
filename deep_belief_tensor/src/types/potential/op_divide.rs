/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use crate::errors::PotentialError;
use crate::types::potential::op_combine::aligned_strides;
use crate::types::potential::Potential;

impl Potential {
    /// Pointwise division by a potential over a subset of this
    /// potential's variables, broadcast along the missing axes.
    ///
    /// A zero divisor yields zero (the corresponding numerator slice
    /// is necessarily zero for non-negative tables that marginalise
    /// to the divisor).
    pub fn divide(&self, other: &Potential) -> Result<Potential, PotentialError> {
        for v in other.vars() {
            if !self.contains_variable(v.id()) {
                return Err(PotentialError::UnknownVariable(v.id()));
            }
        }

        let shape: Vec<usize> = self.vars().iter().map(|v| v.domain_size()).collect();
        let other_strides = aligned_strides(other, self.vars());

        let mut values = Vec::with_capacity(self.len());
        let mut digits = vec![0usize; self.rank()];
        let mut o_off = 0usize;
        for &value in self.as_slice() {
            let divisor = other.as_slice()[o_off];
            values.push(if divisor == 0.0 { 0.0 } else { value / divisor });
            for axis in (0..digits.len()).rev() {
                digits[axis] += 1;
                o_off += other_strides[axis];
                if digits[axis] < shape[axis] {
                    break;
                }
                digits[axis] = 0;
                o_off -= other_strides[axis] * shape[axis];
            }
        }

        Ok(Potential {
            vars: self.vars().to_vec(),
            values,
        })
    }
}
