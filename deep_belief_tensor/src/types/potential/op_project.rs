/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::errors::PotentialError;
use crate::types::discrete_variable::NodeId;
use crate::types::potential::Potential;

impl Potential {
    /// Sums out the variables in `del_vars`, keeping the remaining
    /// variables in their current relative order.
    ///
    /// Variables in `del_vars` that the potential does not carry are
    /// ignored. Summing out every variable yields a zero-dimensional
    /// potential carrying the total as a constant.
    pub fn project_out(&self, del_vars: &BTreeSet<NodeId>) -> Potential {
        let kept: Vec<_> = self
            .vars()
            .iter()
            .filter(|v| !del_vars.contains(&v.id()))
            .map(Arc::clone)
            .collect();
        if kept.len() == self.rank() {
            return self.clone();
        }

        // row-major strides of the kept layout
        let mut kept_strides = vec![1usize; kept.len()];
        for i in (0..kept.len().saturating_sub(1)).rev() {
            kept_strides[i] = kept_strides[i + 1] * kept[i + 1].domain_size();
        }
        // stride of each self axis within the result; deleted axes do not move
        let mut kept_iter = kept_strides.iter();
        let result_strides: Vec<usize> = self
            .vars()
            .iter()
            .map(|v| {
                if del_vars.contains(&v.id()) {
                    0
                } else {
                    *kept_iter.next().unwrap_or(&0)
                }
            })
            .collect();

        // walk self once, accumulating into the kept-axes offset
        let shape: Vec<usize> = self.vars().iter().map(|v| v.domain_size()).collect();
        let mut values = vec![0.0; kept.iter().map(|v| v.domain_size()).product()];
        let mut digits = vec![0usize; self.rank()];
        let mut r_off = 0usize;
        for &value in self.as_slice() {
            values[r_off] += value;
            for axis in (0..digits.len()).rev() {
                digits[axis] += 1;
                r_off += result_strides[axis];
                if digits[axis] < shape[axis] {
                    break;
                }
                digits[axis] = 0;
                r_off -= result_strides[axis] * shape[axis];
            }
        }

        Potential { vars: kept, values }
    }

    /// Sums out everything except the variables in `keep_vars`.
    pub fn project_to(&self, keep_vars: &BTreeSet<NodeId>) -> Potential {
        let del_vars: BTreeSet<NodeId> = self
            .variable_ids()
            .filter(|id| !keep_vars.contains(id))
            .collect();
        self.project_out(&del_vars)
    }

    /// Fixes a subset of variables to given labels and returns the
    /// potential over the remaining ones.
    pub fn extract(&self, partial: &[(NodeId, usize)]) -> Result<Potential, PotentialError> {
        let mut fixed_offset = 0usize;
        let strides = self.strides();
        for &(id, label) in partial {
            let axis = self.position(id).ok_or(PotentialError::UnknownVariable(id))?;
            if label >= self.vars()[axis].domain_size() {
                return Err(PotentialError::InvalidInstantiation);
            }
            fixed_offset += label * strides[axis];
        }

        let fixed: BTreeSet<NodeId> = partial.iter().map(|&(id, _)| id).collect();
        let kept: Vec<_> = self
            .vars()
            .iter()
            .filter(|v| !fixed.contains(&v.id()))
            .map(Arc::clone)
            .collect();
        let kept_strides: Vec<usize> = self
            .vars()
            .iter()
            .zip(strides.iter())
            .filter(|(v, _)| !fixed.contains(&v.id()))
            .map(|(_, s)| *s)
            .collect();
        let shape: Vec<usize> = kept.iter().map(|v| v.domain_size()).collect();
        let len: usize = shape.iter().product();

        let mut values = Vec::with_capacity(len);
        let mut digits = vec![0usize; kept.len()];
        let mut src_off = fixed_offset;
        for _ in 0..len {
            values.push(self.as_slice()[src_off]);
            for axis in (0..digits.len()).rev() {
                digits[axis] += 1;
                src_off += kept_strides[axis];
                if digits[axis] < shape[axis] {
                    break;
                }
                digits[axis] = 0;
                src_off -= kept_strides[axis] * shape[axis];
            }
        }

        Ok(Potential { vars: kept, values })
    }
}
