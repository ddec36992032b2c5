/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use crate::errors::PotentialError;
use crate::types::potential::Potential;

const ALL_ONES_EPSILON: f64 = 1e-6;

impl Potential {
    /// Divides every value by the table sum so that the potential
    /// sums to one. Fails with `Degenerate` when the sum is zero.
    pub fn normalize(&mut self) -> Result<(), PotentialError> {
        let total = self.sum();
        if total == 0.0 {
            return Err(PotentialError::Degenerate);
        }
        for value in self.values_mut() {
            *value /= total;
        }
        Ok(())
    }

    /// True when every entry equals one up to a small epsilon. Unit
    /// single-variable messages carry no information and are dropped
    /// by the message-passing engine.
    pub fn is_all_ones(&self) -> bool {
        self.as_slice().iter().all(|v| *v > 1.0 - ALL_ONES_EPSILON && *v < 1.0 + ALL_ONES_EPSILON)
    }

    /// True when every entry is zero.
    pub fn is_all_zeros(&self) -> bool {
        self.as_slice().iter().all(|v| *v == 0.0)
    }
}
