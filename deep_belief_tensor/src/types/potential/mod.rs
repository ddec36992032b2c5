/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

pub mod combine_and_project;
mod op_combine;
mod op_divide;
mod op_normalize;
mod op_project;

use std::fmt;

use crate::errors::PotentialError;
use crate::types::discrete_variable::{NodeId, VariableRef};

/// A dense factor over an ordered sequence of discrete variables.
///
/// Values are indexed row-major in the order of the variable
/// sequence: the last variable is the fastest-moving axis. An
/// *instantiation* is one label index per variable; it maps to a
/// linear offset by the usual mixed-radix formula.
///
/// Potentials are value types. Every operation returns a new
/// potential owned by the caller; nothing is shared except the
/// variable descriptors behind their [`VariableRef`] handles.
#[derive(Debug, Clone, PartialEq)]
pub struct Potential {
    vars: Vec<VariableRef>,
    values: Vec<f64>,
}

impl Potential {
    /// Creates a potential over `vars` from a row-major value array.
    ///
    /// Fails with `ShapeMismatch` when the array length differs from
    /// the product of the domain sizes and with `DuplicateVariable`
    /// when a variable id occurs twice.
    pub fn new(vars: Vec<VariableRef>, values: Vec<f64>) -> Result<Self, PotentialError> {
        for (i, v) in vars.iter().enumerate() {
            if vars[..i].iter().any(|w| w.id() == v.id()) {
                return Err(PotentialError::DuplicateVariable(v.id()));
            }
        }
        let size: usize = vars.iter().map(|v| v.domain_size()).product();
        if values.len() != size {
            return Err(PotentialError::ShapeMismatch);
        }
        Ok(Self { vars, values })
    }

    /// A zero-dimensional potential carrying a single constant.
    pub fn scalar(value: f64) -> Self {
        Self {
            vars: Vec::new(),
            values: vec![value],
        }
    }

    /// A potential over `vars` with every value set to one.
    pub fn ones(vars: Vec<VariableRef>) -> Self {
        let size: usize = vars.iter().map(|v| v.domain_size()).product();
        Self {
            vars,
            values: vec![1.0; size],
        }
    }

    /// Builds the 0/1 indicator potential of a hard observation: 1 at
    /// `label`, 0 elsewhere.
    pub fn indicator(variable: &VariableRef, label: usize) -> Result<Self, PotentialError> {
        if label >= variable.domain_size() {
            return Err(PotentialError::InvalidInstantiation);
        }
        let mut values = vec![0.0; variable.domain_size()];
        values[label] = 1.0;
        Self::new(vec![std::sync::Arc::clone(variable)], values)
    }

    pub fn vars(&self) -> &[VariableRef] {
        &self.vars
    }

    pub fn variable_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.vars.iter().map(|v| v.id())
    }

    pub fn contains_variable(&self, id: NodeId) -> bool {
        self.vars.iter().any(|v| v.id() == id)
    }

    pub(crate) fn position(&self, id: NodeId) -> Option<usize> {
        self.vars.iter().position(|v| v.id() == id)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Number of entries in the value table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of variables (axes).
    pub fn rank(&self) -> usize {
        self.vars.len()
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Row-major strides of the variable sequence.
    pub(crate) fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1; self.vars.len()];
        for i in (0..self.vars.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * self.vars[i + 1].domain_size();
        }
        strides
    }

    fn offset(&self, instantiation: &[usize]) -> Option<usize> {
        if instantiation.len() != self.vars.len() {
            return None;
        }
        let mut offset = 0;
        let strides = self.strides();
        for (axis, &digit) in instantiation.iter().enumerate() {
            if digit >= self.vars[axis].domain_size() {
                return None;
            }
            offset += digit * strides[axis];
        }
        Some(offset)
    }

    /// Value at an instantiation, one label index per variable.
    pub fn get(&self, instantiation: &[usize]) -> Option<f64> {
        self.offset(instantiation).map(|i| self.values[i])
    }

    pub fn set(&mut self, instantiation: &[usize], value: f64) -> Result<(), PotentialError> {
        if value < 0.0 {
            return Err(PotentialError::NegativeValue);
        }
        let offset = self
            .offset(instantiation)
            .ok_or(PotentialError::InvalidInstantiation)?;
        self.values[offset] = value;
        Ok(())
    }

    /// Largest absolute elementwise difference with `other`, or `None`
    /// when the variable sequences differ.
    pub fn max_abs_diff(&self, other: &Potential) -> Option<f64> {
        if self.vars.len() != other.vars.len()
            || self
                .vars
                .iter()
                .zip(other.vars.iter())
                .any(|(a, b)| a.id() != b.id())
        {
            return None;
        }
        Some(
            self.values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }
}

impl fmt::Display for Potential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = self.vars.iter().map(|v| v.name()).collect();
        write!(f, "Potential over [{}]: {:?}", names.join(", "), self.values)
    }
}
