/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeMap;

use deep_belief_tensor::{Potential, VariableRef};

use crate::alias::{NodeId, NodeSet};
use crate::errors::EvidenceError;
use crate::types::evidence::evidence_entry::EvidenceEntry;

/// Maps node ids to their evidence entries. A node carries at most
/// one entry.
///
/// Mutations only validate and store; the engine interprets the
/// returned flags to maintain its change log.
#[derive(Debug, Clone, Default)]
pub struct EvidenceStore {
    entries: BTreeMap<NodeId, EvidenceEntry>,
}

impl EvidenceStore {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn add_hard(
        &mut self,
        variable: &VariableRef,
        label: usize,
    ) -> Result<(), EvidenceError> {
        let node = variable.id();
        if self.entries.contains_key(&node) {
            return Err(EvidenceError::DuplicateEvidence { node });
        }
        let entry = Self::hard_entry(variable, label)?;
        self.entries.insert(node, entry);
        Ok(())
    }

    pub fn add_soft(&mut self, potential: Potential) -> Result<NodeId, EvidenceError> {
        let node = Self::validate_soft(&potential)?;
        if self.entries.contains_key(&node) {
            return Err(EvidenceError::DuplicateEvidence { node });
        }
        self.entries.insert(node, EvidenceEntry::Soft(potential));
        Ok(node)
    }

    /// Replaces the entry of a node that already carries evidence.
    /// Returns true when the entry flipped between soft and hard.
    pub fn change_hard(
        &mut self,
        variable: &VariableRef,
        label: usize,
    ) -> Result<bool, EvidenceError> {
        let node = variable.id();
        let was_hard = self
            .entries
            .get(&node)
            .ok_or(EvidenceError::NoSuchEvidence { node })?
            .is_hard();
        let entry = Self::hard_entry(variable, label)?;
        self.entries.insert(node, entry);
        Ok(!was_hard)
    }

    /// Replaces the entry of a node that already carries evidence.
    /// Returns true when the entry flipped between soft and hard.
    pub fn change_soft(&mut self, potential: Potential) -> Result<bool, EvidenceError> {
        let node = Self::validate_soft(&potential)?;
        let was_hard = self
            .entries
            .get(&node)
            .ok_or(EvidenceError::NoSuchEvidence { node })?
            .is_hard();
        self.entries.insert(node, EvidenceEntry::Soft(potential));
        Ok(was_hard)
    }

    /// Removes the entry of `node`, returning whether it was hard.
    pub fn erase(&mut self, node: NodeId) -> Result<bool, EvidenceError> {
        self.entries
            .remove(&node)
            .map(|entry| entry.is_hard())
            .ok_or(EvidenceError::NoSuchEvidence { node })
    }

    /// Removes every entry, returning (had any hard entry, the former
    /// soft-evidence nodes).
    pub fn erase_all(&mut self) -> (bool, Vec<NodeId>) {
        let had_hard = self.entries.values().any(EvidenceEntry::is_hard);
        let soft_nodes = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.is_hard())
            .map(|(node, _)| *node)
            .collect();
        self.entries.clear();
        (had_hard, soft_nodes)
    }

    pub fn entry(&self, node: NodeId) -> Option<&EvidenceEntry> {
        self.entries.get(&node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.entries.contains_key(&node)
    }

    pub fn is_hard(&self, node: NodeId) -> bool {
        self.entries.get(&node).is_some_and(EvidenceEntry::is_hard)
    }

    pub fn hard_label(&self, node: NodeId) -> Option<usize> {
        self.entries.get(&node).and_then(EvidenceEntry::hard_label)
    }

    /// The potential a node's entry multiplies into the joint.
    pub fn potential(&self, node: NodeId) -> Option<&Potential> {
        self.entries.get(&node).map(EvidenceEntry::potential)
    }

    pub fn nodes(&self) -> NodeSet {
        self.entries.keys().copied().collect()
    }

    pub fn hard_nodes(&self) -> NodeSet {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_hard())
            .map(|(node, _)| *node)
            .collect()
    }

    pub fn soft_nodes(&self) -> NodeSet {
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.is_hard())
            .map(|(node, _)| *node)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn hard_entry(variable: &VariableRef, label: usize) -> Result<EvidenceEntry, EvidenceError> {
        let indicator = Potential::indicator(variable, label).map_err(|_| {
            EvidenceError::InvalidLabel {
                node: variable.id(),
                label,
            }
        })?;
        Ok(EvidenceEntry::Hard { label, indicator })
    }

    fn validate_soft(potential: &Potential) -> Result<NodeId, EvidenceError> {
        if potential.rank() != 1 {
            return Err(EvidenceError::NotSingleVariable);
        }
        let node = potential.vars()[0].id();
        if potential.as_slice().iter().any(|v| *v < 0.0) {
            return Err(EvidenceError::NegativeValue { node });
        }
        Ok(node)
    }
}
