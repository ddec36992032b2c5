/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeSet;

use crate::alias::{NodeId, NodeSet};
use crate::errors::TargetError;

/// The set of single targets and the set of joint targets.
///
/// Joint targets are kept antichain-shaped: inserting a superset of
/// an existing joint target replaces it, inserting a subset is a
/// silent no-op. Single targets are subsumed by membership in any
/// joint target for the purpose of [`is_target`](Self::is_target).
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    singles: NodeSet,
    joints: BTreeSet<NodeSet>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self {
            singles: NodeSet::new(),
            joints: BTreeSet::new(),
        }
    }

    /// Adds a single target. Returns true when the registry changed.
    pub fn add_single(&mut self, node: NodeId) -> bool {
        self.singles.insert(node)
    }

    pub fn erase_single(&mut self, node: NodeId) -> bool {
        self.singles.remove(&node)
    }

    /// Adds a joint target.
    ///
    /// A set equal to or contained in an existing joint target is a
    /// silent no-op; a strict superset replaces every joint target it
    /// contains. Returns true when the registry changed.
    pub fn add_joint(&mut self, target: NodeSet) -> Result<bool, TargetError> {
        if target.is_empty() {
            return Err(TargetError::EmptyJointTarget);
        }
        if self.joints.iter().any(|joint| target.is_subset(joint)) {
            return Ok(false);
        }
        self.joints.retain(|joint| !joint.is_subset(&target));
        self.joints.insert(target);
        Ok(true)
    }

    pub fn erase_joint(&mut self, target: &NodeSet) -> bool {
        self.joints.remove(target)
    }

    pub fn erase_all(&mut self) {
        self.singles.clear();
        self.joints.clear();
    }

    pub fn add_all_singles(&mut self, nodes: impl IntoIterator<Item = NodeId>) {
        self.singles.extend(nodes);
    }

    pub fn singles(&self) -> &NodeSet {
        &self.singles
    }

    pub fn joints(&self) -> impl Iterator<Item = &NodeSet> {
        self.joints.iter()
    }

    pub fn is_single_target(&self, node: NodeId) -> bool {
        self.singles.contains(&node)
    }

    /// True when the node is a single target or a member of any joint
    /// target.
    pub fn is_target(&self, node: NodeId) -> bool {
        self.singles.contains(&node) || self.joints.iter().any(|joint| joint.contains(&node))
    }

    pub fn is_joint_target(&self, target: &NodeSet) -> bool {
        self.joints.contains(target)
    }

    /// A declared joint target containing `target`, if any.
    pub fn joint_superset(&self, target: &NodeSet) -> Option<&NodeSet> {
        self.joints.iter().find(|joint| target.is_subset(joint))
    }

    /// All target nodes: the singles plus every joint member.
    pub fn all_target_nodes(&self) -> NodeSet {
        let mut nodes = self.singles.clone();
        for joint in &self.joints {
            nodes.extend(joint.iter().copied());
        }
        nodes
    }

    pub fn is_empty(&self) -> bool {
        self.singles.is_empty() && self.joints.is_empty()
    }
}
