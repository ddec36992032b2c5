/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use std::collections::BTreeMap;
use std::sync::Arc;

use deep_belief_graph::DagView;
use deep_belief_tensor::{DiscreteVariable, Potential, VariableRef};

use crate::alias::{NodeId, NodeSet};
use crate::errors::BayesNetError;
use crate::traits::bayes_net_view::BayesNetView;

/// A minimal discrete Bayesian network with a builder surface.
///
/// The engine only consumes the [`BayesNetView`] trait; this type is
/// the reference collaborator used by tests, benches and examples.
/// Parents are ordered by ascending node id.
#[derive(Debug, Clone, Default)]
pub struct BayesNet {
    variables: BTreeMap<NodeId, VariableRef>,
    dag: DagView,
    cpts: BTreeMap<NodeId, Potential>,
    next_id: NodeId,
}

impl BayesNet {
    pub fn new() -> Self {
        Self {
            variables: BTreeMap::new(),
            dag: DagView::new(),
            cpts: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Adds a variable with `domain_size` numeric labels and returns
    /// its fresh node id.
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        domain_size: usize,
    ) -> Result<NodeId, BayesNetError> {
        let id = self.next_id;
        let variable = DiscreteVariable::with_domain(id, name, domain_size)?;
        self.next_id += 1;
        self.variables.insert(id, Arc::new(variable));
        self.dag.add_node(id);
        Ok(id)
    }

    /// Adds a variable with explicit labels and returns its node id.
    pub fn add_labelled_variable(
        &mut self,
        name: impl Into<String>,
        labels: Vec<String>,
    ) -> Result<NodeId, BayesNetError> {
        let id = self.next_id;
        let variable = DiscreteVariable::new(id, name, labels)?;
        self.next_id += 1;
        self.variables.insert(id, Arc::new(variable));
        self.dag.add_node(id);
        Ok(id)
    }

    pub fn add_arc(&mut self, parent: NodeId, child: NodeId) -> Result<(), BayesNetError> {
        self.dag
            .add_arc(parent, child)
            .map_err(|_| BayesNetError::ArcCreatesNothing { parent, child })?;
        // a new parent invalidates any table entered for the child
        self.cpts.remove(&child);
        Ok(())
    }

    /// Sets the conditional probability table of `node`.
    ///
    /// `table` is laid out parent-major: one distribution over the
    /// node's labels per joint parent instantiation, parents iterated
    /// row-major in ascending id order. Internally the potential is
    /// stored with the node as its first variable.
    pub fn set_cpt(&mut self, node: NodeId, table: Vec<f64>) -> Result<(), BayesNetError> {
        let variable = self
            .variables
            .get(&node)
            .ok_or(BayesNetError::UnknownNode { node })?;
        let parents = self.dag.parents(node);
        let parent_vars: Vec<VariableRef> = parents
            .iter()
            .map(|p| {
                self.variables
                    .get(p)
                    .cloned()
                    .ok_or(BayesNetError::UnknownNode { node: *p })
            })
            .collect::<Result<_, _>>()?;

        let node_size = variable.domain_size();
        let parent_size: usize = parent_vars.iter().map(|v| v.domain_size()).product();
        if table.len() != node_size * parent_size {
            return Err(BayesNetError::InvalidCpt { node });
        }

        // reorder from (parent combo, node label) to node-first layout
        let mut values = vec![0.0; table.len()];
        for (i, &value) in table.iter().enumerate() {
            let combo = i / node_size;
            let label = i % node_size;
            values[label * parent_size + combo] = value;
        }

        let mut vars = Vec::with_capacity(1 + parent_vars.len());
        vars.push(Arc::clone(variable));
        vars.extend(parent_vars);
        let cpt =
            Potential::new(vars, values).map_err(|_| BayesNetError::InvalidCpt { node })?;
        self.cpts.insert(node, cpt);
        Ok(())
    }

    /// Checks that every node carries a table.
    pub fn validate(&self) -> Result<(), BayesNetError> {
        for node in self.variables.keys() {
            if !self.cpts.contains_key(node) {
                return Err(BayesNetError::MissingCpt { node: *node });
            }
        }
        Ok(())
    }

    pub fn number_nodes(&self) -> usize {
        self.variables.len()
    }
}

impl BayesNetView for BayesNet {
    fn nodes(&self) -> Vec<NodeId> {
        self.variables.keys().copied().collect()
    }

    fn parents(&self, node: NodeId) -> NodeSet {
        self.dag.parents(node)
    }

    fn variable(&self, node: NodeId) -> Option<&VariableRef> {
        self.variables.get(&node)
    }

    fn cpt(&self, node: NodeId) -> Option<&Potential> {
        self.cpts.get(&node)
    }
}
