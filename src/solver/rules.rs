//! Flat storage for local value rules
//!
//! The rule topology is fixed at construction: four rules per chain edge,
//! one per local joint-action pair. A flat array indexed by (edge, local
//! action pair) replaces any dynamic rule set; rule scopes are valid edges
//! by construction and rules are never added or removed during a trial.

use serde::{Deserialize, Serialize};

use crate::graph::{ChainGraph, Edge};

/// Number of local joint-action pairs per edge for binary agents.
const LOCAL_ACTIONS: usize = 4;

/// A local value rule: one edge, one local action pair, one learned value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRule {
    pub scope: Edge,
    pub local_action: (u8, u8),
    pub value: f64,
}

/// The full rule set of a learner: `4 · (agents − 1)` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    agents: usize,
    values: Vec<f64>,
}

impl RuleTable {
    /// Build the rule set for a chain with every value set to `baseline`.
    pub fn optimistic(graph: &ChainGraph, baseline: f64) -> Self {
        Self {
            agents: graph.agents(),
            values: vec![baseline; graph.edge_count() * LOCAL_ACTIONS],
        }
    }

    /// Number of agents covered by the rule set.
    pub fn agents(&self) -> usize {
        self.agents
    }

    /// Number of edges covered by the rule set.
    pub fn edge_count(&self) -> usize {
        self.agents - 1
    }

    /// Total number of stored rules.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn index(edge: usize, first: u8, second: u8) -> usize {
        edge * LOCAL_ACTIONS + (first as usize) * 2 + second as usize
    }

    /// The value of the rule scoped to `(edge, edge + 1)` for the local
    /// action pair `(first, second)`.
    pub fn value(&self, edge: usize, first: u8, second: u8) -> f64 {
        self.values[Self::index(edge, first, second)]
    }

    pub(crate) fn value_mut(&mut self, edge: usize, first: u8, second: u8) -> &mut f64 {
        &mut self.values[Self::index(edge, first, second)]
    }

    /// Iterate over all rules as explicit records, in edge order.
    pub fn rules(&self) -> impl Iterator<Item = ValueRule> + '_ {
        (0..self.edge_count()).flat_map(move |edge| {
            (0..LOCAL_ACTIONS).map(move |local| ValueRule {
                scope: Edge {
                    left: edge,
                    right: edge + 1,
                },
                local_action: ((local / 2) as u8, (local % 2) as u8),
                value: self.values[edge * LOCAL_ACTIONS + local],
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_rules_per_edge() {
        for agents in 3..=8 {
            let graph = ChainGraph::new(agents).unwrap();
            let table = RuleTable::optimistic(&graph, 5.0);
            assert_eq!(table.len(), 4 * (agents - 1));
            assert_eq!(table.rules().count(), 4 * (agents - 1));
        }
    }

    #[test]
    fn every_scope_is_a_chain_edge() {
        let graph = ChainGraph::new(6).unwrap();
        let table = RuleTable::optimistic(&graph, 5.0);
        for rule in table.rules() {
            assert_eq!(rule.scope.right, rule.scope.left + 1);
            assert!(rule.scope.right < table.agents());
            assert!(rule.local_action.0 <= 1 && rule.local_action.1 <= 1);
        }
    }

    #[test]
    fn values_start_at_the_baseline_and_mutate_in_place() {
        let graph = ChainGraph::new(3).unwrap();
        let mut table = RuleTable::optimistic(&graph, 5.0);
        assert!(table.rules().all(|rule| rule.value == 5.0));

        *table.value_mut(1, 0, 1) = 2.5;
        assert_eq!(table.value(1, 0, 1), 2.5);
        assert_eq!(table.value(1, 1, 0), 5.0);
        assert_eq!(table.value(0, 0, 1), 5.0);
    }
}
