//! Factored (sparse) Q-learning over a chain coordination graph
//!
//! The joint action value is represented as a sum of local value rules, one
//! per edge and local action pair, instead of a single table over all 2^n
//! joint actions. Learning touches only the rules matched by the executed
//! joint action; maximization runs variable elimination along the chain, so
//! both operations stay linear in the number of agents.

pub mod max_plus;
pub mod rules;

pub use rules::{RuleTable, ValueRule};

use crate::graph::{ChainGraph, JointAction};

/// Q-learner over a factored rule set.
///
/// Holds one value rule per (edge, local action pair) and answers two
/// questions: how the rules change after one observed transition, and which
/// joint action currently maximizes the summed rule values.
#[derive(Debug, Clone)]
pub struct FactoredQLearner {
    graph: ChainGraph,
    rules: RuleTable,
    learning_rate: f64,
    discount: f64,
}

impl FactoredQLearner {
    /// Create a learner with every rule initialized to `optimism`.
    ///
    /// An optimistic baseline keeps unexplored local actions attractive until
    /// learned values take over.
    pub fn new(graph: ChainGraph, learning_rate: f64, discount: f64, optimism: f64) -> Self {
        Self {
            graph,
            rules: RuleTable::optimistic(&graph, optimism),
            learning_rate,
            discount,
        }
    }

    /// Apply one Q-learning step and return the new greedy joint action.
    ///
    /// Every rule whose local action matches the corresponding slice of
    /// `action` is updated in place:
    ///
    /// `value ← value + α · (edge_reward + γ · next_value − value)`
    ///
    /// where `edge_reward` is the credit observed by the rule's two agents.
    /// The bandit has a single persistent decision context, so the bootstrap
    /// target `next_value` is zero; the term is kept so the update reads as
    /// the general multi-state rule.
    ///
    /// `rewards` holds one accumulated credit per agent, in agent order.
    pub fn step_update(&mut self, action: &JointAction, rewards: &[f64]) -> JointAction {
        debug_assert_eq!(rewards.len(), self.graph.agents());

        let next_value = 0.0;
        for edge in self.graph.edges() {
            let (first, second) = (action.bit(edge.left), action.bit(edge.right));
            let edge_reward = rewards[edge.left] + rewards[edge.right];
            let value = self.rules.value_mut(edge.left, first, second);
            *value += self.learning_rate * (edge_reward + self.discount * next_value - *value);
        }

        self.greedy_joint_action()
    }

    /// The joint action maximizing the summed rule values.
    ///
    /// Exact for chain-structured rule sets; ties resolve toward action 0.
    pub fn greedy_joint_action(&self) -> JointAction {
        max_plus::maximize_chain(&self.rules)
    }

    /// Read access to the current rule values.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}
