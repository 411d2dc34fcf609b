//! Chain-shaped coordination graph and joint actions
//!
//! Agents are arranged on a path graph: agent `i` interacts with agent
//! `i + 1`, so `n` agents produce `n - 1` edges. Every agent picks a binary
//! action each timestep; an edge's payoff depends only on the actions of its
//! two endpoints.

use std::fmt;

use rand::{Rng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An adjacent pair of agents on the chain.
///
/// Edges are fixed at graph construction: `right` is always `left + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub left: usize,
    pub right: usize,
}

/// A chain (path graph) over `agents` binary-action agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainGraph {
    agents: usize,
}

impl ChainGraph {
    /// Create a chain over the given number of agents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewAgents`] for fewer than three agents: a chain
    /// needs at least two edges for the factored representation to be
    /// meaningful.
    pub fn new(agents: usize) -> Result<Self> {
        if agents < 3 {
            return Err(Error::TooFewAgents { agents });
        }
        Ok(Self { agents })
    }

    /// Number of agents on the chain.
    pub fn agents(&self) -> usize {
        self.agents
    }

    /// Number of edges on the chain.
    pub fn edge_count(&self) -> usize {
        self.agents - 1
    }

    /// Iterate over the chain's edges in order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.agents - 1).map(|i| Edge {
            left: i,
            right: i + 1,
        })
    }
}

/// One binary action per agent, ordered by agent index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointAction {
    bits: Vec<u8>,
}

impl JointAction {
    /// The all-zero joint action, the starting point of every trial.
    pub fn zeros(agents: usize) -> Self {
        Self {
            bits: vec![0; agents],
        }
    }

    pub(crate) fn from_bits(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self { bits }
    }

    /// Sample a uniformly random joint action, one independent fair bit per
    /// agent.
    pub fn uniform(agents: usize, rng: &mut StdRng) -> Self {
        Self {
            bits: (0..agents).map(|_| rng.random_range(0..2)).collect(),
        }
    }

    /// Number of agents covered by this joint action.
    pub fn agents(&self) -> usize {
        self.bits.len()
    }

    /// The action bit of one agent.
    pub fn bit(&self, agent: usize) -> u8 {
        self.bits[agent]
    }

    /// All action bits, ordered by agent index.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }
}

impl fmt::Display for JointAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn rejects_chains_shorter_than_three() {
        assert!(matches!(
            ChainGraph::new(2),
            Err(Error::TooFewAgents { agents: 2 })
        ));
        assert!(ChainGraph::new(3).is_ok());
    }

    #[test]
    fn edges_cover_adjacent_pairs() {
        let graph = ChainGraph::new(4).unwrap();
        let edges: Vec<(usize, usize)> = graph.edges().map(|e| (e.left, e.right)).collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn zeros_action_is_all_zero() {
        let action = JointAction::zeros(5);
        assert_eq!(action.agents(), 5);
        assert!(action.bits().iter().all(|&b| b == 0));
        assert_eq!(action.to_string(), "00000");
    }

    #[test]
    fn uniform_action_bits_are_binary() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let action = JointAction::uniform(6, &mut rng);
            assert!(action.bits().iter().all(|&b| b <= 1));
        }
    }
}
