//! Epsilon-greedy joint-action selection
//!
//! A single policy type holds the current greedy joint action and the
//! current exploration rate. The experiment driver owns the epsilon
//! schedule and pushes both values in; sampling never mutates the policy.

use rand::{Rng, rngs::StdRng};

use crate::graph::JointAction;

/// Greedy joint action plus a uniform exploration rate.
#[derive(Debug, Clone)]
pub struct EpsilonGreedyPolicy {
    greedy: JointAction,
    epsilon: f64,
}

impl EpsilonGreedyPolicy {
    /// Create a policy starting from the all-zero joint action with no
    /// exploration.
    pub fn new(agents: usize) -> Self {
        Self {
            greedy: JointAction::zeros(agents),
            epsilon: 0.0,
        }
    }

    /// Set the exploration rate, saturating into [0, 1].
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon.clamp(0.0, 1.0);
    }

    /// Current exploration rate.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Replace the stored greedy joint action.
    pub fn update(&mut self, greedy: JointAction) {
        self.greedy = greedy;
    }

    /// The stored greedy joint action.
    pub fn greedy(&self) -> &JointAction {
        &self.greedy
    }

    /// Sample the next joint action: uniformly random with probability
    /// epsilon, the stored greedy action otherwise.
    pub fn sample(&self, rng: &mut StdRng) -> JointAction {
        if rng.random::<f64>() < self.epsilon {
            JointAction::uniform(self.greedy.agents(), rng)
        } else {
            self.greedy.clone()
        }
    }
}
