//! Exact joint-action maximization by variable elimination on the chain
//!
//! The summed rule values decompose over edges, so the maximum over all 2^n
//! joint actions is found by eliminating agents from one end of the chain to
//! the other: each step folds one agent's incident rules into a two-entry
//! message for its remaining neighbor, then a backtracking pass recovers the
//! maximizing assignment. Cost is O(n) instead of O(2^n).

use crate::graph::JointAction;
use crate::solver::rules::RuleTable;

/// Compute the joint action maximizing the summed rule values.
///
/// On exact value ties the lower action wins at every choice point, so the
/// result is the lexicographically smallest maximizer.
pub fn maximize_chain(rules: &RuleTable) -> JointAction {
    let agents = rules.agents();
    let edges = rules.edge_count();

    // suffix[k][b]: best value of edges k.. given agent k plays b.
    // choice[k][b]: the maximizing action of agent k + 1 under that premise.
    let mut suffix = vec![[0.0f64; 2]; edges + 1];
    let mut choice = vec![[0u8; 2]; edges];

    for k in (0..edges).rev() {
        for b in 0..2u8 {
            let mut best_value = f64::NEG_INFINITY;
            let mut best_action = 0u8;
            for a in 0..2u8 {
                let value = rules.value(k, b, a) + suffix[k + 1][a as usize];
                if value > best_value {
                    best_value = value;
                    best_action = a;
                }
            }
            suffix[k][b as usize] = best_value;
            choice[k][b as usize] = best_action;
        }
    }

    let first = u8::from(suffix[0][1] > suffix[0][0]);
    let mut bits = Vec::with_capacity(agents);
    bits.push(first);
    for k in 0..edges {
        let previous = bits[k];
        bits.push(choice[k][previous as usize]);
    }

    JointAction::from_bits(bits)
}
