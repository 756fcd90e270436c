//! Point-in-time export of an agent's belief and history.

use crate::BetaParams;

/// A materialized copy of a [`BanditAgent`][crate::BanditAgent]'s state.
///
/// Every field is an owned copy taken at materialization time, so editing a
/// snapshot never reaches back into the agent. It is an export view, not a
/// restore format: it omits the name, the default priors, and the RNG.
///
/// With the `serde` feature this serializes to an object keyed by exactly
/// `posterior`, `selection_history`, `pull_count`, `reward_history`, `regret_log`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    /// Per-arm posterior shapes.
    pub posterior: Vec<BetaParams>,
    /// Chosen arm per selection, oldest first.
    pub selection_history: Vec<usize>,
    /// Per-arm selection counts (base value 1).
    pub pull_count: Vec<u64>,
    /// Observed rewards, oldest first. Not aligned to arms.
    pub reward_history: Vec<u8>,
    /// Caller-written regret flags (1 = chosen arm was not optimal).
    pub regret_log: Vec<u8>,
}

impl AgentSnapshot {
    /// Number of successes in `reward_history`.
    pub fn total_reward(&self) -> u64 {
        self.reward_history.iter().map(|&r| u64::from(r)).sum()
    }

    /// Number of suboptimal plays in `regret_log`.
    pub fn cumulative_regret(&self) -> u64 {
        self.regret_log.iter().map(|&r| u64::from(r)).sum()
    }

    /// Fraction of observed rewards that were successes.
    pub fn empirical_reward_rate(&self) -> Option<f64> {
        if self.reward_history.is_empty() {
            return None;
        }
        Some(self.total_reward() as f64 / self.reward_history.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_over_histories() {
        let s = AgentSnapshot {
            reward_history: vec![1, 0, 1, 1],
            regret_log: vec![0, 1, 1, 0],
            ..AgentSnapshot::default()
        };
        assert_eq!(s.total_reward(), 3);
        assert_eq!(s.cumulative_regret(), 2);
        assert_eq!(s.empirical_reward_rate(), Some(0.75));
        assert_eq!(AgentSnapshot::default().empirical_reward_rate(), None);
    }
}
