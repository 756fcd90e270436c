//! Agent configuration.

use crate::BetaParams;

/// Everything needed to build a [`BanditAgent`][crate::BanditAgent].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentConfig {
    /// Display label; no uniqueness is enforced.
    pub name: String,
    /// Per-arm priors. The length fixes the arm count.
    ///
    /// Same type as the snapshot posterior, so both serialize as `{alpha, beta}`.
    pub priors: Vec<BetaParams>,
    /// Seed for the sampling RNG. `None` draws a seed from OS entropy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// `k` arms, each starting from the uniform Beta(1, 1) prior.
    pub fn uniform(name: impl Into<String>, k: usize) -> Self {
        Self {
            name: name.into(),
            priors: vec![BetaParams::uniform(); k],
            seed: None,
        }
    }

    /// Fix the sampling seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::uniform("bandit", 2)
    }
}
