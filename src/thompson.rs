//! Thompson-sampling agent for Bernoulli rewards.
//!
//! Each arm carries a Beta posterior over its success probability. Selection
//! draws one sample per arm and plays the largest; an observed 0/1 reward
//! bumps exactly one shape parameter of the played arm.
//!
//! Notes:
//! - The RNG is a type parameter so tests can inject a seeded generator.
//! - [`BanditAgent::new`] seeds from OS entropy; repeated runs diverge.
//! - `pull_count` starts at 1 per arm, not 0.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, trace};

use crate::{AgentConfig, AgentSnapshot, BanditError, BetaParams, Result};

/// Index of the first maximum in `values`, ignoring NaN.
///
/// Exact ties resolve to the lowest index. Returns `None` if no value is comparable.
pub fn argmax_first(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &x) in values.iter().enumerate() {
        if x.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if x <= b => {}
            _ => best = Some((i, x)),
        }
    }
    best.map(|(i, _)| i)
}

/// Single-agent Thompson-sampling bandit over `K` Bernoulli arms.
#[derive(Debug, Clone)]
pub struct BanditAgent<R = StdRng> {
    name: String,
    default_priors: Vec<BetaParams>,
    posterior: Vec<BetaParams>,
    selection_history: Vec<usize>,
    pull_count: Vec<u64>,
    reward_history: Vec<u8>,
    regret_log: Vec<u8>,
    snapshot: Option<AgentSnapshot>,
    rng: R,
}

impl BanditAgent<StdRng> {
    /// Create an agent whose sampler is seeded from OS entropy.
    pub fn new<P>(name: impl Into<String>, priors: impl IntoIterator<Item = P>) -> Result<Self>
    where
        P: Into<BetaParams>,
    {
        Self::with_rng(name, priors, StdRng::from_os_rng())
    }

    /// Create an agent with a fixed seed (reproducible selection sequences).
    pub fn with_seed<P>(
        name: impl Into<String>,
        priors: impl IntoIterator<Item = P>,
        seed: u64,
    ) -> Result<Self>
    where
        P: Into<BetaParams>,
    {
        Self::with_rng(name, priors, StdRng::seed_from_u64(seed))
    }

    /// Build from an [`AgentConfig`]; seeded if `cfg.seed` is set, OS entropy otherwise.
    ///
    /// ```rust
    /// use betabandit::{AgentConfig, BanditAgent};
    ///
    /// let cfg = AgentConfig::uniform("ctr", 3).with_seed(1);
    /// let mut a = BanditAgent::from_config(cfg.clone()).unwrap();
    /// let mut b = BanditAgent::from_config(cfg).unwrap();
    /// assert_eq!(a.select_arm(), b.select_arm());
    /// assert_eq!(a.pull_count().iter().sum::<u64>(), 4);
    /// ```
    pub fn from_config(cfg: AgentConfig) -> Result<Self> {
        match cfg.seed {
            Some(seed) => Self::with_seed(cfg.name, cfg.priors, seed),
            None => Self::new(cfg.name, cfg.priors),
        }
    }
}

impl<R: Rng> BanditAgent<R> {
    /// Create an agent drawing Beta samples from `rng`.
    ///
    /// Fails with [`BanditError::InvalidConfiguration`] if `priors` is empty or
    /// any shape is non-positive or non-finite.
    pub fn with_rng<P>(
        name: impl Into<String>,
        priors: impl IntoIterator<Item = P>,
        rng: R,
    ) -> Result<Self>
    where
        P: Into<BetaParams>,
    {
        let name = name.into();
        let default_priors: Vec<BetaParams> = priors.into_iter().map(Into::into).collect();
        if default_priors.is_empty() {
            return Err(BanditError::InvalidConfiguration(
                "at least one arm prior is required".to_string(),
            ));
        }
        for (i, p) in default_priors.iter().enumerate() {
            p.validate().map_err(|e| match e {
                BanditError::InvalidConfiguration(msg) => {
                    BanditError::InvalidConfiguration(format!("arm {i}: {msg}"))
                }
                other => other,
            })?;
        }
        let k = default_priors.len();
        debug!(agent = %name, arms = k, "bandit agent created");
        Ok(Self {
            name,
            posterior: default_priors.clone(),
            default_priors,
            selection_history: Vec::new(),
            pull_count: vec![1; k],
            reward_history: Vec::new(),
            regret_log: Vec::new(),
            snapshot: None,
            rng,
        })
    }

    /// Sample every arm's posterior once and play the largest draw.
    ///
    /// Ties go to the lowest index. Records the choice in `selection_history`
    /// and bumps its `pull_count`.
    pub fn select_arm(&mut self) -> usize {
        let samples: Vec<f64> = self
            .posterior
            .iter()
            .map(|p| p.sample(&mut self.rng))
            .collect();
        let choice = argmax_first(&samples).unwrap_or(0);
        self.selection_history.push(choice);
        self.pull_count[choice] = self.pull_count[choice].saturating_add(1);
        trace!(agent = %self.name, arm = choice, sample = samples[choice], "arm selected");
        choice
    }

    /// Record a binary `reward` for arm `choice` and apply the conjugate update.
    ///
    /// The agent does not check that `choice` was its most recent selection.
    /// Validation happens before any state changes.
    pub fn observe_outcome(&mut self, reward: u8, choice: usize) -> Result<()> {
        if choice >= self.arm_count() {
            return Err(BanditError::InvalidChoice {
                choice,
                arm_count: self.arm_count(),
            });
        }
        if reward > 1 {
            return Err(BanditError::InvalidReward(reward));
        }
        self.reward_history.push(reward);
        self.posterior[choice].observe(reward);
        trace!(agent = %self.name, arm = choice, reward, "outcome observed");
        Ok(())
    }

    /// [`observe_outcome`](Self::observe_outcome) with a `bool` outcome.
    pub fn observe_success(&mut self, choice: usize, success: bool) -> Result<()> {
        self.observe_outcome(u8::from(success), choice)
    }

    /// Restore the posterior to the default priors. History is kept.
    pub fn reset_priors(&mut self) {
        self.posterior.clone_from(&self.default_priors);
        debug!(agent = %self.name, "posterior reset to priors");
    }

    /// Return to the freshly constructed state: priors, empty histories,
    /// no snapshot, and `pull_count` back to all ones.
    pub fn clear_history(&mut self) {
        self.reset_priors();
        self.reward_history.clear();
        self.selection_history.clear();
        self.regret_log.clear();
        self.snapshot = None;
        self.pull_count.fill(1);
        debug!(agent = %self.name, "history cleared");
    }

    /// Copy the current state into an [`AgentSnapshot`], keep it, and return it.
    pub fn materialize_snapshot(&mut self) -> AgentSnapshot {
        let snap = AgentSnapshot {
            posterior: self.posterior.clone(),
            selection_history: self.selection_history.clone(),
            pull_count: self.pull_count.clone(),
            reward_history: self.reward_history.clone(),
            regret_log: self.regret_log.clone(),
        };
        self.snapshot = Some(snap.clone());
        snap
    }

    /// Append a regret flag. Only a caller that knows the optimal arm can say.
    pub fn record_regret(&mut self, chose_suboptimal: bool) {
        self.regret_log.push(u8::from(chose_suboptimal));
    }
}

impl<R> BanditAgent<R> {
    /// Display label given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of arms `K`, fixed at construction.
    pub fn arm_count(&self) -> usize {
        self.default_priors.len()
    }

    /// Access the priors the posterior resets to.
    pub fn default_priors(&self) -> &[BetaParams] {
        &self.default_priors
    }

    /// Access the current per-arm Beta posterior.
    pub fn posterior(&self) -> &[BetaParams] {
        &self.posterior
    }

    /// Per-arm posterior mean `alpha / (alpha + beta)`.
    pub fn posterior_means(&self) -> Vec<f64> {
        self.posterior.iter().map(BetaParams::mean).collect()
    }

    /// Chosen arms, oldest first.
    pub fn selection_history(&self) -> &[usize] {
        &self.selection_history
    }

    /// Per-arm selection counts, starting from 1.
    pub fn pull_count(&self) -> &[u64] {
        &self.pull_count
    }

    /// Observed rewards, oldest first, across all arms.
    pub fn reward_history(&self) -> &[u8] {
        &self.reward_history
    }

    /// Caller-recorded regret flags, oldest first.
    pub fn regret_log(&self) -> &[u8] {
        &self.regret_log
    }

    /// The most recently materialized snapshot, if any since the last clear.
    pub fn snapshot(&self) -> Option<&AgentSnapshot> {
        self.snapshot.as_ref()
    }
}

impl<R> fmt::Display for BanditAgent<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
