//! Simulation glue: a ground-truth Bernoulli environment and an episode driver.
//!
//! The agent never knows which arm is optimal. [`run_episode`] does, and it is
//! the one that writes each step's regret flag into the policy's regret log.

use rand::Rng;
use tracing::debug;

use crate::{BanditError, BanditPolicy, Result};

/// Fixed success probabilities, one per arm.
#[derive(Debug, Clone, PartialEq)]
pub struct BernoulliArms {
    probs: Vec<f64>,
}

impl BernoulliArms {
    /// Build from per-arm success probabilities, each in `[0, 1]`.
    pub fn new(probs: Vec<f64>) -> Result<Self> {
        if probs.is_empty() {
            return Err(BanditError::InvalidConfiguration(
                "environment needs at least one arm".to_string(),
            ));
        }
        if let Some((i, p)) = probs
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.is_finite() && (0.0..=1.0).contains(*p)))
        {
            return Err(BanditError::InvalidConfiguration(format!(
                "arm {i}: success probability must be in [0, 1], got {p}"
            )));
        }
        Ok(Self { probs })
    }

    /// Number of arms.
    pub fn arm_count(&self) -> usize {
        self.probs.len()
    }

    /// Access the true success probabilities.
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Arm with the highest success probability (lowest index on ties).
    pub fn optimal_arm(&self) -> usize {
        crate::argmax_first(&self.probs).unwrap_or(0)
    }

    /// Play `arm` once, returning 1 on success and 0 otherwise.
    pub fn pull<R: Rng + ?Sized>(&self, arm: usize, rng: &mut R) -> Result<u8> {
        let p = *self.probs.get(arm).ok_or(BanditError::InvalidChoice {
            choice: arm,
            arm_count: self.arm_count(),
        })?;
        Ok(u8::from(rng.random::<f64>() < p))
    }
}

/// Totals from one [`run_episode`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EpisodeSummary {
    /// Rounds played.
    pub steps: usize,
    /// Successes observed across all rounds.
    pub total_reward: u64,
    /// Steps on which a suboptimal arm was played.
    pub total_regret: u64,
}

/// Run `steps` rounds of select, pull, observe, and regret logging.
///
/// The policy's state is not reset first; call `clear_history` between
/// episodes if they should be independent.
pub fn run_episode<P, R>(
    policy: &mut P,
    env: &BernoulliArms,
    steps: usize,
    rng: &mut R,
) -> Result<EpisodeSummary>
where
    P: BanditPolicy + ?Sized,
    R: Rng + ?Sized,
{
    if policy.arm_count() != env.arm_count() {
        return Err(BanditError::InvalidConfiguration(format!(
            "policy has {} arms but environment has {}",
            policy.arm_count(),
            env.arm_count()
        )));
    }
    let optimal = env.optimal_arm();
    let mut summary = EpisodeSummary::default();
    for _ in 0..steps {
        let choice = policy.select_arm();
        let reward = env.pull(choice, rng)?;
        policy.observe_outcome(reward, choice)?;
        policy.record_regret(choice != optimal);
        summary.steps += 1;
        summary.total_reward += u64::from(reward);
        summary.total_regret += u64::from(choice != optimal);
    }
    debug!(
        steps = summary.steps,
        reward = summary.total_reward,
        regret = summary.total_regret,
        "episode finished"
    );
    Ok(summary)
}
