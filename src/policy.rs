//! `BanditPolicy`: the select / observe / reset cycle as a trait.
//!
//! Simulation drivers such as [`run_episode`][crate::run_episode] are written
//! against this trait so that other Bernoulli policies (for example a greedy
//! baseline) can be dropped into the same harness.

use rand::Rng;

use crate::{BanditAgent, Result};

/// Common interface for stateful Bernoulli bandit policies.
///
/// # Example
///
/// ```rust
/// use betabandit::{BanditAgent, BanditPolicy};
///
/// fn play_once<P: BanditPolicy>(policy: &mut P) -> usize {
///     let arm = policy.select_arm();
///     policy.observe_outcome(1, arm).unwrap();
///     arm
/// }
///
/// let mut agent = BanditAgent::with_seed("demo", [(1.0, 1.0), (1.0, 1.0)], 0).unwrap();
/// let arm = play_once(&mut agent);
/// assert!(arm < 2);
/// ```
pub trait BanditPolicy {
    fn arm_count(&self) -> usize;

    /// Pick an arm in `[0, arm_count)`.
    fn select_arm(&mut self) -> usize;

    /// Feed back a 0/1 reward for `choice`.
    fn observe_outcome(&mut self, reward: u8, choice: usize) -> Result<()>;

    /// Append an externally computed regret flag.
    fn record_regret(&mut self, chose_suboptimal: bool);

    fn reset_priors(&mut self);

    fn clear_history(&mut self);

    /// True for policies that always exploit their current estimate.
    fn is_greedy(&self) -> bool;
}

impl<R: Rng> BanditPolicy for BanditAgent<R> {
    fn arm_count(&self) -> usize {
        self.arm_count()
    }
    fn select_arm(&mut self) -> usize {
        self.select_arm()
    }
    fn observe_outcome(&mut self, reward: u8, choice: usize) -> Result<()> {
        self.observe_outcome(reward, choice)
    }
    fn record_regret(&mut self, chose_suboptimal: bool) {
        self.record_regret(chose_suboptimal);
    }
    fn reset_priors(&mut self) {
        self.reset_priors();
    }
    fn clear_history(&mut self) {
        self.clear_history();
    }
    fn is_greedy(&self) -> bool {
        false
    }
}
