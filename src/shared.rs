//! A cloneable handle that puts one agent behind a single mutex.
//!
//! `select_arm` and `observe_outcome` both read-modify-write per-arm state, so
//! concurrent callers must serialize on the whole agent, not per field.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;

use crate::{AgentSnapshot, BanditAgent, Result};

/// Shared ownership of one [`BanditAgent`]. Clones refer to the same agent.
#[derive(Debug)]
pub struct SharedAgent<R = StdRng> {
    inner: Arc<Mutex<BanditAgent<R>>>,
}

impl<R> Clone for SharedAgent<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Rng> SharedAgent<R> {
    /// Take ownership of `agent` and share it.
    pub fn new(agent: BanditAgent<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(agent)),
        }
    }

    /// Locked [`BanditAgent::select_arm`].
    pub fn select_arm(&self) -> usize {
        self.inner.lock().select_arm()
    }

    /// Locked [`BanditAgent::observe_outcome`].
    pub fn observe_outcome(&self, reward: u8, choice: usize) -> Result<()> {
        self.inner.lock().observe_outcome(reward, choice)
    }

    /// Locked [`BanditAgent::reset_priors`].
    pub fn reset_priors(&self) {
        self.inner.lock().reset_priors();
    }

    /// Locked [`BanditAgent::clear_history`].
    pub fn clear_history(&self) {
        self.inner.lock().clear_history();
    }

    /// Locked [`BanditAgent::materialize_snapshot`].
    pub fn materialize_snapshot(&self) -> AgentSnapshot {
        self.inner.lock().materialize_snapshot()
    }

    /// Run `f` with the lock held, for compound operations that must not interleave.
    pub fn with<T>(&self, f: impl FnOnce(&mut BanditAgent<R>) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

impl<R> From<BanditAgent<R>> for SharedAgent<R> {
    fn from(agent: BanditAgent<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(agent)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_rounds_keep_accounting_consistent() {
        let agent = BanditAgent::with_seed("shared", vec![(1.0, 1.0); 3], 17).unwrap();
        let shared = SharedAgent::new(agent);
        thread::scope(|s| {
            for t in 0..4u8 {
                let h = shared.clone();
                s.spawn(move || {
                    for i in 0..25u8 {
                        h.with(|a| {
                            let c = a.select_arm();
                            a.observe_outcome((t + i) % 2, c).unwrap();
                        });
                    }
                });
            }
        });
        let snap = shared.materialize_snapshot();
        assert_eq!(snap.selection_history.len(), 100);
        assert_eq!(snap.reward_history.len(), 100);
        assert_eq!(snap.pull_count.iter().sum::<u64>(), 3 + 100);
        let shape_total: f64 = snap.posterior.iter().map(|p| p.alpha + p.beta).sum();
        assert_eq!(shape_total, 6.0 + 100.0);
    }

    #[test]
    fn clones_share_state() {
        let a = SharedAgent::from(BanditAgent::with_seed("s", vec![(1.0, 1.0); 2], 0).unwrap());
        let b = a.clone();
        a.observe_outcome(1, 0).unwrap();
        assert_eq!(b.with(|ag| ag.reward_history().to_vec()), vec![1]);
        b.clear_history();
        assert!(a.with(|ag| ag.reward_history().is_empty()));
    }
}
