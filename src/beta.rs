//! Beta shape parameters for a single arm.
//!
//! A `BetaParams` is both the prior an arm starts from and the posterior it
//! accumulates. Updates only ever add, so a posterior never drops below its prior.

use rand::Rng;
use rand_distr::{Beta, Distribution};

use crate::{BanditError, Result};

/// Shape parameters `(alpha, beta)` of a Beta distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaParams {
    /// Pseudo-count of successes (must be > 0).
    pub alpha: f64,
    /// Pseudo-count of failures (must be > 0).
    pub beta: f64,
}

impl BetaParams {
    /// Construct after checking both shapes are finite and strictly positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        let p = Self { alpha, beta };
        p.validate()?;
        Ok(p)
    }

    /// Beta(1, 1): the uniform prior.
    pub const fn uniform() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
        }
    }

    /// Check both shapes are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let ok = |x: f64| x.is_finite() && x > 0.0;
        if ok(self.alpha) && ok(self.beta) {
            Ok(())
        } else {
            Err(BanditError::InvalidConfiguration(format!(
                "beta shape parameters must be finite and > 0, got ({}, {})",
                self.alpha, self.beta
            )))
        }
    }

    /// Posterior mean `alpha / (alpha + beta)`.
    pub fn mean(&self) -> f64 {
        let denom = self.alpha + self.beta;
        if denom <= 0.0 {
            0.5
        } else {
            self.alpha / denom
        }
    }

    /// Variance `alpha * beta / ((alpha + beta)^2 (alpha + beta + 1))`.
    pub fn variance(&self) -> f64 {
        let s = self.alpha + self.beta;
        self.alpha * self.beta / (s * s * (s + 1.0))
    }

    /// Beta-Bernoulli conjugate update for a binary reward.
    ///
    /// `alpha += reward`, `beta += 1 - reward`. The caller guarantees `reward <= 1`.
    pub(crate) fn observe(&mut self, reward: u8) {
        debug_assert!(reward <= 1);
        let r = f64::from(reward);
        self.alpha += r;
        self.beta += 1.0 - r;
    }

    /// Draw one success-probability sample.
    ///
    /// Falls back to the mean if the distribution cannot be built, which only
    /// happens for shapes that `validate` would reject.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match Beta::new(self.alpha, self.beta) {
            Ok(dist) => dist.sample(rng),
            Err(_) => self.mean(),
        }
    }
}

impl Default for BetaParams {
    fn default() -> Self {
        Self::uniform()
    }
}

impl From<(f64, f64)> for BetaParams {
    fn from((alpha, beta): (f64, f64)) -> Self {
        Self { alpha, beta }
    }
}

impl From<[f64; 2]> for BetaParams {
    fn from([alpha, beta]: [f64; 2]) -> Self {
        Self { alpha, beta }
    }
}
