//! Error taxonomy for agent construction and outcome reporting.
//!
//! Every variant is a contract violation by the caller; none are transient.

use thiserror::Error;

/// Errors raised synchronously by the call that violates the contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BanditError {
    /// Empty prior list, or a shape parameter that is not finite and strictly positive.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Arm index outside `[0, arm_count)`.
    #[error("invalid choice: arm {choice} out of range for {arm_count} arms")]
    InvalidChoice { choice: usize, arm_count: usize },
    /// Reward that is neither 0 nor 1.
    #[error("invalid reward: {0} (expected 0 or 1)")]
    InvalidReward(u8),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BanditError>;
