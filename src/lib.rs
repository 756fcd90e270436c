//! `betabandit`: a seedable Thompson-sampling agent for Bernoulli bandits.
//!
//! You have `K` alternatives and each play yields a binary outcome. A
//! [`BanditAgent`] keeps a Beta posterior per arm, samples it to choose the
//! next arm, and applies the Beta-Bernoulli conjugate update when you report
//! the outcome.
//!
//! ```rust
//! use betabandit::BanditAgent;
//!
//! let mut agent = BanditAgent::with_seed("ctr", [(1.0, 1.0), (1.0, 1.0)], 7).unwrap();
//! let arm = agent.select_arm();
//! agent.observe_outcome(1, arm).unwrap();
//! assert_eq!(agent.reward_history(), &[1]);
//! assert_eq!(agent.pull_count().iter().sum::<u64>(), 3);
//! ```
//!
//! **Pieces:**
//! - [`BanditAgent`]: selection, conjugate updates, reset/clear, history.
//! - [`BetaParams`]: one arm's `(alpha, beta)` pair.
//! - [`AgentConfig`]: name, priors, optional seed.
//! - [`AgentSnapshot`]: detached copy of posterior and histories for export.
//! - [`BanditPolicy`]: trait over the select/observe cycle.
//! - [`SharedAgent`]: one agent behind one mutex for concurrent callers.
//! - [`BernoulliArms`] / [`run_episode`]: ground-truth simulation that fills the regret log.
//!
//! **Randomness:** [`BanditAgent::new`] seeds from OS entropy. Use
//! [`BanditAgent::with_seed`] or [`BanditAgent::with_rng`] for reproducible runs.
//!
//! **Features:**
//! - `serde`: `Serialize`/`Deserialize` for config, Beta params, and snapshots.
//!
//! **Non-goals:** contextual bandits, non-Bernoulli rewards, multi-agent
//! coordination, and a persistence format.

mod error;
pub use error::*;

mod beta;
pub use beta::*;

mod config;
pub use config::*;

mod snapshot;
pub use snapshot::*;

mod thompson;
pub use thompson::*;

mod policy;
pub use policy::*;

mod shared;
pub use shared::*;

mod harness;
pub use harness::*;
