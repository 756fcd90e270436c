//! Property tests for BanditAgent bookkeeping and belief updates.

use betabandit::{BanditAgent, BetaParams};
use proptest::prelude::*;

/// One step of caller activity against an agent.
#[derive(Debug, Clone)]
enum Op {
    Select,
    Observe { reward: u8, arm: usize },
}

fn priors_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.1f64..10.0, 0.1f64..10.0), 1..6)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            Just(Op::Select),
            (0u8..=1, 0usize..16).prop_map(|(reward, arm)| Op::Observe { reward, arm }),
        ],
        0..80,
    )
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    /// Posterior never drops below the prior and only moves up, one unit per observation.
    #[test]
    fn posterior_is_monotone(priors in priors_strategy(), ops in ops_strategy(), seed in any::<u64>()) {
        let mut a = BanditAgent::with_seed("p", priors.clone(), seed).unwrap();
        let k = a.arm_count();
        let mut prev: Vec<BetaParams> = a.posterior().to_vec();
        for op in ops {
            if let Op::Observe { reward, arm } = op {
                let arm = arm % k;
                a.observe_outcome(reward, arm).unwrap();
                for (i, (now, before)) in a.posterior().iter().zip(&prev).enumerate() {
                    prop_assert!(now.alpha >= before.alpha && now.beta >= before.beta);
                    if i == arm {
                        prop_assert!((now.alpha - before.alpha - f64::from(reward)).abs() < 1e-9);
                        prop_assert!((now.beta - before.beta - f64::from(1 - reward)).abs() < 1e-9);
                    } else {
                        prop_assert_eq!(now, before);
                    }
                }
                prev = a.posterior().to_vec();
            }
        }
        for (p, d) in a.posterior().iter().zip(a.default_priors()) {
            prop_assert!(p.alpha >= d.alpha && p.beta >= d.beta);
        }
    }

    /// Histories grow by one per call, in call order; pulls sum to K + selections.
    #[test]
    fn history_and_pull_accounting(priors in priors_strategy(), ops in ops_strategy(), seed in any::<u64>()) {
        let mut a = BanditAgent::with_seed("p", priors, seed).unwrap();
        let k = a.arm_count();
        let mut picks = Vec::new();
        let mut rewards = Vec::new();
        for op in ops {
            match op {
                Op::Select => {
                    let c = a.select_arm();
                    prop_assert!(c < k);
                    picks.push(c);
                }
                Op::Observe { reward, arm } => {
                    a.observe_outcome(reward, arm % k).unwrap();
                    rewards.push(reward);
                }
            }
        }
        prop_assert_eq!(a.selection_history(), picks.as_slice());
        prop_assert_eq!(a.reward_history(), rewards.as_slice());
        prop_assert_eq!(a.pull_count().iter().sum::<u64>(), (k + picks.len()) as u64);
        for arm in 0..k {
            let n = picks.iter().filter(|&&c| c == arm).count() as u64;
            prop_assert_eq!(a.pull_count()[arm], 1 + n);
        }
    }

    /// reset_priors restores the prior exactly and leaves history alone; clear wipes everything.
    #[test]
    fn reset_and_clear(priors in priors_strategy(), ops in ops_strategy(), seed in any::<u64>()) {
        let mut a = BanditAgent::with_seed("p", priors.clone(), seed).unwrap();
        let k = a.arm_count();
        for op in ops {
            match op {
                Op::Select => { a.select_arm(); }
                Op::Observe { reward, arm } => a.observe_outcome(reward, arm % k).unwrap(),
            }
        }
        let picks = a.selection_history().to_vec();
        let pulls = a.pull_count().to_vec();
        let rewards = a.reward_history().to_vec();

        a.reset_priors();
        let once = a.posterior().to_vec();
        a.reset_priors();
        prop_assert_eq!(a.posterior(), once.as_slice());
        let expected: Vec<BetaParams> = priors.iter().copied().map(BetaParams::from).collect();
        prop_assert_eq!(a.posterior(), expected.as_slice());
        prop_assert_eq!(a.selection_history(), picks.as_slice());
        prop_assert_eq!(a.pull_count(), pulls.as_slice());
        prop_assert_eq!(a.reward_history(), rewards.as_slice());

        a.clear_history();
        prop_assert!(a.selection_history().is_empty());
        prop_assert!(a.reward_history().is_empty());
        prop_assert!(a.regret_log().is_empty());
        let ones = vec![1u64; k];
        prop_assert_eq!(a.pull_count(), ones.as_slice());
        prop_assert_eq!(a.posterior(), expected.as_slice());
    }

    /// Out-of-range arms and non-binary rewards are rejected without side effects.
    #[test]
    fn invalid_inputs_rejected(k in 1usize..6, bad_arm in 0usize..64, bad_reward in 2u8..=255) {
        let mut a = BanditAgent::with_seed("p", vec![(1.0, 1.0); k], 0).unwrap();
        prop_assert!(a.observe_outcome(0, k + bad_arm).is_err());
        prop_assert!(a.observe_outcome(bad_reward, 0).is_err());
        prop_assert!(a.reward_history().is_empty());
        prop_assert_eq!(a.posterior(), a.default_priors());
    }
}
