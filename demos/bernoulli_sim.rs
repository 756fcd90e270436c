use betabandit::{run_episode, AgentConfig, BanditAgent, BernoulliArms};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    // Simulated true click-through rates.
    let env = BernoulliArms::new(vec![0.04, 0.05, 0.07]).unwrap();

    let mut agent = BanditAgent::from_config(AgentConfig::uniform("ctr", 3).with_seed(0)).unwrap();

    // Separate RNG to simulate the environment.
    let mut world = StdRng::seed_from_u64(123);

    for episode in 0..3 {
        let s = run_episode(&mut agent, &env, 5_000, &mut world).unwrap();
        let snap = agent.materialize_snapshot();
        eprintln!(
            "episode={} agent={} reward={} regret={} pulls={:?} means={:.4?}",
            episode,
            agent,
            s.total_reward,
            s.total_regret,
            snap.pull_count,
            agent.posterior_means()
        );
        agent.clear_history();
    }
}
