use anyhow::{Context, Result};
use kdam::tqdm;
use ndarray::Array1;
use tracing::info;
use tracing_subscriber::EnvFilter;

use epsilon_greedy::utils::action_frequencies;
use epsilon_greedy::{ActionSpace, EpsilonGreedy, QTable};

extern crate structopt;

use structopt::StructOpt;

/// Run an epsilon-greedy policy against a single row of action values and
/// report how often each action was picked
#[derive(StructOpt, Debug)]
#[structopt(name = "epsilon-greedy")]
struct Cli {
    /// Number of discrete actions
    #[structopt(long = "n_actions", default_value = "4")]
    n_actions: usize,

    /// Exploration ratio, must be in [0, 1]
    #[structopt(long = "epsilon", default_value = "0.1")]
    epsilon: f64,

    /// Seed of the policy's random generator
    #[structopt(long = "seed", default_value = "0")]
    seed: u64,

    /// Number of selections to run
    #[structopt(long = "n_trials", short = "n", default_value = "10000")]
    n_trials: usize,

    /// Comma separated action values, all zeros when omitted
    #[structopt(long = "q_values")]
    q_values: Option<String>,

    /// Always exploit instead of sampling
    #[structopt(long = "evaluate")]
    evaluate: bool,
}

fn parse_row(raw: &str) -> Result<Array1<f64>> {
    raw.split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid action value {:?}", v))
        })
        .collect::<Result<Vec<f64>>>()
        .map(Array1::from)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli: Cli = Cli::from_args();

    let action_space = ActionSpace::new(cli.n_actions)?;
    let mut policy = EpsilonGreedy::new(&action_space, cli.epsilon, cli.seed)?;
    let mut q: QTable<u8> = QTable::from_env(&action_space, 0.0);
    if let Some(raw) = &cli.q_values {
        q.insert(0, parse_row(raw)?)?;
    }

    info!(
        n_actions = cli.n_actions,
        epsilon = cli.epsilon,
        seed = cli.seed,
        evaluate = cli.evaluate,
        "running selections"
    );

    let mut actions: Vec<usize> = Vec::with_capacity(cli.n_trials);
    for _ in tqdm!(0..cli.n_trials) {
        actions.push(policy.get_action(&q, &0, cli.evaluate));
    }

    println!("greedy action: {}", policy.select_greedy(&q, &0));
    for (action, freq) in action_frequencies(&actions, cli.n_actions)
        .iter()
        .enumerate()
    {
        println!("action {} \t freq {:.4}", action, freq);
    }
    Ok(())
}
