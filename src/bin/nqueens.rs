//! N-Queens local search from the command line.
//!
//! Run with: `cargo run --features cli --bin nqueens -- 8 --strategy sa`
//! Logging follows `RUST_LOG` (default `info`).

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use nqueens_search::hill_climbing::HillClimbingConfig;
use nqueens_search::{eval, RunConfig, RunController, StrategyKind};

#[derive(Parser, Debug)]
#[command(name = "nqueens")]
#[command(about = "Solve N-Queens with local search")]
struct Args {
    /// Number of queens (board is NxN)
    n: usize,

    /// Strategy: 1-4 or random, hill-climbing, simulated-annealing, genetic
    #[arg(short, long, default_value = "hill-climbing")]
    strategy: StrategyKind,

    /// Override the strategy's iteration, round or generation cap
    #[arg(short, long)]
    limit: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Allow up to this many consecutive sideways moves (hill climbing)
    #[arg(long)]
    sideways: Option<usize>,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    enable_tracing();
    let args = Args::parse();

    let mut config = RunConfig::new(args.n, args.strategy);
    if let Some(limit) = args.limit {
        config = config.with_iteration_limit(limit);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(max) = args.sideways {
        config = config.with_hill_climbing(HillClimbingConfig::default().with_sideways_moves(max));
    }

    let outcome = match RunController::run(&config) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!(%err, "invalid configuration");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("── {} on {}x{} ──\n", outcome.strategy, args.n, args.n);
    println!("Initial board (conflicts = {}):", eval::count_conflicts(&outcome.initial));
    println!("{}", outcome.initial);
    println!("Final board (conflicts = {}):", outcome.conflicts());
    println!("{}", outcome.board);
    println!(
        "Result: {} after {} iterations (score {}/{})",
        outcome.verdict, outcome.iterations, outcome.score, outcome.optimum
    );

    ExitCode::SUCCESS
}
