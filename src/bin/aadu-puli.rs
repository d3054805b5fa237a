//! Play one match of Aadu Puli between two agents and print the result.
//!
//! ```text
//! aadu-puli --tiger minimax --goat greedy --depth 4 --seed 7
//! RUST_LOG=aadu_puli=debug aadu-puli --max-turns 40
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aadu_puli::{AaduPuli, AgentKind, MatchConfig, MatchEnd, MatchRunner, StateView};

#[derive(Debug, Parser)]
#[command(name = "aadu-puli", version, about = "Tigers and goats match runner")]
struct Args {
    /// JSON match config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth for minimax agents
    #[arg(long)]
    depth: Option<u32>,

    /// Node budget per minimax search
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Agent for the tigers
    #[arg(long, value_enum)]
    tiger: Option<AgentKind>,

    /// Agent for the goats
    #[arg(long, value_enum)]
    goat: Option<AgentKind>,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many moves
    #[arg(long)]
    max_turns: Option<usize>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn match_config(&self) -> aadu_puli::Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::from_json_file(path)?,
            None => MatchConfig::default(),
        };

        if let Some(depth) = self.depth {
            config.search.depth = depth;
        }
        if self.max_nodes.is_some() {
            config.search.max_nodes = self.max_nodes;
        }
        if let Some(tiger) = self.tiger {
            config.tiger = tiger;
        }
        if let Some(goat) = self.goat {
            config.goat = goat;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(max_turns) = self.max_turns {
            config.max_turns = max_turns;
        }
        Ok(config)
    }
}

fn main() -> aadu_puli::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.match_config()?;
    let game = AaduPuli::standard();

    let report = MatchRunner::run_configured(game.clone(), &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{:?} (tigers) vs {:?} (goats), depth {}, seed {}",
        config.tiger, config.goat, config.search.depth, config.seed
    );
    for (i, mv) in report.moves.iter().enumerate() {
        println!("{:>3}. {mv}", i + 1);
    }

    let view = StateView::new(&game, &report.final_state);
    match report.end {
        MatchEnd::Winner(side) => println!("{side} wins after {} moves", report.turns),
        MatchEnd::Stalled(side) => println!("{side} has no move after {} moves", report.turns),
        MatchEnd::TurnLimit => println!("turn limit reached after {} moves", report.turns),
    }
    println!(
        "goats placed {}, captured {}",
        view.goats_placed, view.goats_captured
    );

    Ok(())
}
