use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use memory_match::{BoardSize, GameConfig, MemoryGame};

mod repl;

use repl::{Repl, ReplConfig};

#[derive(Parser)]
#[command(name = "memory")]
#[command(about = "A memory-matching card game for the terminal")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cards on the first board (even, 4-100)
    #[arg(short = 'n', long)]
    cards: Option<BoardSize>,

    /// Seed for reproducible deals
    #[arg(short, long)]
    seed: Option<u64>,

    /// How long a mismatched pair stays visible, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

fn main() -> Result<()> {
    // Logs go to stderr so the board stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(cards) = cli.cards {
        config = config.with_default_cards(cards);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(delay_ms) = cli.delay_ms {
        config = config.with_reveal_delay(Duration::from_millis(delay_ms));
    }

    let game = MemoryGame::new(config);
    let mut repl = Repl::new(game, ReplConfig::default())?;
    repl.run()
}
