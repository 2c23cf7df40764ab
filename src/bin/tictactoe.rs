//! Tic-tac-toe CLI
//!
//! Unified interface for:
//! - Playing an interactive match against the computer
//! - Analyzing positions with the minimax engine
//! - Running strategy-vs-strategy batches

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe with three computer difficulties", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive match
    Play(tictactoe::cli::commands::play::PlayArgs),

    /// Evaluate every legal move in a position
    Analyze(tictactoe::cli::commands::analyze::AnalyzeArgs),

    /// Run batch games between two strategies
    Selfplay(tictactoe::cli::commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => tictactoe::cli::commands::play::execute(args),
        Commands::Analyze(args) => tictactoe::cli::commands::analyze::execute(args),
        Commands::Selfplay(args) => tictactoe::cli::commands::selfplay::execute(args),
    }
}
