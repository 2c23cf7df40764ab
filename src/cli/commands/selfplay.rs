//! Selfplay command - batch games between two strategies

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::board::Mark;
use crate::cli::output;
use crate::game::Game;
use crate::lines::Outcome;
use crate::strategy::Difficulty;

#[derive(Parser, Debug)]
#[command(about = "Run batch games between two strategies")]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Strategy playing X (moves first)
    #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
    pub x: Difficulty,

    /// Strategy playing O
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    pub o: Difficulty,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the summary as JSON
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Tallied results of a self-play batch
#[derive(Debug, Clone, Serialize)]
pub struct SelfplaySummary {
    pub games: usize,
    pub x_difficulty: Difficulty,
    pub o_difficulty: Difficulty,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

/// Play `games` matches between the two strategies and tally the outcomes
pub fn run_batch(
    games: usize,
    x: Difficulty,
    o: Difficulty,
    rng: &mut StdRng,
    progress: Option<&indicatif::ProgressBar>,
) -> Result<SelfplaySummary, crate::Error> {
    let mut summary = SelfplaySummary {
        games,
        x_difficulty: x,
        o_difficulty: o,
        x_wins: 0,
        o_wins: 0,
        draws: 0,
    };

    for _ in 0..games {
        let mut game = Game::new();
        while !game.is_over() {
            let difficulty = match game.to_move() {
                Mark::X => x,
                Mark::O => o,
            };
            game.play_computer(difficulty, rng)?;
        }

        match game.outcome() {
            Some(Outcome::Win { mark: Mark::X, .. }) => summary.x_wins += 1,
            Some(Outcome::Win { mark: Mark::O, .. }) => summary.o_wins += 1,
            _ => summary.draws += 1,
        }

        if let Some(pb) = progress {
            pb.inc(1);
            pb.set_message(format!(
                "X {} / O {} / draw {}",
                summary.x_wins, summary.o_wins, summary.draws
            ));
        }
    }

    Ok(summary)
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    };

    output::print_section(&format!(
        "Self-play: {} (X) vs {} (O), {} games",
        args.x, args.o, args.games
    ));

    let pb = output::create_selfplay_progress(args.games as u64);
    let summary = run_batch(args.games, args.x, args.o, &mut rng, Some(&pb))?;
    pb.finish_and_clear();

    output::print_subsection("Results");
    println!("  X wins: {}", summary.x_wins);
    println!("  O wins: {}", summary.o_wins);
    println!("  Draws:  {}", summary.draws);

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&summary).map_err(crate::Error::from)?;
        fs::write(path, json).map_err(|source| crate::Error::Io {
            operation: format!("write summary to {}", path.display()),
            source,
        })?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_tally_adds_up() {
        let mut rng = StdRng::seed_from_u64(9);
        let summary =
            run_batch(20, Difficulty::Easy, Difficulty::Easy, &mut rng, None).unwrap();
        assert_eq!(summary.games, 20);
        assert_eq!(summary.x_wins + summary.o_wins + summary.draws, 20);
    }

    #[test]
    fn test_hard_never_loses_to_random() {
        let mut rng = StdRng::seed_from_u64(42);
        let summary =
            run_batch(30, Difficulty::Easy, Difficulty::Hard, &mut rng, None).unwrap();
        assert_eq!(summary.x_wins, 0, "optimal O lost a game to random X");
    }

    #[test]
    fn test_hard_vs_hard_all_draws() {
        let mut rng = StdRng::seed_from_u64(0);
        let summary =
            run_batch(3, Difficulty::Hard, Difficulty::Hard, &mut rng, None).unwrap();
        assert_eq!(summary.draws, 3);
    }
}
