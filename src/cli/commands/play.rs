//! Play command - interactive match against the computer

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::board::SIDE;
use crate::cli::output;
use crate::game::Game;
use crate::strategy::Difficulty;

#[derive(Parser, Debug)]
#[command(about = "Play an interactive match")]
pub struct PlayArgs {
    /// Computer difficulty
    #[arg(long, short = 'd', value_enum, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// Two human players, no computer
    #[arg(long)]
    pub two_player: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    };

    let mut game = Game::new();
    if args.two_player {
        output::print_section("Tic-tac-toe: two players");
    } else {
        output::print_section(&format!(
            "Tic-tac-toe: you are X, computer is O ({})",
            args.difficulty
        ));
    }

    loop {
        println!("\n{}", output::render_board(game.board()));

        if let Some(outcome) = game.outcome() {
            println!("{}", output::describe_outcome(outcome));
            return Ok(());
        }

        let human_turn = args.two_player || game.to_move() == crate::board::Mark::X;
        if human_turn {
            print!("{} to move (row col or 1-9): ", game.to_move());
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                println!();
                return Ok(());
            };
            let input = line?;
            let input = input.trim();
            if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
                return Ok(());
            }

            let (row, col) = match parse_move(input) {
                Ok(coord) => coord,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };

            if let Err(e) = game.play(row, col) {
                println!("{e}");
            }
        } else {
            game.play_computer(args.difficulty, &mut rng)?;
            println!("Computer moved.");
        }
    }
}

/// Parse a move as `row col` or as a single cell number 1-9 (row-major)
fn parse_move(input: &str) -> Result<(usize, usize), crate::Error> {
    let invalid = || crate::Error::InvalidMoveInput {
        input: input.to_string(),
    };

    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        [single] => {
            let n: usize = single.parse().map_err(|_| invalid())?;
            if (1..=SIDE * SIDE).contains(&n) {
                Ok(((n - 1) / SIDE, (n - 1) % SIDE))
            } else {
                Err(invalid())
            }
        }
        [row, col] => {
            let row: usize = row.parse().map_err(|_| invalid())?;
            let col: usize = col.parse().map_err(|_| invalid())?;
            Ok((row, col))
        }
        _ => Err(invalid()),
    }
}
