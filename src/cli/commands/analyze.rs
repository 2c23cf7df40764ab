//! Analyze command - minimax evaluation of a position

use anyhow::Result;
use clap::Parser;

use crate::board::{Board, Mark};
use crate::cli::output;
use crate::lines;
use crate::strategy::minimax;

#[derive(Parser, Debug)]
#[command(about = "Evaluate every legal move in a position")]
pub struct AnalyzeArgs {
    /// Board as 9 cell characters, e.g. "XX./OO./..."
    #[arg(long, short = 'b')]
    pub board: String,

    /// Mark the computer plays
    #[arg(long, short = 'm', default_value = "O")]
    pub mark: char,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let mark = parse_mark(args.mark)?;

    output::print_section(&format!("Position analysis for {mark}"));
    println!("\n{board}");

    if let Some(outcome) = lines::evaluate(&board) {
        println!("\nTerminal position: {}", output::describe_outcome(outcome));
        return Ok(());
    }

    output::print_subsection("Move values (+10 win, 0 draw, -10 loss)");
    for (row, col) in board.available_moves() {
        let mut child = board;
        child.set(row, col, mark.to_cell());
        let value = minimax::minimax(&child, mark, false);
        println!("  ({row}, {col})  {value:+}");
    }

    if let Some((row, col)) = minimax::choose_best_move(&board, mark) {
        println!("\nBest move: ({row}, {col})");
    }

    Ok(())
}

fn parse_mark(c: char) -> Result<Mark, crate::Error> {
    match c {
        'X' | 'x' => Ok(Mark::X),
        'O' | 'o' | '0' => Ok(Mark::O),
        _ => Err(crate::Error::InvalidCellCharacter {
            character: c,
            position: 0,
            context: "mark argument".to_string(),
        }),
    }
}
