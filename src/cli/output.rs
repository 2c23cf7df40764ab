//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::board::{Board, SIDE};
use crate::lines::Outcome;

/// Create a progress bar for self-play batches
pub fn create_selfplay_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Render the board with row/column coordinates for interactive play
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    0   1   2\n");
    for row in 0..SIDE {
        out.push_str(&format!("{row} "));
        for col in 0..SIDE {
            out.push_str(&format!(" {} ", board.get(row, col).to_char()));
            if col < SIDE - 1 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < SIDE - 1 {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

/// One-line description of a match result
pub fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win { mark, line } => {
            let cells = line.cells();
            format!(
                "{mark} wins on ({},{}) ({},{}) ({},{})",
                cells[0].0, cells[0].1, cells[1].0, cells[1].1, cells[2].0, cells[2].1
            )
        }
        Outcome::Draw => "Draw!".to_string(),
    }
}
