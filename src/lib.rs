//! Tic-tac-toe decision engine
//!
//! This crate provides:
//! - A 3x3 board model with deterministic move enumeration
//! - Win/draw evaluation exposing which line completed
//! - Three computer opponents: random, single-ply heuristic, and exhaustive
//!   minimax search
//! - A match session that alternates turns between human and computer moves
//! - A terminal front end for playing, analyzing positions, and running
//!   strategy-vs-strategy batches

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod strategy;

pub use board::{Board, Cell, Coord, Mark};
pub use error::{Error, Result};
pub use game::Game;
pub use lines::{Diagonal, Outcome, WinLine, evaluate, score};
pub use strategy::{Difficulty, apply_computer_move};
