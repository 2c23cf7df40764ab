//! CLI infrastructure for the tic-tac-toe engine
//!
//! This module provides the command-line interface for playing interactive
//! matches, analyzing positions, and running strategy-vs-strategy batches.

pub mod commands;
pub mod output;
