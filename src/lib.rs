//! # MCTS Connect Four
//!
//! A gravity-fed four-in-a-row game on a rectangular grid, played by agents
//! ranging from a human at the terminal to a time-bounded Monte Carlo Tree
//! Search.
//!
//! ## Modules
//!
//! - [`game`]: Board state machine: legal moves, win detection, payoff
//! - [`ai`]: Agent trait, random/greedy/human pickers, MCTS engine
//! - [`play`]: Game driver and matchup statistics
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod play;
