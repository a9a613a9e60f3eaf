//! Core Connect Four game logic: a fixed-capacity grid, player types, and the
//! board state machine with immutable transitions.

mod board;
mod grid;
mod player;

pub use board::{Board, GameOutcome};
pub use grid::{Cell, Grid, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH, WIN_LENGTH};
pub use player::{Actor, Player};
