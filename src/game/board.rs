use std::fmt;

use super::grid::{Cell, Grid, WIN_LENGTH};
use super::player::{Actor, Player};
use crate::error::{MoveError, SizeError};

/// Horizontal, vertical, and the two diagonals.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Board snapshot: grid contents, side to move, and terminal payoff.
///
/// Every transition returns a new `Board`; a snapshot is never mutated once
/// built. The payoff is from player A's perspective (`+1` A won, `-1` B won,
/// `0` draw) and is only meaningful once the actor is `Terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Grid,
    actor: Actor,
    payoff: i8,
}

impl Board {
    /// Create an empty board with player A to move.
    pub fn new(width: usize, height: usize) -> Result<Self, SizeError> {
        Ok(Board {
            grid: Grid::new(width, height)?,
            actor: Actor::ToMove(Player::A),
            payoff: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell at `(col, row)`, `None` outside the board.
    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        (col < self.width() && row < self.height()).then(|| self.grid.get(col, row))
    }

    /// Pieces already in `col`, `None` for a column off the board.
    pub fn column_height(&self, col: usize) -> Option<usize> {
        (col < self.width()).then(|| self.grid.column_height(col))
    }

    pub fn actor(&self) -> Actor {
        self.actor
    }

    /// Side to move, `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.actor {
            Actor::ToMove(player) => Some(player),
            Actor::Terminal => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.actor == Actor::Terminal
    }

    /// Terminal payoff from A's perspective; 0 while the game is running.
    pub fn payoff(&self) -> i8 {
        self.payoff
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_terminal() {
            return None;
        }
        Some(match self.payoff {
            1 => GameOutcome::Winner(Player::A),
            -1 => GameOutcome::Winner(Player::B),
            _ => GameOutcome::Draw,
        })
    }

    /// Number of pieces on the board.
    pub fn move_count(&self) -> usize {
        (0..self.width()).map(|col| self.grid.column_height(col)).sum()
    }

    /// Columns that still have room, in ascending order.
    pub fn legal_actions(&self) -> Vec<usize> {
        (0..self.width())
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }

    /// Would the side to move complete a line by dropping into `col`?
    /// Always false on a terminal board.
    pub fn check_win(&self, col: usize) -> bool {
        match self.actor {
            Actor::ToMove(player) => self.check_win_for(player, col),
            Actor::Terminal => false,
        }
    }

    /// Would `player` complete a line by dropping into `col`?
    ///
    /// Only the four axes through the landing square are walked, so the cost
    /// is bounded regardless of board size.
    pub fn check_win_for(&self, player: Player, col: usize) -> bool {
        if self.grid.is_column_full(col) {
            return false;
        }
        let row = self.grid.column_height(col);
        let cell = player.to_cell();
        AXES.iter()
            .any(|&axis| self.grid.count_line(col, row, cell, axis) >= WIN_LENGTH)
    }

    /// Apply a move and return the successor board. `self` is left untouched
    /// on both success and failure.
    pub fn apply_move(&self, col: usize) -> Result<Board, MoveError> {
        let player = match self.actor {
            Actor::ToMove(player) => player,
            Actor::Terminal => return Err(MoveError::GameAlreadyTerminal),
        };
        if col >= self.width() {
            return Err(MoveError::InvalidMove {
                column: col,
                width: self.width(),
            });
        }
        if self.grid.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let wins = self.check_win_for(player, col);
        let mut next = *self;
        next.grid.place(col, player.to_cell());

        if wins {
            next.actor = Actor::Terminal;
            next.payoff = player.sign();
        } else if next.grid.is_full() {
            next.actor = Actor::Terminal;
            next.payoff = 0;
        } else {
            next.actor = Actor::ToMove(player.other());
        }
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            grid: Grid::new(super::DEFAULT_WIDTH, super::DEFAULT_HEIGHT)
                .unwrap_or_else(|_| unreachable!("default dimensions are within capacity")),
            actor: Actor::ToMove(Player::A),
            payoff: 0,
        }
    }
}

impl fmt::Display for Board {
    /// Top row first, then a rule, the column indices, and a closing rule.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.width() * 2 - 1);
        for row in (0..self.height()).rev() {
            let line: Vec<String> = (0..self.width())
                .map(|col| self.grid.get(col, row).symbol().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        writeln!(f, "{rule}")?;
        let indices: Vec<String> = (0..self.width()).map(|col| col.to_string()).collect();
        writeln!(f, "{}", indices.join(" "))?;
        write!(f, "{rule}")
    }
}
