use tracing::debug;

use crate::ai::Agent;
use crate::error::{GameError, SizeError};
use crate::game::{Board, GameOutcome, Player};

/// Result of a single game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    /// Columns played, in order.
    pub moves: Vec<usize>,
    pub final_board: Board,
}

/// A game on a fixed board size. `first` always plays X (player A).
#[derive(Debug, Clone, Copy)]
pub struct Game {
    width: usize,
    height: usize,
}

impl Game {
    pub fn new(width: usize, height: usize) -> Result<Self, SizeError> {
        Board::new(width, height)?;
        Ok(Game { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Play from an empty board until the game ends. `on_board` sees every
    /// snapshot, including the initial and final ones.
    pub fn play<F, S>(
        &self,
        first: &mut F,
        second: &mut S,
        mut on_board: impl FnMut(&Board),
    ) -> Result<GameRecord, GameError>
    where
        F: Agent + ?Sized,
        S: Agent + ?Sized,
    {
        let mut board = Board::new(self.width, self.height)?;
        let mut moves = Vec::with_capacity(self.width * self.height);

        loop {
            on_board(&board);

            let Some(player) = board.current_player() else {
                let outcome = board.outcome().unwrap_or(GameOutcome::Draw);
                debug!(?outcome, moves = moves.len(), "game over");
                return Ok(GameRecord {
                    outcome,
                    moves,
                    final_board: board,
                });
            };

            let (action, agent) = match player {
                Player::A => (first.select_action(&board)?, first.name()),
                Player::B => (second.select_action(&board)?, second.name()),
            };

            board = board
                .apply_move(action)
                .map_err(|_| GameError::IllegalAction {
                    agent: agent.to_string(),
                    action,
                    legal: board.legal_actions(),
                })?;
            debug!(player = player.name(), action, "move played");
            moves.push(action);
        }
    }
}
