use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::{playable_actions, Agent};
use crate::error::AgentError;
use crate::game::Board;

/// One-ply heuristic picker.
///
/// In order of preference: an immediate win, a block of the opponent's
/// immediate win, a random move that does not let the opponent win by
/// stacking on top of it, and finally any random legal move.
pub struct GreedyAgent {
    rng: StdRng,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        GreedyAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, moves: &[usize]) -> usize {
        moves[self.rng.random_range(0..moves.len())]
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, board: &Board) -> Result<usize, AgentError> {
        let moves = playable_actions(board)?;
        let player = board.current_player().ok_or(AgentError::GameOver)?;

        if let Some(&col) = moves.iter().find(|&&col| board.check_win_for(player, col)) {
            return Ok(col);
        }
        if let Some(&col) = moves
            .iter()
            .find(|&&col| board.check_win_for(player.other(), col))
        {
            return Ok(col);
        }

        // Drop moves that hand the opponent a win in the same column.
        let mut safe = Vec::with_capacity(moves.len());
        for &col in &moves {
            let next = board.apply_move(col)?;
            if !next.check_win(col) {
                safe.push(col);
            }
        }

        if safe.is_empty() {
            Ok(self.pick(&moves))
        } else {
            Ok(self.pick(&safe))
        }
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
