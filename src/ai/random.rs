use crate::error::AgentError;
use crate::game::Board;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::{playable_actions, Agent};

/// Uniformly random open column, without allocating. `None` if the board is
/// full.
pub(crate) fn random_legal_action<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let mut open = (0..board.width()).filter(|&col| !board.grid().is_column_full(col));
    let count = open.clone().count();
    if count == 0 {
        return None;
    }
    open.nth(rng.random_range(0..count))
}

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Result<usize, AgentError> {
        playable_actions(board)?;
        random_legal_action(board, &mut self.rng).ok_or(AgentError::InvalidMove)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::with_seed(1);
        let board = Board::default().apply_move(0).unwrap();
        let legal = board.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&board).unwrap();
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_legal_action_skips_full_columns() {
        let mut board = Board::new(3, 2).unwrap();
        for col in [0, 0, 2, 2] {
            board = board.apply_move(col).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            assert_eq!(random_legal_action(&board, &mut rng), Some(1));
        }
    }

    #[test]
    fn test_random_legal_action_covers_all_columns() {
        let board = Board::default();
        let mut rng = StdRng::seed_from_u64(0);
        let seen: HashSet<usize> = (0..500)
            .filter_map(|_| random_legal_action(&board, &mut rng))
            .collect();
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::with_seed(1);
        let mut agent2 = RandomAgent::with_seed(2);
        let mut board = Board::default();

        let mut turn = 0;
        while !board.is_terminal() {
            let action = if turn % 2 == 0 {
                agent1.select_action(&board).unwrap()
            } else {
                agent2.select_action(&board).unwrap()
            };
            board = board.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(board.outcome().is_some());
    }

    #[test]
    fn test_random_agent_rejects_terminal_board() {
        let mut board = Board::default();
        for col in [0, 0, 1, 1, 2, 2, 3] {
            board = board.apply_move(col).unwrap();
        }
        let mut agent = RandomAgent::with_seed(1);
        assert!(matches!(agent.select_action(&board), Err(AgentError::GameOver)));
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
