use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::agent::{playable_actions, Agent};
use super::mcts::{run_mcts, MctsConfig, SearchResult};
use crate::error::AgentError;
use crate::game::Board;

/// Search-backed agent.
///
/// Before each move one uniform sample is drawn; with probability
/// `random_move_prob` a random legal column is played and no search runs.
/// Otherwise a fresh tree is grown for the configured time budget and
/// discarded after the decision.
pub struct MonteCarloAgent {
    config: MctsConfig,
    rng: StdRng,
    last_search: Option<SearchResult>,
}

impl MonteCarloAgent {
    pub fn new(config: MctsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        MonteCarloAgent {
            config,
            rng,
            last_search: None,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Statistics of the most recent search, `None` if the last move came
    /// from the random override.
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }
}

impl Agent for MonteCarloAgent {
    fn select_action(&mut self, board: &Board) -> Result<usize, AgentError> {
        let legal = playable_actions(board)?;

        if self.rng.random::<f64>() < self.config.random_move_prob {
            self.last_search = None;
            let action = legal[self.rng.random_range(0..legal.len())];
            debug!(action, "random override");
            return Ok(action);
        }

        let result = run_mcts(board, &self.config, &mut self.rng)?;
        let action = result.action;
        self.last_search = Some(result);
        Ok(action)
    }

    fn name(&self) -> &str {
        "Monte Carlo"
    }
}
