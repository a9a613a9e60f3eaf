//! The four-phase search loop: select, expand, simulate, backpropagate.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, trace};

use super::config::MctsConfig;
use super::tree::{MctsTree, NodeId};
use crate::ai::random::random_legal_action;
use crate::error::{MoveError, SearchError};
use crate::game::Board;

/// Visit statistics for one root child.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildStats {
    pub action: usize,
    pub visits: u32,
    pub average_reward: f64,
}

/// Result of a finished search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Recommended column.
    pub action: usize,
    pub iterations: u32,
    pub tree_size: usize,
    pub elapsed: Duration,
    /// Root children in expansion order.
    pub children: Vec<ChildStats>,
}

/// One search over a tree rooted at a single board. Dropped after the
/// decision is made.
pub struct MctsSearch {
    tree: MctsTree,
    exploration: f64,
    iterations: u32,
}

impl MctsSearch {
    pub fn new(board: Board, exploration: f64) -> Result<Self, SearchError> {
        if board.is_terminal() {
            return Err(SearchError::TerminalPosition);
        }
        Ok(MctsSearch {
            tree: MctsTree::new(board),
            exploration,
            iterations: 0,
        })
    }

    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }

    /// Completed iterations so far.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Selection and expansion: descend by UCB1 until reaching a terminal
    /// node or a node with untried actions, then expand one action there.
    fn select_leaf(&mut self) -> Result<NodeId, MoveError> {
        let mut current = self.tree.root();
        loop {
            let node = self.tree.get(current);
            if node.board().is_terminal() {
                return Ok(current);
            }
            if !node.is_fully_expanded() {
                return Ok(self.tree.expand(current)?.unwrap_or(current));
            }
            match self.tree.select_child(current, self.exploration) {
                Some(child) => current = child,
                None => return Ok(current),
            }
        }
    }

    /// Run one full iteration.
    pub fn iterate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SearchError> {
        let leaf = self.select_leaf()?;
        let payoff = rollout(*self.tree.get(leaf).board(), rng)?;
        self.tree.backpropagate(leaf, payoff as f64);
        self.iterations += 1;
        Ok(())
    }

    /// Recommended column: the root child with the best average for the side
    /// to move. `None` until at least one iteration has run.
    pub fn best_action(&self) -> Option<usize> {
        self.tree
            .best_child(self.tree.root())
            .and_then(|id| self.tree.get(id).action())
    }

    pub fn root_stats(&self) -> Vec<ChildStats> {
        let root = self.tree.get(self.tree.root());
        root.children()
            .iter()
            .filter_map(|&id| {
                let child = self.tree.get(id);
                child.action().map(|action| ChildStats {
                    action,
                    visits: child.visits(),
                    average_reward: child.average_reward(),
                })
            })
            .collect()
    }

    /// Iterate until the time budget (or iteration cap) is spent, then report
    /// the recommended action.
    ///
    /// The budget is checked between iterations only, so the last iteration
    /// may overrun it by one rollout. At least one iteration always runs.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        config: &MctsConfig,
        rng: &mut R,
    ) -> Result<SearchResult, SearchError> {
        let budget = config.time_budget();
        let start = Instant::now();

        loop {
            self.iterate(rng)?;
            if config
                .max_iterations
                .is_some_and(|max| self.iterations >= max)
            {
                break;
            }
            if start.elapsed() >= budget {
                break;
            }
        }

        let elapsed = start.elapsed();
        let children = self.root_stats();
        for child in &children {
            trace!(
                action = child.action,
                visits = child.visits,
                average = child.average_reward,
                "root child"
            );
        }

        let action = self
            .best_action()
            .ok_or(SearchError::TerminalPosition)?;

        debug!(
            action,
            iterations = self.iterations,
            tree_size = self.tree.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "search complete"
        );

        Ok(SearchResult {
            action,
            iterations: self.iterations,
            tree_size: self.tree.len(),
            elapsed,
            children,
        })
    }
}

/// Play uniformly random moves on a copy of `board` until the game ends and
/// return the payoff from A's perspective. No tree nodes are created.
pub fn rollout<R: Rng + ?Sized>(mut board: Board, rng: &mut R) -> Result<i8, MoveError> {
    while !board.is_terminal() {
        let Some(col) = random_legal_action(&board, rng) else {
            break;
        };
        board = board.apply_move(col)?;
    }
    Ok(board.payoff())
}

/// Build a fresh tree at `board`, search it under `config`, and discard it.
pub fn run_mcts<R: Rng + ?Sized>(
    board: &Board,
    config: &MctsConfig,
    rng: &mut R,
) -> Result<SearchResult, SearchError> {
    MctsSearch::new(*board, config.exploration)?.run(config, rng)
}
