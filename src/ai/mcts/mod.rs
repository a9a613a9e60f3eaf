//! Time-bounded Monte Carlo Tree Search with random rollouts.
//!
//! Each iteration runs four phases against a tree rooted at the position to
//! move from:
//!
//! 1. **Selection**: descend from the root by UCB1 until reaching a terminal
//!    node or a node with untried actions
//! 2. **Expansion**: pop one untried action and attach the successor as a
//!    new child
//! 3. **Simulation**: play uniformly random moves from the new child until
//!    the game ends
//! 4. **Backpropagation**: add one visit and the rollout payoff (always from
//!    player A's perspective) to every node on the path back to the root
//!
//! Player A picks children maximizing `avg + sqrt(c * ln(N) / n)`; player B
//! picks children minimizing `avg - sqrt(c * ln(N) / n)`. When the budget
//! runs out the root child with the best plain average is recommended.
//!
//! # Usage
//!
//! ```rust
//! use mcts_connect_four::ai::mcts::{run_mcts, MctsConfig};
//! use mcts_connect_four::game::Board;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let board = Board::new(7, 6).unwrap();
//! let config = MctsConfig::for_testing(200);
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = run_mcts(&board, &config, &mut rng).unwrap();
//! assert!(result.action < 7);
//! ```
//!
//! The tree is memory-bounded only by the time budget: every iteration adds
//! at most one node.

pub mod config;
pub mod search;
pub mod tree;

pub use config::MctsConfig;
pub use search::{rollout, run_mcts, ChildStats, MctsSearch, SearchResult};
pub use tree::{MctsNode, MctsTree, NodeId};
