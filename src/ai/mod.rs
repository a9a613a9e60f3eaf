mod agent;
mod greedy;
mod human;
pub mod mcts;
mod monte_carlo;
mod random;

pub use agent::{Agent, AgentChoice, AgentKind, ConsoleHuman};
pub use greedy::GreedyAgent;
pub use human::{ConsoleInput, HumanAgent, LineSource};
pub use mcts::MctsConfig;
pub use monte_carlo::MonteCarloAgent;
pub use random::RandomAgent;
