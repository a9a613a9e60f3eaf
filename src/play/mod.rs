//! Game driver: plays two agents against each other and aggregates results
//! over many games.

mod game;
mod stats;

pub use game::{Game, GameRecord};
pub use stats::{simulate_matchup, MatchStats};
