//! Search configuration parameters.

use std::time::Duration;

/// Configuration for the time-bounded tree search and its random override.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Wall-clock budget per move, in seconds. Checked once per iteration.
    pub time_budget_secs: f64,

    /// Stop after this many iterations even if time remains.
    pub max_iterations: Option<u32>,

    /// Constant under the square root of the UCB1 bonus:
    /// `avg ± sqrt(exploration * ln(N) / n)`. 2.0 is classic UCB1.
    pub exploration: f64,

    /// Probability of playing a uniformly random legal move instead of
    /// searching. Off by default; a small value such as 0.05 keeps repeated
    /// self-play from replaying the same game.
    pub random_move_prob: f64,

    /// Seed for the agent's generator; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            time_budget_secs: 2.0,
            max_iterations: None,
            exploration: 2.0,
            random_move_prob: 0.0,
            seed: None,
        }
    }
}

impl MctsConfig {
    /// Fast, deterministic config for tests: iteration-bounded, no random
    /// override, fixed seed.
    pub fn for_testing(iterations: u32) -> Self {
        MctsConfig {
            time_budget_secs: 60.0,
            max_iterations: Some(iterations),
            exploration: 2.0,
            random_move_prob: 0.0,
            seed: Some(42),
        }
    }

    /// Time budget as a `Duration`; non-finite or negative values clamp to zero.
    pub fn time_budget(&self) -> Duration {
        Duration::try_from_secs_f64(self.time_budget_secs).unwrap_or(Duration::ZERO)
    }

    /// Builder pattern: set the time budget in seconds.
    pub fn with_time_budget(mut self, secs: f64) -> Self {
        self.time_budget_secs = secs;
        self
    }

    /// Builder pattern: cap the number of iterations.
    pub fn with_max_iterations(mut self, n: u32) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Builder pattern: set the random override probability.
    pub fn with_random_move_prob(mut self, p: f64) -> Self {
        self.random_move_prob = p;
        self
    }

    /// Builder pattern: set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
