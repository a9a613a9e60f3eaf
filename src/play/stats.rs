use crate::ai::Agent;
use crate::error::GameError;
use crate::game::{GameOutcome, Player};

use super::game::Game;

/// Win/loss/tie counts for a fixed pairing, first player always X.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub first_wins: usize,
    pub second_wins: usize,
    pub ties: usize,
}

impl MatchStats {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Player::A) => self.first_wins += 1,
            GameOutcome::Winner(Player::B) => self.second_wins += 1,
            GameOutcome::Draw => self.ties += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.first_wins + self.second_wins + self.ties
    }

    fn percent(&self, count: usize) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / total as f64
    }

    pub fn first_win_pct(&self) -> f64 {
        self.percent(self.first_wins)
    }

    pub fn second_win_pct(&self) -> f64 {
        self.percent(self.second_wins)
    }

    pub fn tie_pct(&self) -> f64 {
        self.percent(self.ties)
    }

    /// One tab-separated line: `<first>: x%  <second>: y%  Ties: z%`.
    pub fn summary(&self, first: &str, second: &str) -> String {
        format!(
            "{first}: {:.3}%\t{second}: {:.3}%\tTies: {:.3}%",
            self.first_win_pct(),
            self.second_win_pct(),
            self.tie_pct()
        )
    }
}

/// Play `count` games of `first` against `second` on `game`.
pub fn simulate_matchup<F, S>(
    game: &Game,
    first: &mut F,
    second: &mut S,
    count: usize,
) -> Result<MatchStats, GameError>
where
    F: Agent + ?Sized,
    S: Agent + ?Sized,
{
    let mut stats = MatchStats::default();
    for _ in 0..count {
        let record = game.play(first, second, |_| {})?;
        stats.record(record.outcome);
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{GreedyAgent, RandomAgent};

    #[test]
    fn test_empty_stats() {
        let stats = MatchStats::default();
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.first_win_pct(), 0.0);
    }

    #[test]
    fn test_record_and_percentages() {
        let mut stats = MatchStats::default();
        stats.record(GameOutcome::Winner(Player::A));
        stats.record(GameOutcome::Winner(Player::A));
        stats.record(GameOutcome::Winner(Player::B));
        stats.record(GameOutcome::Draw);

        assert_eq!(stats.total(), 4);
        assert!((stats.first_win_pct() - 50.0).abs() < 1e-9);
        assert!((stats.second_win_pct() - 25.0).abs() < 1e-9);
        assert!((stats.tie_pct() - 25.0).abs() < 1e-9);
        assert_eq!(
            stats.summary("Random", "Greedy"),
            "Random: 50.000%\tGreedy: 25.000%\tTies: 25.000%"
        );
    }

    #[test]
    fn test_simulate_matchup_counts_every_game() {
        let game = Game::new(7, 6).unwrap();
        let mut first = GreedyAgent::with_seed(4);
        let mut second = RandomAgent::with_seed(5);
        let stats = simulate_matchup(&game, &mut first, &mut second, 25).unwrap();
        assert_eq!(stats.total(), 25);
        assert!(stats.first_wins > stats.second_wins);
    }
}
