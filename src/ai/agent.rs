use std::fmt;
use std::io::{self, Stdout};
use std::str::FromStr;

use crate::error::AgentError;
use crate::game::Board;

use super::greedy::GreedyAgent;
use super::human::{ConsoleInput, HumanAgent};
use super::mcts::MctsConfig;
use super::monte_carlo::MonteCarloAgent;
use super::random::RandomAgent;

/// Universal interface for all move pickers.
pub trait Agent {
    /// Select a column to play on `board`.
    ///
    /// Fails with [`AgentError::InvalidMove`] when no column is open and
    /// with [`AgentError::GameOver`] on a won board that still has room.
    fn select_action(&mut self, board: &Board) -> Result<usize, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Legal actions of a board an agent is allowed to move on.
pub(crate) fn playable_actions(board: &Board) -> Result<Vec<usize>, AgentError> {
    let legal = board.legal_actions();
    if legal.is_empty() {
        return Err(AgentError::InvalidMove);
    }
    if board.is_terminal() {
        return Err(AgentError::GameOver);
    }
    Ok(legal)
}

/// Human player reading moves from the terminal. Any number of these can
/// share the process's stdin.
pub type ConsoleHuman = HumanAgent<ConsoleInput, Stdout>;

/// Agent variant picked by name on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentChoice {
    Human,
    Random,
    Greedy,
    Monte,
}

impl FromStr for AgentChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(AgentChoice::Human),
            "random" => Ok(AgentChoice::Random),
            "greedy" => Ok(AgentChoice::Greedy),
            "monte" => Ok(AgentChoice::Monte),
            other => Err(format!(
                "unknown agent '{other}' (expected 'human', 'random', 'greedy', or 'monte')"
            )),
        }
    }
}

impl fmt::Display for AgentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentChoice::Human => "human",
            AgentChoice::Random => "random",
            AgentChoice::Greedy => "greedy",
            AgentChoice::Monte => "monte",
        };
        f.write_str(name)
    }
}

/// Closed set of agents, dispatched with a `match` rather than a trait object.
pub enum AgentKind {
    Human(ConsoleHuman),
    Random(RandomAgent),
    Greedy(GreedyAgent),
    MonteCarlo(MonteCarloAgent),
}

impl AgentKind {
    /// Build the agent named by `choice`. `seed` seeds the random and greedy
    /// pickers; the search agent takes its seed from `search`.
    pub fn build(choice: AgentChoice, search: &MctsConfig, seed: Option<u64>) -> Self {
        match choice {
            AgentChoice::Human => AgentKind::Human(HumanAgent::new(ConsoleInput, io::stdout())),
            AgentChoice::Random => AgentKind::Random(match seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            }),
            AgentChoice::Greedy => AgentKind::Greedy(match seed {
                Some(seed) => GreedyAgent::with_seed(seed),
                None => GreedyAgent::new(),
            }),
            AgentChoice::Monte => AgentKind::MonteCarlo(MonteCarloAgent::new(search.clone())),
        }
    }
}

impl Agent for AgentKind {
    fn select_action(&mut self, board: &Board) -> Result<usize, AgentError> {
        match self {
            AgentKind::Human(agent) => agent.select_action(board),
            AgentKind::Random(agent) => agent.select_action(board),
            AgentKind::Greedy(agent) => agent.select_action(board),
            AgentKind::MonteCarlo(agent) => agent.select_action(board),
        }
    }

    fn name(&self) -> &str {
        match self {
            AgentKind::Human(agent) => agent.name(),
            AgentKind::Random(agent) => agent.name(),
            AgentKind::Greedy(agent) => agent.name(),
            AgentKind::MonteCarlo(agent) => agent.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    /// A full 7x6 board with no line of four.
    const DRAW_SEQUENCE: [usize; 42] = [
        4, 3, 6, 0, 1, 4, 5, 5, 1, 1, 5, 0, 1, 6, 0, 1, 5, 5, 1, 0, 4, 6, 3, 2, 6, 6, 0, 4, 6,
        5, 2, 0, 4, 2, 4, 2, 2, 2, 3, 3, 3, 3,
    ];

    fn play(moves: &[usize]) -> Board {
        moves
            .iter()
            .fold(Board::default(), |board, &col| board.apply_move(col).unwrap())
    }

    #[test]
    fn test_agent_choice_parses() {
        assert_eq!("human".parse::<AgentChoice>(), Ok(AgentChoice::Human));
        assert_eq!("Random".parse::<AgentChoice>(), Ok(AgentChoice::Random));
        assert_eq!("greedy".parse::<AgentChoice>(), Ok(AgentChoice::Greedy));
        assert_eq!("monte".parse::<AgentChoice>(), Ok(AgentChoice::Monte));
        assert!("minimax".parse::<AgentChoice>().is_err());
    }

    #[test]
    fn test_agent_choice_display_roundtrips() {
        for choice in [
            AgentChoice::Human,
            AgentChoice::Random,
            AgentChoice::Greedy,
            AgentChoice::Monte,
        ] {
            assert_eq!(choice.to_string().parse::<AgentChoice>(), Ok(choice));
        }
    }

    #[test]
    fn test_agent_kind_dispatches() {
        let search = MctsConfig::for_testing(50);
        let board = Board::default();
        for choice in [AgentChoice::Random, AgentChoice::Greedy, AgentChoice::Monte] {
            let mut agent = AgentKind::build(choice, &search, Some(3));
            let action = agent.select_action(&board).unwrap();
            assert!(board.legal_actions().contains(&action), "{}", agent.name());
        }
    }

    #[test]
    fn test_agent_kind_names() {
        let search = MctsConfig::for_testing(10);
        let names: Vec<String> = [AgentChoice::Random, AgentChoice::Greedy, AgentChoice::Monte]
            .into_iter()
            .map(|c| AgentKind::build(c, &search, Some(1)).name().to_string())
            .collect();
        assert_eq!(names, vec!["Random", "Greedy", "Monte Carlo"]);
    }

    #[test]
    fn test_playable_actions_errors() {
        let board = play(&[0, 0, 1, 1, 2, 2, 3]);
        assert!(matches!(playable_actions(&board), Err(AgentError::GameOver)));
        assert!(matches!(
            playable_actions(&play(&DRAW_SEQUENCE)),
            Err(AgentError::InvalidMove)
        ));
        assert_eq!(playable_actions(&Board::default()).unwrap().len(), 7);
    }

    #[test]
    fn test_full_board_is_invalid_move_for_every_agent() {
        let board = play(&DRAW_SEQUENCE);
        assert!(board.legal_actions().is_empty());

        let search = MctsConfig::for_testing(10);
        for choice in [AgentChoice::Random, AgentChoice::Greedy, AgentChoice::Monte] {
            let mut agent = AgentKind::build(choice, &search, Some(1));
            assert!(
                matches!(agent.select_action(&board), Err(AgentError::InvalidMove)),
                "{}",
                agent.name()
            );
        }

        let mut human = HumanAgent::new(io::Cursor::new(b"3\n".to_vec()), Vec::new());
        assert!(matches!(
            human.select_action(&board),
            Err(AgentError::InvalidMove)
        ));
    }

    #[test]
    fn test_two_console_humans_can_be_built() {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let search = MctsConfig::for_testing(1);
            let first = AgentKind::build(AgentChoice::Human, &search, None);
            let second = AgentKind::build(AgentChoice::Human, &search, None);
            // Stdin must still be free for other readers.
            drop(io::stdin().lock());
            let _ = tx.send((first.name().to_string(), second.name().to_string()));
        });

        let names = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("building two console humans should not block");
        assert_eq!(names, ("Human".to_string(), "Human".to_string()));
    }
}
