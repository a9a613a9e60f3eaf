use mcts_connect_four::ai::mcts::run_mcts;
use mcts_connect_four::ai::{
    Agent, AgentChoice, AgentKind, GreedyAgent, MctsConfig, MonteCarloAgent, RandomAgent,
};
use mcts_connect_four::config::AppConfig;
use mcts_connect_four::game::{Board, GameOutcome, Player};
use mcts_connect_four::play::{simulate_matchup, Game, GameRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Replay a record's moves on a fresh board and check it lands on the same
/// final position.
fn assert_replays(game: &Game, record: &GameRecord) {
    let mut board = Board::new(game.width(), game.height()).unwrap();
    for &col in &record.moves {
        assert!(!board.is_terminal(), "moves continue past the end");
        board = board.apply_move(col).unwrap();
    }
    assert_eq!(board, record.final_board);
    assert_eq!(board.outcome(), Some(record.outcome));
}

#[test]
fn monte_carlo_vs_greedy_plays_to_completion() {
    let game = Game::new(7, 6).unwrap();
    let mut first = MonteCarloAgent::new(MctsConfig::for_testing(300).with_seed(11));
    let mut second = GreedyAgent::with_seed(12);

    let record = game.play(&mut first, &mut second, |_| {}).unwrap();

    assert_replays(&game, &record);
    let last = first.last_search().expect("search agent should have searched");
    assert_eq!(last.iterations, 300);
}

#[test]
fn seeded_agent_kinds_reproduce_the_same_game() {
    let game = Game::new(7, 6).unwrap();
    let search = MctsConfig::for_testing(150).with_seed(5);

    let play = || {
        let mut first = AgentKind::build(AgentChoice::Monte, &search, None);
        let mut second = AgentKind::build(AgentChoice::Greedy, &search, Some(6));
        game.play(&mut first, &mut second, |_| {}).unwrap()
    };

    let a = play();
    let b = play();
    assert_eq!(a.moves, b.moves);
    assert_eq!(a.outcome, b.outcome);
}

#[test]
fn every_snapshot_alternates_players() {
    let game = Game::new(5, 4).unwrap();
    let mut first = RandomAgent::with_seed(1);
    let mut second = RandomAgent::with_seed(2);
    let mut snapshots = Vec::new();

    let record = game
        .play(&mut first, &mut second, |board| snapshots.push(*board))
        .unwrap();

    assert_eq!(snapshots.len(), record.moves.len() + 1);
    for (i, board) in snapshots.iter().enumerate() {
        assert_eq!(board.move_count(), i);
    }
    assert!(snapshots.last().unwrap().is_terminal());
    assert_replays(&game, &record);
}

#[test]
fn tiny_board_matchups_end_in_draws() {
    // No line of four fits on a 3x3 board.
    let game = Game::new(3, 3).unwrap();
    let mut first = GreedyAgent::with_seed(3);
    let mut second = RandomAgent::with_seed(4);

    let stats = simulate_matchup(&game, &mut first, &mut second, 10).unwrap();

    assert_eq!(stats.total(), 10);
    assert_eq!(stats.ties, 10);
}

#[test]
fn search_finds_the_winning_column_on_a_wide_board() {
    // A holds 0, 1, 2 on the bottom row of a 9x5 board; 3 completes the line.
    let board = [0, 8, 1, 8, 2, 7]
        .iter()
        .fold(Board::new(9, 5).unwrap(), |b, &col| b.apply_move(col).unwrap());
    let mut rng = StdRng::seed_from_u64(9);

    let result = run_mcts(&board, &MctsConfig::for_testing(3000), &mut rng).unwrap();

    assert_eq!(result.action, 3);
    assert_eq!(
        board.apply_move(result.action).unwrap().outcome(),
        Some(GameOutcome::Winner(Player::A))
    );
}

#[test]
fn config_file_drives_a_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("connect4.toml");
    std::fs::write(
        &path,
        "[game]\nwidth = 6\nheight = 5\n\n[search]\nmax_iterations = 100\nrandom_move_prob = 0.0\nseed = 1\n",
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    let game = Game::new(config.game.width, config.game.height).unwrap();
    let mut first = AgentKind::build(AgentChoice::Random, &config.search, Some(2));
    let mut second = AgentKind::build(AgentChoice::Monte, &config.search, None);

    assert_eq!(first.name(), "Random");
    assert_eq!(second.name(), "Monte Carlo");

    let record = game.play(&mut first, &mut second, |_| {}).unwrap();
    assert_eq!(record.final_board.width(), 6);
    assert_replays(&game, &record);
}
