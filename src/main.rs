use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use mcts_connect_four::ai::{Agent, AgentChoice, AgentKind};
use mcts_connect_four::config::AppConfig;
use mcts_connect_four::game::GameOutcome;
use mcts_connect_four::play::{simulate_matchup, Game};

/// Play Connect 4!
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect 4 against search and heuristic agents")]
struct Cli {
    /// Choose two agents to play: human, random, greedy, or monte
    #[arg(long, num_args = 2, value_names = ["P1", "P2"])]
    play: Option<Vec<AgentChoice>>,

    /// Let the agents play each other and report win rates
    #[arg(long)]
    simulate: bool,

    /// Pause one second between turns
    #[arg(long)]
    turn_sleep: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override number of games per simulated matchup
    #[arg(long)]
    count: Option<usize>,

    /// Override the search time budget per move, in seconds
    #[arg(long)]
    monte_carlo_time: Option<f64>,

    /// Override the probability of a random move instead of searching
    #[arg(long)]
    random_move_prob: Option<f64>,

    /// Seed every agent's generator
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.game.width = width;
    }
    if let Some(height) = cli.height {
        config.game.height = height;
    }
    if let Some(count) = cli.count {
        config.simulate.games_per_matchup = count;
    }
    if let Some(secs) = cli.monte_carlo_time {
        config.search.time_budget_secs = secs;
    }
    if let Some(p) = cli.random_move_prob {
        config.search.random_move_prob = p;
    }
    if let Some(seed) = cli.seed {
        config.search.seed = Some(seed);
        config.simulate.seed = Some(seed);
    }
    config.validate().context("validating configuration")?;

    if cli.play.is_none() && !cli.simulate {
        bail!("nothing to do: pass --play <P1> <P2> and/or --simulate");
    }

    let game = Game::new(config.game.width, config.game.height)?;

    if let Some(choices) = &cli.play {
        let [p1, p2] = choices.as_slice() else {
            bail!("--play takes exactly two agents");
        };
        play_one(&game, &config, *p1, *p2, cli.turn_sleep)?;
    }

    if cli.simulate {
        simulate_all(&game, &config)?;
    }

    Ok(())
}

fn play_one(
    game: &Game,
    config: &AppConfig,
    p1: AgentChoice,
    p2: AgentChoice,
    turn_sleep: bool,
) -> Result<()> {
    let seed = config.simulate.seed;
    let mut first = AgentKind::build(p1, &config.search, seed);
    let mut second = AgentKind::build(p2, &config.search, seed.map(|s| s.wrapping_add(1)));
    info!(first = first.name(), second = second.name(), "starting game");

    let record = game.play(&mut first, &mut second, |board| {
        if turn_sleep {
            thread::sleep(Duration::from_secs(1));
        }
        println!("{board}\n");
    })?;

    println!("{}", "-".repeat(10));
    match record.outcome {
        GameOutcome::Winner(player) => println!("{} wins!", player.name()),
        GameOutcome::Draw => println!("Tie!"),
    }
    println!("{}", "-".repeat(10));
    Ok(())
}

/// Every ordered pairing of the non-interactive agents, weakest first.
const MATCHUPS: [(AgentChoice, AgentChoice); 6] = [
    (AgentChoice::Random, AgentChoice::Random),
    (AgentChoice::Random, AgentChoice::Greedy),
    (AgentChoice::Greedy, AgentChoice::Greedy),
    (AgentChoice::Random, AgentChoice::Monte),
    (AgentChoice::Greedy, AgentChoice::Monte),
    (AgentChoice::Monte, AgentChoice::Monte),
];

fn simulate_all(game: &Game, config: &AppConfig) -> Result<()> {
    let count = config.simulate.games_per_matchup;
    for (i, &(p1, p2)) in MATCHUPS.iter().enumerate() {
        let seed = config.simulate.seed.map(|s| s.wrapping_add(2 * i as u64));
        let mut first = AgentKind::build(p1, &config.search, seed);
        let mut second = AgentKind::build(p2, &config.search, seed.map(|s| s.wrapping_add(1)));

        let stats = simulate_matchup(game, &mut first, &mut second, count)
            .with_context(|| format!("simulating {p1} vs {p2}"))?;
        info!(%p1, %p2, games = stats.total(), "matchup finished");
        println!("{}", stats.summary(first.name(), second.name()));
    }
    Ok(())
}
