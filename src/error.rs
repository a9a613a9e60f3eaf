use std::path::PathBuf;

use crate::game::{MAX_HEIGHT, MAX_WIDTH};

/// Reasons a move is rejected. The board is never modified when one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidMove { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameAlreadyTerminal,
}

/// Board dimensions outside what the fixed-capacity grid supports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("board size {width}x{height} is not supported (1x1 up to {max_w}x{max_h})", max_w = MAX_WIDTH, max_h = MAX_HEIGHT)]
pub struct SizeError {
    pub width: usize,
    pub height: usize,
}

/// Errors raised by the tree search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("cannot search a terminal position")]
    TerminalPosition,

    #[error("move error during search: {0}")]
    Move(#[from] MoveError),
}

/// Errors an agent can return instead of a column.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("invalid move: no legal moves available")]
    InvalidMove,

    #[error("game is already over")]
    GameOver,

    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),

    #[error("failed to read move: {0}")]
    Input(#[from] std::io::Error),
}

/// Errors that can occur while driving a game between two agents.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("agent {agent} selected illegal action {action} (legal: {legal:?})")]
    IllegalAction {
        agent: String,
        action: usize,
        legal: Vec<usize>,
    },

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("invalid board: {0}")]
    Size(#[from] SizeError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
