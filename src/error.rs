use std::path::PathBuf;

/// Errors returned by [`GameState::add_piece`](crate::game::GameState::add_piece).
///
/// The engine is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside 1..={cols}")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already complete")]
    GameAlreadyComplete,
}

/// Errors returned when an agent is asked for a move it cannot give.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    #[error("no legal moves to choose from")]
    NoLegalMoves,

    #[error("board view is {found:?} (rows, cols) but the agent plays on {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("row heights cover {found} columns but the agent plays on {expected}")]
    HeightsMismatch { expected: usize, found: usize },

    #[error("column {column} was offered as legal but cannot be played")]
    IllegalCandidate { column: usize },
}

/// Errors that abort a simulated game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("game {game}: agent failed to choose a move: {source}")]
    Agent { game: u64, source: AgentError },

    #[error("game {game}: move rejected: {source}")]
    Move { game: u64, source: MoveError },
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
