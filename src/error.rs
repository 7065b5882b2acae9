use std::path::PathBuf;

/// Reasons the board refuses to accept a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("column {column} is outside the board (columns: {columns})")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors that can occur when a session is asked to play a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),

    #[error("the round is over")]
    GameOver,
}

/// Errors raised when a grid configuration cannot hold a winning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionsError {
    #[error("board must have at least one column and one row (got {columns}x{rows})")]
    ZeroDimension { columns: usize, rows: usize },

    #[error("connect length must be at least 1")]
    ZeroConnectLength,

    #[error("connect length {connect_length} exceeds the column count {columns}")]
    ConnectExceedsColumns { connect_length: usize, columns: usize },

    #[error("connect length {connect_length} exceeds the row count {rows}")]
    ConnectExceedsRows { connect_length: usize, rows: usize },
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

    #[error("invalid board: {0}")]
    Dimensions(#[from] DimensionsError),

    #[error("config validation error: {0}")]
    Validation(String),
}
