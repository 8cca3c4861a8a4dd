use super::constants::{Mark, BOARD_WIDTH};

/// A move the board refused. The board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("Invalid column {column}: choose a column from 0 to {}", BOARD_WIDTH - 1)]
    OutOfRange { column: i64 },
    #[error("Column {column} is full")]
    ColumnFull { column: usize },
}

/// A game that cannot be set up as requested.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Players must have different discs (both chose {})", .0.name())]
    DuplicateMark(Mark),
}

/// Errors surfaced by the terminal driver.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
