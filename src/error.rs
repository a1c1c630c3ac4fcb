use thiserror::Error;

/// Errors reported by the board and the game engine.
///
/// None of these are fatal: the board and engine are left untouched and the
/// caller is expected to ask for another move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("column {column} is out of range (board has {width} columns)")]
    OutOfRange { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("invalid board dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("the game is over")]
    GameOver,

    #[error("the game is still in progress")]
    NotFinished,
}
