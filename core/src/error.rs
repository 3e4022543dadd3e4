use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::CellCount;

/// Fatal problems with a seed; no game is created.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read seed file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("seed ended early, expected {expected}")]
    MissingToken { expected: &'static str },
    #[error("expected {expected} to be an integer, found {token:?}")]
    NotAnInteger {
        expected: &'static str,
        token: String,
    },
    #[error("cannot create a mine field with {rows} rows and {cols} columns, both must be at least 5")]
    GridTooSmall { rows: i64, cols: i64 },
    #[error("cannot create a mine field with {rows} rows and {cols} columns, both must be at most 255")]
    GridTooLarge { rows: i64, cols: i64 },
    #[error("mine count must not be negative, found {count}")]
    InvalidMineCount { count: i64 },
    #[error("too many mines: {mines} requested but the grid only has {capacity} cells")]
    TooManyMines { mines: i64, capacity: CellCount },
    #[error("mine at ({row}, {col}) is outside the grid")]
    MineOutOfBounds { row: i64, col: i64 },
    #[error("mine at ({row}, {col}) is listed more than once")]
    DuplicateMine { row: i64, col: i64 },
}

/// Coarse classification of [`ConfigError`], used to pick process exit codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigErrorKind {
    Unreadable,
    Format,
    Value,
}

impl ConfigError {
    pub const fn kind(&self) -> ConfigErrorKind {
        use ConfigError::*;
        match self {
            Unreadable { .. } => ConfigErrorKind::Unreadable,
            MissingToken { .. } | NotAnInteger { .. } => ConfigErrorKind::Format,
            GridTooSmall { .. }
            | GridTooLarge { .. }
            | InvalidMineCount { .. }
            | TooManyMines { .. }
            | MineOutOfBounds { .. }
            | DuplicateMine { .. } => ConfigErrorKind::Value,
        }
    }
}

/// Rejected player input; the turn is not counted and the player is re-prompted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command not recognized!")]
    Empty,
    #[error("Command not recognized: {0:?}")]
    UnknownVerb(String),
    #[error("{verb} takes {expected} argument(s), got {got}")]
    WrongArity {
        verb: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("coordinates must be integers, found {0:?}")]
    NotANumber(String),
    #[error("({row}, {col}) is outside the mine field")]
    OutOfBounds { row: i64, col: i64 },
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
