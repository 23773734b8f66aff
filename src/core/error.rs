use thiserror::Error;

use crate::core::models::Vec2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds { pos: Vec2, rows: i32, cols: i32 },
}

/// Reasons a level text cannot be turned into a playable grid.
///
/// Line and column numbers are 1-based and refer to the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("line {line}, column {column}: invalid tile code {found:?}")]
    InvalidTileCode { line: usize, column: usize, found: char },
    #[error("line {line}: expected {expected} tiles but found {found}")]
    JaggedGrid { line: usize, expected: usize, found: usize },
    #[error("level has no player tile")]
    MissingPlayer,
    #[error("line {line}: second player at {second}, first player already at {first}")]
    AmbiguousPlayer { line: usize, first: Vec2, second: Vec2 },
    #[error("player given at {given} but the grid has {players} player tile(s)")]
    PlayerMismatch { given: Vec2, players: usize },
}
