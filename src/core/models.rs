use crate::core::bounded_grid::TileGrid;

/// Grid coordinate: `i` is the row, `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Nothing changed.
    Blocked,
    /// The player stepped onto an unoccupied tile.
    Moved,
    /// The player stepped forward and displaced a box.
    Pushed,
}

/// A level in progress. Only `attempt_move` mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid: TileGrid,
    pub(crate) player: Vec2,
    pub(crate) moves: u32,
    pub(crate) pushes: u32,
}
