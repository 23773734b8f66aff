use crate::core::{GameState, MoveOutcome};

/// Read-only view handed to a renderer for one frame.
pub struct GameRenderState<'a> {
    pub game: &'a GameState,
    pub level_name: &'a str,
    pub won: bool,
    pub last_outcome: Option<MoveOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub won: bool,
    pub moves: u32,
    pub pushes: u32,
}
