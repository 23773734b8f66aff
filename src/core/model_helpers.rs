use std::fmt;
use std::ops::Add;

use crate::core::bounded_grid::TileGrid;
use crate::core::error::LevelError;
use crate::core::level::parse_level;
use crate::core::{Direction, GameState, Vec2};

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

impl Direction {
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

impl GameState {
    /// `player` must be the position of the only player tile in `grid`.
    pub fn new(grid: TileGrid, player: Vec2) -> Result<Self, LevelError> {
        let players: Vec<Vec2> = grid
            .iter()
            .filter(|(_, t)| t.has_player())
            .map(|(pos, _)| pos)
            .collect();
        if players != [player] {
            return Err(LevelError::PlayerMismatch {
                given: player,
                players: players.len(),
            });
        }
        Ok(GameState {
            grid,
            player,
            moves: 0,
            pushes: 0,
        })
    }

    pub fn from_level(text: &str) -> Result<Self, LevelError> {
        let (grid, player) = parse_level(text)?;
        GameState::new(grid, player)
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pushes(&self) -> u32 {
        self.pushes
    }

    /// Every goal is covered by a box. Recomputed on each call.
    pub fn is_won(&self) -> bool {
        self.grid
            .iter()
            .all(|(_, tile)| !tile.has_cross() || tile.has_box())
    }

    pub fn total_boxes(&self) -> usize {
        self.grid.iter().filter(|(_, t)| t.has_box()).count()
    }

    pub fn total_targets(&self) -> usize {
        self.grid.iter().filter(|(_, t)| t.has_cross()).count()
    }

    pub fn count_boxes_on_goals(&self) -> usize {
        self.grid
            .iter()
            .filter(|(_, t)| t.has_cross() && t.has_box())
            .count()
    }
}
