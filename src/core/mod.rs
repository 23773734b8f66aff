mod bounded_grid;
mod bounds;
mod error;
mod level;
mod model_helpers;
mod models;
mod tile;
mod update;

pub use bounded_grid::{BoundedGrid, TileGrid};
pub use error::{GridError, LevelError};
pub use level::{encode_level, parse_level};
pub use models::{Direction, GameState, MoveOutcome, UserAction, Vec2};
pub use tile::{IMPASSABLE_CODE, Tile};
