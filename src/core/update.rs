use log::{debug, error};

use crate::core::error::GridError;
use crate::core::{Direction, GameState, MoveOutcome, Vec2};

impl GameState {
    /// Applies one move. Illegal moves come back as `Blocked` and leave the
    /// state untouched.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        match self.step(direction) {
            Ok(outcome) => {
                debug!(
                    "{:?} -> {:?}, player at {}, moves {}",
                    direction, outcome, self.player, self.moves
                );
                outcome
            }
            Err(err) => {
                error!("move {:?} failed after validation: {}", direction, err);
                MoveOutcome::Blocked
            }
        }
    }

    fn step(&mut self, direction: Direction) -> Result<MoveOutcome, GridError> {
        let dir = direction.delta();
        let target = self.player + dir;

        let Ok(&dest) = self.grid.get(&target) else {
            return Ok(MoveOutcome::Blocked);
        };
        if dest.is_impassable() {
            return Ok(MoveOutcome::Blocked);
        }

        if !dest.has_box() {
            self.walk_to(target)?;
            return Ok(MoveOutcome::Moved);
        }

        let beyond = target + dir;
        let Ok(&beyond_tile) = self.grid.get(&beyond) else {
            return Ok(MoveOutcome::Blocked);
        };
        if !beyond_tile.is_free() {
            return Ok(MoveOutcome::Blocked);
        }

        // Move box
        self.grid.set(&beyond, beyond_tile.with_box())?;
        self.grid.set(&target, dest.without_box())?;

        self.walk_to(target)?;
        self.pushes += 1;
        Ok(MoveOutcome::Pushed)
    }

    /// `target` must be in bounds, passable and free of boxes.
    fn walk_to(&mut self, target: Vec2) -> Result<(), GridError> {
        let cur = *self.grid.get(&self.player)?;
        let dest = *self.grid.get(&target)?;
        self.grid.set(&self.player, cur.without_player())?;
        self.grid.set(&target, dest.with_player())?;
        self.player = target;
        self.moves += 1;
        Ok(())
    }
}
