use crate::core::bounds::BoundsOriginRoot;
use crate::core::error::GridError;
use crate::core::models::Vec2;
use crate::core::tile::Tile;

pub type TileGrid = BoundedGrid<Tile>;

/// Dense row-major grid. Every access is bounds checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    /// Builds a grid from rows that the caller has already checked to be
    /// of equal length.
    pub(crate) fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |row| row.len()) as i32;
        debug_assert!(rows.iter().all(|row| row.len() as i32 == width));
        BoundedGrid {
            bounds: BoundsOriginRoot::new(height, width),
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// (row count, column count)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.bounds.extent.i as usize, self.bounds.extent.j as usize)
    }

    pub fn get(&self, pos: &Vec2) -> Result<&T, GridError> {
        self.check(pos)?;
        Ok(&self.cells[self.bounds.index_of(pos)])
    }

    pub fn set(&mut self, pos: &Vec2, value: T) -> Result<(), GridError> {
        self.check(pos)?;
        let index = self.bounds.index_of(pos);
        self.cells[index] = value;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &T)> {
        let bounds = self.bounds;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (bounds.position_of(index), cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on zero, and a zero-width grid has no cells anyway
        self.cells.chunks(self.bounds.extent.j.max(1) as usize)
    }

    fn check(&self, pos: &Vec2) -> Result<(), GridError> {
        if self.bounds.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                pos: *pos,
                rows: self.bounds.extent.i,
                cols: self.bounds.extent.j,
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> TileGrid {
        TileGrid::from_rows(vec![
            vec![Tile::CROSS, Tile::CLEAR, Tile::BOX],
            vec![Tile::PLAYER, Tile::IMPASSABLE, Tile::CLEAR],
        ])
    }

    #[test]
    fn dimensions_are_rows_then_columns() {
        assert_eq!(sample().dimensions(), (2, 3));
    }

    #[test]
    fn get_is_row_major() {
        let grid = sample();
        assert_eq!(grid.get(&Vec2 { i: 0, j: 2 }), Ok(&Tile::BOX));
        assert_eq!(grid.get(&Vec2 { i: 1, j: 0 }), Ok(&Tile::PLAYER));
    }

    #[test]
    fn out_of_bounds_is_an_error_not_a_wrap() {
        let mut grid = sample();
        for pos in [
            Vec2 { i: -1, j: 0 },
            Vec2 { i: 0, j: 3 },
            Vec2 { i: 2, j: 0 },
            Vec2 { i: 0, j: -1 },
        ] {
            assert_eq!(
                grid.get(&pos),
                Err(GridError::OutOfBounds { pos, rows: 2, cols: 3 })
            );
            assert!(grid.set(&pos, Tile::CLEAR).is_err());
        }
        assert_eq!(grid, sample());
    }

    #[test]
    fn set_replaces_one_tile() {
        let mut grid = sample();
        grid.set(&Vec2 { i: 1, j: 2 }, Tile::CROSS).unwrap();
        assert_eq!(grid.get(&Vec2 { i: 1, j: 2 }), Ok(&Tile::CROSS));
        assert_eq!(grid.iter().filter(|(_, t)| t.has_cross()).count(), 2);
    }

    #[test]
    fn iter_reports_positions() {
        let grid = sample();
        let player = grid.iter().find(|(_, t)| t.has_player()).map(|(pos, _)| pos);
        assert_eq!(player, Some(Vec2 { i: 1, j: 0 }));
        assert_eq!(grid.rows().count(), 2);
    }
}
