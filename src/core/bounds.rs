use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

impl BoundsOriginRoot {
    pub fn new(rows: i32, cols: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2 { i: rows, j: cols },
        }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.extent.i && pos.j >= 0 && pos.j < self.extent.j
    }

    pub(crate) fn index_of(&self, pos: &Vec2) -> usize {
        (pos.i * self.extent.j + pos.j) as usize
    }

    pub(crate) fn position_of(&self, index: usize) -> Vec2 {
        let index = index as i32;
        Vec2 {
            i: index / self.extent.j,
            j: index % self.extent.j,
        }
    }
}
