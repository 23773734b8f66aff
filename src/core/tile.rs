use std::fmt;

/// State of a single grid cell, stored as a bitmask.
///
/// Goals and impassable terrain are fixed at level load. Only the box and
/// player bits change while playing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile(u8);

const CROSS_BIT: u8 = 0b0001;
const BOX_BIT: u8 = 0b0010;
const PLAYER_BIT: u8 = 0b0100;
const IMPASSABLE_BIT: u8 = 0b1000;

/// Textual code reserved for impassable terrain.
pub const IMPASSABLE_CODE: u8 = 6;

impl Tile {
    pub const CLEAR: Tile = Tile(0);
    pub const CROSS: Tile = Tile(CROSS_BIT);
    pub const BOX: Tile = Tile(BOX_BIT);
    pub const BOX_ON_CROSS: Tile = Tile(CROSS_BIT | BOX_BIT);
    pub const PLAYER: Tile = Tile(PLAYER_BIT);
    pub const PLAYER_ON_CROSS: Tile = Tile(CROSS_BIT | PLAYER_BIT);
    pub const IMPASSABLE: Tile = Tile(IMPASSABLE_BIT);

    /// Decodes a level code. Codes 0 through 6 are valid; 7 would mean a
    /// player standing on a box on a goal and is rejected with everything
    /// above it.
    pub fn from_code(code: u8) -> Option<Tile> {
        match code {
            IMPASSABLE_CODE => Some(Tile::IMPASSABLE),
            0..=5 => Some(Tile(code)),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        if self.is_impassable() {
            IMPASSABLE_CODE
        } else {
            self.0
        }
    }

    pub fn has_cross(self) -> bool {
        self.0 & CROSS_BIT != 0
    }

    pub fn has_box(self) -> bool {
        self.0 & BOX_BIT != 0
    }

    pub fn has_player(self) -> bool {
        self.0 & PLAYER_BIT != 0
    }

    pub fn is_impassable(self) -> bool {
        self.0 & IMPASSABLE_BIT != 0
    }

    /// True when a box could be pushed onto this tile.
    pub fn is_free(self) -> bool {
        !self.is_impassable() && !self.has_box()
    }

    pub(crate) fn with_box(self) -> Tile {
        debug_assert!(!self.is_impassable(), "impassable tile cannot hold a box");
        Tile(self.0 | BOX_BIT)
    }

    pub(crate) fn without_box(self) -> Tile {
        Tile(self.0 & !BOX_BIT)
    }

    pub(crate) fn with_player(self) -> Tile {
        debug_assert!(!self.is_impassable(), "impassable tile cannot hold the player");
        Tile(self.0 | PLAYER_BIT)
    }

    pub(crate) fn without_player(self) -> Tile {
        Tile(self.0 & !PLAYER_BIT)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_impassable() {
            return write!(f, "Tile(impassable)");
        }
        let mut names = Vec::new();
        if self.has_cross() {
            names.push("cross");
        }
        if self.has_box() {
            names.push("box");
        }
        if self.has_player() {
            names.push("player");
        }
        if names.is_empty() {
            names.push("clear");
        }
        write!(f, "Tile({})", names.join("|"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_codes_round_trip() {
        for code in 0..=6u8 {
            let tile = Tile::from_code(code).expect("code should decode");
            assert_eq!(tile.code(), code, "{:?}", tile);
        }
    }

    #[test]
    fn codes_outside_the_valid_set_are_rejected() {
        for code in 7..=u8::MAX {
            assert_eq!(Tile::from_code(code), None, "code {}", code);
        }
    }

    #[test]
    fn impassable_carries_no_other_flag() {
        let tile = Tile::from_code(IMPASSABLE_CODE).unwrap();
        assert!(tile.is_impassable());
        assert!(!tile.has_cross());
        assert!(!tile.has_box());
        assert!(!tile.has_player());
        assert!(!tile.is_free());
    }

    #[test]
    fn toggling_occupancy_keeps_the_cross() {
        let tile = Tile::CROSS.with_box();
        assert_eq!(tile, Tile::BOX_ON_CROSS);
        assert_eq!(tile.without_box(), Tile::CROSS);
        assert_eq!(Tile::CROSS.with_player().code(), 5);
        assert_eq!(Tile::PLAYER_ON_CROSS.without_player(), Tile::CROSS);
    }
}
