pub use dissimilar::diff as __diff;
use crate::console_interface::render_game_to_string;
use crate::core::{Direction, GameState, MoveOutcome, Tile, Vec2, encode_level};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        $crate::assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub game_state: GameState,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        match GameState::from_level(level) {
            Ok(game_state) => Self { game_state },
            Err(err) => panic!("test level failed to parse: {}\n{}", err, level),
        }
    }

    pub fn game_to_string(&self) -> String {
        render_game_to_string(&self.game_state).trim_matches('\n').into()
    }

    pub fn encoded(&self) -> String {
        encode_level(self.game_state.grid())
    }

    pub fn assert_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.try_move(direction);
        if outcome == MoveOutcome::Blocked {
            panic!("Expected {:?} to succeed, in map\n{}", direction, self.game_to_string());
        }
        outcome
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    /// Asserts the move is rejected and that nothing about the game changed.
    pub fn assert_blocked(&mut self, direction: Direction) {
        let before = self.game_state.clone();
        let outcome = self.try_move(direction);
        assert_eq!(outcome, MoveOutcome::Blocked, "in map\n{}", self.game_to_string());
        assert_eq!(before, self.game_state);
    }

    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        self.game_state.attempt_move(direction)
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }

    pub fn tile_at(&self, i: i32, j: i32) -> Tile {
        *self.game_state.grid().get(&Vec2 { i, j }).unwrap()
    }
}

pub fn assert_symbols_match(expected: &str, actual: &str) {
    assert_eq_text!(expected.trim_matches('\n'), actual.trim_matches('\n'));
}
