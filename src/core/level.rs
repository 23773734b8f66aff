use crate::core::bounded_grid::TileGrid;
use crate::core::error::LevelError;
use crate::core::tile::Tile;
use crate::core::Vec2;

/// Parses a level made of tile code digits, one row per line.
///
/// Whitespace inside a line is ignored so both `4 2 1` and `421` describe the
/// same row. Blank lines are skipped.
pub fn parse_level(s: &str) -> Result<(TileGrid, Vec2), LevelError> {
    let mut rows: Vec<Vec<Tile>> = Vec::new();
    let mut player: Option<Vec2> = None;

    for (line_index, line) in s.lines().enumerate() {
        let line_no = line_index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let i = rows.len() as i32;
        let mut row = Vec::new();
        for (char_index, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let tile = ch
                .to_digit(10)
                .and_then(|code| Tile::from_code(code as u8))
                .ok_or(LevelError::InvalidTileCode {
                    line: line_no,
                    column: char_index + 1,
                    found: ch,
                })?;

            if tile.has_player() {
                let pos = Vec2 {
                    i,
                    j: row.len() as i32,
                };
                if let Some(first) = player {
                    return Err(LevelError::AmbiguousPlayer {
                        line: line_no,
                        first,
                        second: pos,
                    });
                }
                player = Some(pos);
            }
            row.push(tile);
        }

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(LevelError::JaggedGrid {
                    line: line_no,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }

    let player = player.ok_or(LevelError::MissingPlayer)?;
    Ok((TileGrid::from_rows(rows), player))
}

/// Writes a grid back out in the compact digit form `parse_level` accepts.
pub fn encode_level(grid: &TileGrid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|tile| char::from(b'0' + tile.code()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
