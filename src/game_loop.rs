use anyhow::Context;
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::core::{GameState, UserAction, parse_level};
use crate::models::{GameRenderState, SessionSummary};

/// Draws a frame. Implementations never mutate the game.
pub trait Renderer {
    fn render(&mut self, state: &GameRenderState) -> anyhow::Result<()>;
}

/// Supplies the next key event already mapped to a `ConsoleInput`.
pub trait InputSource {
    fn next_input(&mut self) -> anyhow::Result<ConsoleInput>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    UserAction(UserAction),
    Restart,
    Quit,
    Timeout,
    Unknown,
}

/// Reads and parses a level file into a fresh game.
pub fn load_game(path: &Path) -> anyhow::Result<GameState> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading level {}", path.display()))?;
    let (grid, player) =
        parse_level(&text).with_context(|| format!("parsing level {}", path.display()))?;
    let (rows, cols) = grid.dimensions();
    info!(
        "loaded {} ({}x{}, player at {})",
        path.display(),
        rows,
        cols,
        player
    );
    GameState::new(grid, player).with_context(|| format!("starting level {}", path.display()))
}

/// Runs one level attempt until the player wins or quits.
///
/// Each input event is fully applied and rendered before the next one is
/// read.
pub fn run_interactive<R, I>(
    game: GameState,
    level_name: &str,
    renderer: &mut R,
    input: &mut I,
) -> anyhow::Result<SessionSummary>
where
    R: Renderer,
    I: InputSource,
{
    let initial = game.clone();
    let mut game = game;

    renderer.render(&GameRenderState {
        game: &game,
        level_name,
        won: game.is_won(),
        last_outcome: None,
    })?;

    loop {
        if game.is_won() {
            info!(
                "level {} won in {} moves, {} pushes",
                level_name,
                game.moves(),
                game.pushes()
            );
            // Keep showing the win screen until user inputs
            loop {
                match input.next_input()? {
                    ConsoleInput::Timeout => {}
                    _ => break,
                }
            }
            return Ok(summary(&game, true));
        }

        let last_outcome = match input.next_input()? {
            ConsoleInput::Quit => {
                info!("quit after {} moves", game.moves());
                return Ok(summary(&game, false));
            }
            ConsoleInput::Restart => {
                info!("restarting {}", level_name);
                game = initial.clone();
                None
            }
            ConsoleInput::UserAction(UserAction::Move(direction)) => {
                Some(game.attempt_move(direction))
            }
            ConsoleInput::Unknown => {
                debug!("ignoring unmapped key");
                continue;
            }
            ConsoleInput::Timeout => continue,
        };

        renderer.render(&GameRenderState {
            game: &game,
            level_name,
            won: game.is_won(),
            last_outcome,
        })?;
    }
}

fn summary(game: &GameState, won: bool) -> SessionSummary {
    SessionSummary {
        won,
        moves: game.moves(),
        pushes: game.pushes(),
    }
}
