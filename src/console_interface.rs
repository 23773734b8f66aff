use crate::core::{Direction, GameState, MoveOutcome, Tile, TileGrid, UserAction};
use crate::game_loop::{ConsoleInput, InputSource, Renderer};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const CELL: &str = "  ";

pub fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode()?;
    let entered = (|| -> anyhow::Result<_> {
        crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        Ok(Terminal::new(backend)?)
    })();
    restore_on_error(entered, cleanup_terminal)
}

/// Runs `restore` when `result` failed, keeping the original error.
pub(crate) fn restore_on_error<T>(
    result: anyhow::Result<T>,
    restore: impl FnOnce() -> anyhow::Result<()>,
) -> anyhow::Result<T> {
    if result.is_err() {
        if let Err(err) = restore() {
            log::error!("failed to restore terminal: {}", err);
        }
    }
    result
}

pub fn cleanup_terminal() -> anyhow::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Owns the terminal for the length of a session and restores it on drop.
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalRenderer {
    pub fn new() -> anyhow::Result<Self> {
        Ok(TerminalRenderer {
            terminal: setup_terminal()?,
        })
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(err) = cleanup_terminal() {
            log::error!("failed to restore terminal: {}", err);
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, state: &GameRenderState) -> anyhow::Result<()> {
        render_game(&mut self.terminal, state)
    }
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> anyhow::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());
        let top = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(30)])
            .split(chunks[0]);

        // Game area
        let game_paragraph = Paragraph::new(render_grid_lines(state.game.grid()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Sokoban: {}", state.level_name)),
            )
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, top[0]);

        let legend = Paragraph::new(legend_lines())
            .block(Block::default().borders(Borders::ALL).title("Legend"));
        f.render_widget(legend, top[1]);

        let instruction_paragraph = Paragraph::new(status_text(state))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn status_text(state: &GameRenderState) -> String {
    let instructions = if state.won {
        "You Win! Press any key to quit."
    } else {
        "Move: WASD, arrows or hjkl | R restart | Q quit"
    };

    let instructions = format!(
        "{} | Moves: {} | Pushes: {}",
        instructions,
        state.game.moves(),
        state.game.pushes()
    );

    match state.last_outcome {
        Some(MoveOutcome::Blocked) => format!("{} | Blocked", instructions),
        _ => instructions,
    }
}

fn tile_color(tile: Tile) -> Color {
    if tile.has_box() && tile.has_cross() {
        Color::Green
    } else if tile.has_player() {
        Color::Blue
    } else if tile.has_cross() {
        Color::Yellow
    } else if tile.has_box() {
        Color::Red
    } else if tile.is_impassable() {
        Color::Black
    } else {
        Color::White
    }
}

fn render_grid_lines(grid: &TileGrid) -> Vec<Line<'static>> {
    grid.rows()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&tile| Span::styled(CELL, Style::default().bg(tile_color(tile))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

fn legend_lines() -> Vec<Line<'static>> {
    [
        (Tile::PLAYER, "Player"),
        (Tile::BOX, "Box on wrong square"),
        (Tile::BOX_ON_CROSS, "Box on target square"),
        (Tile::CROSS, "Target square"),
    ]
    .into_iter()
    .map(|(tile, label)| {
        Line::from(vec![
            Span::styled(CELL, Style::default().bg(tile_color(tile))),
            Span::raw(format!(": {}", label)),
        ])
    })
    .collect()
}

pub fn tile_symbol(tile: Tile) -> char {
    if tile.is_impassable() {
        '#'
    } else if tile.has_player() {
        if tile.has_cross() { '+' } else { '@' }
    } else if tile.has_box() {
        if tile.has_cross() { '*' } else { '$' }
    } else if tile.has_cross() {
        '.'
    } else {
        ' '
    }
}

/// Plain-symbol picture of the board: `#` impassable, `@` player, `+` player
/// on goal, `$` box, `*` box on goal, `.` goal.
pub fn render_game_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for row in game.grid().rows() {
        for &tile in row {
            result.push(tile_symbol(tile));
        }
        result.push('\n');
    }
    result
}

/// Reads key presses from the terminal via crossterm.
#[derive(Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn next_input(&mut self) -> anyhow::Result<ConsoleInput> {
        handle_input()
    }
}

pub fn handle_input() -> anyhow::Result<ConsoleInput> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}

pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        _ => ConsoleInput::Unknown,
    }
}
