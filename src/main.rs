// Terminal Sokoban
// Controls: W/A/S/D, arrow keys or h/j/k/l to move. R restarts, Q quits.
// Levels are grids of tile codes: 0 clear, 1 goal, 2 box, 3 box on goal,
// 4 player, 5 player on goal, 6 wall.

use anyhow::Context;
use clap::Parser;
use log::info;
use std::fs::File;

use sokoban::config::{Cli, FileConfig, GameConfig};
use sokoban::console_interface::{CrosstermInput, TerminalRenderer};
use sokoban::game_loop::{load_game, run_interactive};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let file_config = FileConfig::load(cli.config.as_deref())?;
    let config = GameConfig::from_sources(cli, file_config);

    init_logging(&config)?;

    // Load before touching the terminal so errors print normally
    let level_path = config.resolve_level_path()?;
    let game = load_game(&level_path)?;
    let level_name = GameConfig::level_name(&level_path);

    let summary = {
        let mut renderer = TerminalRenderer::new()?;
        let mut input = CrosstermInput;
        run_interactive(game, &level_name, &mut renderer, &mut input)?
    };

    if summary.won {
        println!(
            "You won {} in {} moves ({} pushes)!",
            level_name, summary.moves, summary.pushes
        );
    }
    info!("session ended: {:?}", summary);
    Ok(())
}

fn init_logging(config: &GameConfig) -> anyhow::Result<()> {
    let log_out = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(log_out)))
    .init();
    Ok(())
}
