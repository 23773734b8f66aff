use anyhow::{Context, bail};
use clap::Parser;
use log::{LevelFilter, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_CONFIG_FILE: &str = "sokoban.toml";

#[derive(Debug, Parser)]
#[command(name = "sokoban", about = "Push every box onto a goal.")]
pub struct Cli {
    /// Level name (looked up in the levels directory) or path to a level file.
    #[arg(short, long)]
    pub level: Option<String>,

    /// Config file. Defaults to ./sokoban.toml when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub levels_dir: Option<PathBuf>,

    /// Log output file. The terminal is taken over by the game.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub levels: LevelsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LevelsConfig {
    #[serde(default = "default_levels_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_level")]
    pub default_level: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_levels_dir() -> PathBuf {
    PathBuf::from("levels")
}

fn default_level() -> String {
    "level01".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("sokoban.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LevelsConfig {
    fn default() -> Self {
        LevelsConfig {
            dir: default_levels_dir(),
            default_level: default_level(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

impl FileConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// An explicitly requested file must load. The implicit default file is
    /// optional and falls back to defaults when unusable.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            return FileConfig::from_toml(&contents)
                .with_context(|| format!("parsing config {}", path.display()));
        }

        match fs::read_to_string(DEFAULT_CONFIG_FILE) {
            Ok(contents) => match FileConfig::from_toml(&contents) {
                Ok(config) => Ok(config),
                Err(e) => {
                    // logging is not up yet
                    eprintln!("Warning: failed to parse {}: {:#}", DEFAULT_CONFIG_FILE, e);
                    Ok(FileConfig::default())
                }
            },
            Err(_) => Ok(FileConfig::default()),
        }
    }
}

/// Everything the binary needs to start a level.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub level: String,
    pub levels_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl GameConfig {
    pub fn from_sources(cli: Cli, file: FileConfig) -> Self {
        GameConfig {
            level: cli.level.unwrap_or(file.levels.default_level),
            levels_dir: cli.levels_dir.unwrap_or(file.levels.dir),
            log_file: cli.log_file.unwrap_or(file.logging.file),
            log_level: parse_log_level(&file.logging.level),
        }
    }

    /// Paths tried, in order, when looking for the configured level.
    pub fn level_candidates(&self) -> Vec<PathBuf> {
        vec![
            PathBuf::from(&self.level),
            self.levels_dir.join(&self.level),
            self.levels_dir.join(format!("{}.txt", self.level)),
        ]
    }

    pub fn resolve_level_path(&self) -> anyhow::Result<PathBuf> {
        let candidates = self.level_candidates();
        if let Some(found) = candidates.iter().find(|path| path.is_file()) {
            return Ok(found.clone());
        }
        let tried = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        bail!("level {:?} not found (tried {})", self.level, tried)
    }

    /// Name shown in the title bar: the file stem of the resolved level.
    pub fn level_name(path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| {
                warn!("level path {} has no file name", path.display());
                path.display().to_string()
            })
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or_else(|_| {
        // logging is not up yet
        eprintln!("Warning: unknown log level {:?}, using info", level);
        LevelFilter::Info
    })
}
