//! Configuration management for the board checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - TOML configuration files (project and user level)
//! - Marker character selection

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::parser::lexer::{Markers, DEFAULT_FILLER, DEFAULT_UNFINISHED};

/// Configuration file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".skyscrapers.toml";

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Command-line arguments for the board checker
#[derive(Debug, Parser)]
#[command(name = "skyscrapers-check")]
#[command(about = "Check finished Skyscrapers boards against their hints")]
#[command(version)]
pub struct Args {
    /// Board files to check
    #[arg(required = true, help = "Board files, one grid row per line")]
    pub boards: Vec<PathBuf>,

    #[arg(long, help = "Character marking an unresolved cell (default '?')")]
    pub unfinished: Option<char>,

    #[arg(long, help = "Character marking a border cell without a hint (default '*')")]
    pub filler: Option<char>,

    /// Explicit configuration file, replaces discovery
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Contents of a configuration file
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub unfinished: Option<char>,
    pub filler: Option<char>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub boards: Vec<PathBuf>,
    pub markers: Markers,
    pub format: OutputFormat,
    pub log_level: String,
    /// Configuration file that was loaded, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments, discovering a
    /// configuration file from the working directory
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let discovered = discover_config_file(&cwd);
        Self::with_config_file(args, discovered)
    }

    /// Create configuration with an already discovered file (useful for
    /// testing)
    ///
    /// `--config` wins over `discovered`; CLI marker flags win over the file.
    pub fn with_config_file(args: Args, discovered: Option<PathBuf>) -> Result<Self> {
        let config_file = args.config.clone().or(discovered);
        let file = match &config_file {
            Some(path) => load_config_file(path)?,
            None => FileConfig::default(),
        };

        let markers = Markers {
            unfinished: args
                .unfinished
                .or(file.unfinished)
                .unwrap_or(DEFAULT_UNFINISHED),
            filler: args.filler.or(file.filler).unwrap_or(DEFAULT_FILLER),
        };
        check_markers(&markers)?;

        Ok(Config {
            boards: args.boards,
            markers,
            format: args.format,
            log_level: args.log_level,
            config_file,
        })
    }

    pub fn has_config_file(&self) -> bool {
        self.config_file.is_some()
    }
}

/// Find the configuration file for `dir`
///
/// The project file in `dir` comes first, then the user file under the
/// platform configuration directory.
pub fn discover_config_file(dir: &Path) -> Option<PathBuf> {
    let project = dir.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    let user = dirs::config_dir()?.join("skyscrapers").join("config.toml");
    user.is_file().then_some(user)
}

pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    let file: FileConfig = toml::from_str(&content)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(file)
}

fn check_markers(markers: &Markers) -> Result<()> {
    for (name, ch) in [("unfinished", markers.unfinished), ("filler", markers.filler)] {
        if ch.is_ascii_digit() {
            bail!("{name} marker {ch:?} must not be a digit");
        }
        if ch.is_whitespace() {
            bail!("{name} marker must not be whitespace");
        }
    }
    if markers.unfinished == markers.filler {
        bail!(
            "unfinished and filler markers must differ, both are {:?}",
            markers.filler
        );
    }
    Ok(())
}
