//! Driver configuration: an optional TOML file overridden by CLI flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::{Deserialize, Serialize};

use tankwar_core::constants::TICK_RATE;
use tankwar_sim::SimConfig;

use crate::error::{AppError, Result};

/// Tile-based tank battle driver. Reads commands as JSON lines on stdin and
/// writes one JSON snapshot per tick to stdout.
#[derive(Parser, Debug, Default)]
#[command(name = "tankwar")]
pub struct Cli {
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the map files
    #[arg(long)]
    pub maps_dir: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulation ticks per second
    #[arg(long)]
    pub tick_rate: Option<u32>,

    /// Seconds between enemy reveals (0 disables the timer)
    #[arg(long)]
    pub reveal_interval: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub maps_dir: PathBuf,
    /// Map files are the directory entries with this extension, played in name order.
    pub map_extension: String,
    pub seed: u64,
    pub tick_rate: u32,
    pub reveal_interval_secs: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let sim = SimConfig::default();
        Self {
            maps_dir: PathBuf::from("maps"),
            map_extension: "map".to_string(),
            seed: sim.seed,
            tick_rate: TICK_RATE,
            reveal_interval_secs: 1.0,
        }
    }
}

impl AppConfig {
    /// Load a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&content, path)
    }

    /// Parse config from a TOML string; `origin` only labels errors.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| AppError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Config file (if any) with CLI flags applied on top.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.maps_dir {
            self.maps_dir = dir.clone();
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(rate) = cli.tick_rate {
            self.tick_rate = rate;
        }
        if let Some(secs) = cli.reveal_interval {
            self.reveal_interval_secs = secs;
        }
    }

    /// Engine settings, with the reveal interval converted to ticks.
    pub fn sim_config(&self) -> SimConfig {
        let ticks = (self.reveal_interval_secs.max(0.0) * self.tick_rate as f64).round();
        SimConfig {
            seed: self.seed,
            reveal_interval_ticks: ticks as u64,
            tick_rate: self.tick_rate.max(1),
        }
    }

    /// Wall-clock duration of one tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.tick_rate.max(1) as u64)
    }
}
