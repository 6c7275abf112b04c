use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tankwar_app::config::{AppConfig, Cli};
use tankwar_app::error::{AppError, Result};
use tankwar_app::game_loop;
use tankwar_app::ipc::{self, JsonLineSink};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries snapshots.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,tankwar=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::resolve(&cli)?;
    let maps = tankwar_map::discover_maps(&config.maps_dir, &config.map_extension)?;
    if maps.is_empty() {
        return Err(AppError::NoMaps {
            dir: config.maps_dir.clone(),
            extension: config.map_extension.clone(),
        });
    }
    tracing::info!(count = maps.len(), dir = %config.maps_dir.display(), "maps found");

    let sink = JsonLineSink::new(io::stdout());
    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, maps, sink)?;
    ipc::spawn_input_reader(cmd_tx)?;

    // The input thread may still be blocked on stdin; returning ends it.
    handle.join().map_err(|_| AppError::LoopPanicked)?
}
