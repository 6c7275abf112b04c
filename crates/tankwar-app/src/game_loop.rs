//! Game loop thread: plays the map sequence at a fixed tick rate and emits snapshots.
//!
//! Each map gets its own engine, created inside this thread. Commands arrive
//! via an `mpsc` channel. A finished map waits for `Dismiss` before the next
//! one is loaded; `Quit` ends the whole sequence at once.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tankwar_core::commands::PlayerCommand;
use tankwar_core::enums::GamePhase;
use tankwar_map::{load_map, EntityRegistry};
use tankwar_sim::SimulationEngine;

use crate::config::AppConfig;
use crate::error::Result;
use crate::ipc::SnapshotSink;
use crate::state::{GameLoopCommand, MapExit};

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input side and the thread handle,
/// which yields the first fatal error, if any.
pub fn spawn_game_loop<S>(
    config: AppConfig,
    maps: Vec<PathBuf>,
    mut sink: S,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<Result<()>>)>
where
    S: SnapshotSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("tankwar-game-loop".into())
        .spawn(move || run_game_loop(&config, &maps, &cmd_rx, &mut sink))?;

    Ok((cmd_tx, handle))
}

/// Play `maps` in order. Stops early on quit; a map that fails to load is fatal.
pub fn run_game_loop(
    config: &AppConfig,
    maps: &[PathBuf],
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    sink: &mut dyn SnapshotSink,
) -> Result<()> {
    let registry = EntityRegistry::default();

    for path in maps {
        let map = load_map(path, &registry)?;
        let mut engine = SimulationEngine::new(config.sim_config(), &map);

        match run_map(&mut engine, cmd_rx, sink, config.tick_duration())? {
            MapExit::Finished(outcome) => {
                tracing::info!(
                    map = engine.map_name(),
                    ticks = engine.time().tick,
                    ?outcome,
                    "map finished"
                );
            }
            MapExit::Quit => {
                tracing::info!(map = engine.map_name(), ticks = engine.time().tick, "quit");
                return Ok(());
            }
        }
    }

    tracing::info!("all maps played");
    Ok(())
}

/// Tick one map until it ends and the result is dismissed, or until quit.
pub fn run_map(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    sink: &mut dyn SnapshotSink,
    tick_duration: Duration,
) -> Result<MapExit> {
    let mut next_tick_time = Instant::now();

    loop {
        if let GamePhase::GameOver(outcome) = engine.phase() {
            return Ok(wait_for_dismiss(outcome, cmd_rx));
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(PlayerCommand::Quit))
                | Ok(GameLoopCommand::Shutdown)
                | Err(mpsc::TryRecvError::Disconnected) => return Ok(MapExit::Quit),
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick and hand the snapshot to the renderer
        let snapshot = engine.tick();
        sink.emit(&snapshot)?;

        // 3. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Block until the finished map is dismissed. Other commands are dropped.
fn wait_for_dismiss(
    outcome: tankwar_core::enums::Outcome,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> MapExit {
    loop {
        match cmd_rx.recv() {
            Ok(GameLoopCommand::PlayerCommand(PlayerCommand::Dismiss)) => {
                return MapExit::Finished(outcome)
            }
            Ok(GameLoopCommand::PlayerCommand(PlayerCommand::Quit))
            | Ok(GameLoopCommand::Shutdown)
            | Err(_) => return MapExit::Quit,
            Ok(GameLoopCommand::PlayerCommand(_)) => {}
        }
    }
}
