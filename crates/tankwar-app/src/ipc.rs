//! Stdio bridge to the external renderer and input source.
//!
//! Input: one `PlayerCommand` JSON object per line, e.g.
//! `{"type":"Move","direction":"Left"}`. Output: one `GameStateSnapshot`
//! JSON object per line, written after every tick.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread::JoinHandle;

use tankwar_core::commands::PlayerCommand;
use tankwar_core::state::GameStateSnapshot;

use crate::error::Result;
use crate::state::GameLoopCommand;

/// Where the game loop sends each tick's snapshot.
pub trait SnapshotSink {
    fn emit(&mut self, snapshot: &GameStateSnapshot) -> Result<()>;
}

/// Writes snapshots as JSON lines, flushing after each one.
pub struct JsonLineSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SnapshotSink for JsonLineSink<W> {
    fn emit(&mut self, snapshot: &GameStateSnapshot) -> Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// In-process renderer on the other end of a channel. A dropped receiver
/// is not an error; the snapshot is simply discarded.
impl SnapshotSink for mpsc::Sender<GameStateSnapshot> {
    fn emit(&mut self, snapshot: &GameStateSnapshot) -> Result<()> {
        let _ = self.send(snapshot.clone());
        Ok(())
    }
}

/// Parse one input line. Blank lines are skipped, bad lines are logged and skipped.
pub fn parse_command(line: &str) -> Option<PlayerCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str(line) {
        Ok(command) => Some(command),
        Err(e) => {
            tracing::warn!("ignoring input line {line:?}: {e}");
            None
        }
    }
}

/// Forward commands from `reader` until end of input, then ask the loop to
/// shut down. Returns early if the game loop is gone.
pub fn forward_commands<R: BufRead>(reader: R, cmd_tx: &mpsc::Sender<GameLoopCommand>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("input closed: {e}");
                break;
            }
        };
        if let Some(command) = parse_command(&line) {
            if cmd_tx.send(GameLoopCommand::PlayerCommand(command)).is_err() {
                return;
            }
        }
    }
    tracing::info!("end of input");
    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}

/// Read commands from stdin on a background thread.
pub fn spawn_input_reader(cmd_tx: mpsc::Sender<GameLoopCommand>) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("tankwar-input".into())
        .spawn(move || forward_commands(io::stdin().lock(), &cmd_tx))
}
