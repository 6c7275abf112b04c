//! Messages shared between the input thread and the game loop thread.

use tankwar_core::commands::PlayerCommand;
use tankwar_core::enums::Outcome;

/// Commands sent from the input side to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// How one map ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapExit {
    /// The map was won or lost and the player dismissed the result.
    Finished(Outcome),
    /// Quit, shutdown, or the input side went away.
    Quit,
}
