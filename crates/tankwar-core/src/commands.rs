//! Player commands sent from the input collaborator to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Move the player tank one cell.
    Move { direction: Direction },
    /// Fire the player tank's gun.
    Fire,
    /// Reveal the next reserved enemy now (external timer signal).
    RevealNext,
    /// Acknowledge a finished map and continue to the next one.
    Dismiss,
    /// Abort the whole session.
    Quit,
}
