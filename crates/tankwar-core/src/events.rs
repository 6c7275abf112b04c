//! Events emitted by the simulation for rendering and log feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, GamePhase};
use crate::types::{EntityId, Position};

/// Things that happened during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A tank fired a projectile.
    Fired { tank: EntityId, projectile: EntityId },
    /// Damage landed on a vulnerable entity.
    Damaged {
        entity: EntityId,
        amount: i32,
        hp_left: i32,
    },
    /// Damage was ignored by an invulnerable entity.
    Invulnerable { entity: EntityId },
    /// An entity reached zero hit points or left the world.
    Destroyed {
        entity: EntityId,
        kind: EntityKind,
        position: Position,
    },
    /// A reserved enemy joined the battle.
    Revealed { entity: EntityId },
    /// The game phase changed.
    PhaseChanged { phase: GamePhase },
}
