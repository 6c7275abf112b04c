//! Game state snapshot: the complete visible state handed to the renderer each tick.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{EntityId, Position, SimTime, WorldBounds};

/// Complete game state broadcast to the renderer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub map_name: String,
    pub bounds: WorldBounds,
    /// Live, visible entities ordered by id.
    pub entities: Vec<EntityView>,
    pub player: Option<PlayerView>,
    pub counts: CountsView,
    pub events: Vec<GameEvent>,
}

/// One drawable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Position,
    pub facing: Direction,
    pub hp: i32,
    pub moving: bool,
    /// Sprite override from the map header (enemy variants).
    pub icon: Option<String>,
}

/// Player tank status for a HUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: EntityId,
    pub hp: i32,
    pub position: Position,
    pub gun_ready: bool,
}

/// Per-category tallies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountsView {
    /// Tokens per header kind as loaded from the map.
    pub loaded: BTreeMap<String, u32>,
    pub enemies_hidden: u32,
    pub enemies_active: u32,
    pub bases: u32,
    pub projectiles: u32,
}
