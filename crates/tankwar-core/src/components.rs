//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;
use crate::groups::GroupSet;
use crate::types::{EntityId, Position};

/// Hit points. A negative value at construction marks the entity invulnerable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
    pub invulnerable: bool,
}

/// Damage dealt to the other party of a collision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Damage(pub i32);

/// Movement speed in pixels per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speed(pub i32);

/// Current facing; also the direction projectiles leave in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facing(pub Direction);

/// Last confirmed grid-aligned position, restored on bounds violations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastStep(pub Position);

/// Per-entity movement state, advanced once per tick by the movement system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    #[default]
    Idle,
    /// Fixed-distance move ending in a snap to `destination`.
    Bounded {
        direction: Direction,
        speed: i32,
        destination: Position,
        remaining: i32,
        /// Grid cell the mover left; released on arrival.
        origin: Position,
    },
    /// Open-ended move that stops only at the world edge.
    Unbounded { direction: Direction, speed: i32 },
}

/// Excluded from collision and rendering until revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub hidden: bool,
}

/// Group memberships; emptied when the entity dies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership(pub GroupSet);

/// Fire guard for tanks. The gun is ready when `cooldown_ticks` is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gun {
    pub cooldown_ticks: u64,
}

/// Enemy decision memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyBrain {
    /// Consecutive decisions taken without the tank having moved.
    pub stuck_count: u32,
}

/// Projectile ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: EntityId,
    /// Owner's groups when the shot was fired.
    pub faction: GroupSet,
}

/// Sprite reference handed through to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon(pub String);
