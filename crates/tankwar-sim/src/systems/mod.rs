//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components and the engine.

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod enemy_ai;
pub mod fire;
pub mod movement;
pub mod phase;
pub mod reveal;
pub mod snapshot;

use hecs::Entity;

use tankwar_core::components::Health;
use tankwar_core::types::EntityId;

/// Wire id for an ECS handle.
pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// Invulnerable entities never die; everything else is alive above zero hp.
pub fn is_alive(health: &Health) -> bool {
    health.invulnerable || health.hp > 0
}
