//! Collision detection: box overlap between movers and everything else.

use glam::IVec2;
use hecs::{Entity, World};

use tankwar_core::components::*;
use tankwar_core::constants::*;
use tankwar_core::enums::{Direction, EntityKind};
use tankwar_core::events::GameEvent;
use tankwar_core::types::{Aabb, Position};

use super::{combat, is_alive};

/// Collision box for an entity of `kind` at `pos`.
pub fn bounding_box(kind: EntityKind, pos: Position, facing: Direction) -> Aabb {
    let size = match kind {
        EntityKind::Projectile if facing.is_vertical() => {
            IVec2::new(PROJECTILE_WIDTH, PROJECTILE_LENGTH)
        }
        EntityKind::Projectile => IVec2::new(PROJECTILE_LENGTH, PROJECTILE_WIDTH),
        _ => IVec2::splat(CELL_SIZE),
    };
    Aabb::new(pos.0, size)
}

/// Tanks and projectiles move; walls and bases never do.
fn is_mover(kind: EntityKind) -> bool {
    kind.is_tank() || kind == EntityKind::Projectile
}

/// Overlapping pairs as `(attacker, target)`, each unordered pair once.
///
/// At least one side of every pair is a mover. The attacker is the mover,
/// or the lower entity id when both move. Hidden and dead entities never
/// collide.
pub fn detect(world: &World) -> Vec<(Entity, Entity)> {
    let mut bodies: Vec<(Entity, EntityKind, Aabb)> = world
        .query::<(&EntityKind, &Position, &Facing, &Health, &Visibility)>()
        .iter()
        .filter(|(_, (_, _, _, health, visibility))| !visibility.hidden && is_alive(health))
        .map(|(entity, (kind, pos, facing, _, _))| {
            (entity, *kind, bounding_box(*kind, *pos, facing.0))
        })
        .collect();
    bodies.sort_by_key(|(entity, _, _)| entity.to_bits());

    let mut pairs = Vec::new();
    for (i, (first, first_kind, first_box)) in bodies.iter().enumerate() {
        for (second, second_kind, second_box) in &bodies[i + 1..] {
            if !is_mover(*first_kind) && !is_mover(*second_kind) {
                continue;
            }
            if !first_box.overlaps(second_box) {
                continue;
            }
            if is_mover(*first_kind) {
                pairs.push((*first, *second));
            } else {
                pairs.push((*second, *first));
            }
        }
    }
    pairs
}

/// Detect collisions and resolve each one in order.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    for (attacker, target) in detect(world) {
        combat::attack(world, attacker, target, events);
    }
}
