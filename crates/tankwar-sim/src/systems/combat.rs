//! Combat resolution between two colliding entities.
//!
//! Friend or foe is decided by group membership: any shared group means
//! friendly. Projectiles judge targets against the faction captured when
//! they were fired.

use hecs::{Entity, World};

use tankwar_core::components::*;
use tankwar_core::enums::EntityKind;
use tankwar_core::events::GameEvent;
use tankwar_core::groups::GroupSet;
use tankwar_core::types::Position;

use super::{entity_id, is_alive};

/// The parts of an entity combat looks at.
#[derive(Debug, Clone, Copy)]
struct Combatant {
    kind: EntityKind,
    hidden: bool,
    alive: bool,
    groups: GroupSet,
    damage: i32,
}

fn combatant(world: &World, entity: Entity) -> Option<Combatant> {
    let mut query = world
        .query_one::<(&EntityKind, &Visibility, &Health, &Membership, &Damage)>(entity)
        .ok()?;
    let (kind, visibility, health, membership, damage) = query.get()?;
    Some(Combatant {
        kind: *kind,
        hidden: visibility.hidden,
        alive: is_alive(health),
        groups: membership.0,
        damage: damage.0,
    })
}

/// `attacker` collided with `target`.
///
/// Nothing happens if either side is hidden or already dead, or if the two
/// share a group. A projectile on either side resolves through
/// [`projectile_attack`]; otherwise both sides take the other's damage.
pub fn attack(world: &mut World, attacker: Entity, target: Entity, events: &mut Vec<GameEvent>) {
    let (Some(a), Some(b)) = (combatant(world, attacker), combatant(world, target)) else {
        return;
    };
    if a.hidden || b.hidden || !a.alive || !b.alive {
        return;
    }
    if a.kind == EntityKind::Projectile {
        projectile_attack(world, attacker, target, events);
        return;
    }
    if a.groups.is_empty() || !a.groups.is_disjoint(&b.groups) {
        return;
    }
    if b.kind == EntityKind::Projectile {
        projectile_attack(world, target, attacker, events);
        return;
    }

    tracing::debug!(?attacker, ?target, "collision");
    apply_damage(world, target, a.damage, events);
    apply_damage(world, attacker, b.damage, events);
}

/// A projectile hit `target`.
///
/// A foe of the firing faction takes the projectile's damage and the
/// projectile takes the target's. A friend is left untouched and only the
/// projectile takes damage.
pub fn projectile_attack(
    world: &mut World,
    projectile: Entity,
    target: Entity,
    events: &mut Vec<GameEvent>,
) {
    let Some(faction) = world
        .get::<&Projectile>(projectile)
        .ok()
        .map(|p| p.faction)
    else {
        return;
    };
    let (Some(shot), Some(hit)) = (combatant(world, projectile), combatant(world, target)) else {
        return;
    };
    if hit.hidden || !shot.alive || !hit.alive || faction.is_empty() {
        return;
    }

    if faction.is_disjoint(&hit.groups) {
        tracing::debug!(?projectile, ?target, "projectile hit");
        apply_damage(world, target, shot.damage, events);
    }
    apply_damage(world, projectile, hit.damage, events);
}

/// Apply `amount` damage. Returns whether the entity is invulnerable.
///
/// Hit points never drop below zero and negative amounts count as zero.
/// Reaching zero kills the entity: it leaves every group and is despawned
/// by the cleanup system.
pub fn apply_damage(
    world: &mut World,
    entity: Entity,
    amount: i32,
    events: &mut Vec<GameEvent>,
) -> bool {
    let Ok((kind, pos, health, membership)) =
        world.query_one_mut::<(&EntityKind, &Position, &mut Health, &mut Membership)>(entity)
    else {
        return false;
    };

    if health.invulnerable {
        tracing::debug!(?entity, "invulnerable");
        events.push(GameEvent::Invulnerable {
            entity: entity_id(entity),
        });
        return true;
    }
    if health.hp == 0 {
        return false;
    }

    let amount = amount.max(0);
    let hp_left = health.hp.saturating_sub(amount);
    if hp_left <= 0 {
        health.hp = 0;
        membership.0.clear();
        tracing::debug!(?entity, ?kind, "killed");
        events.push(GameEvent::Destroyed {
            entity: entity_id(entity),
            kind: *kind,
            position: *pos,
        });
    } else {
        health.hp = hp_left;
        tracing::debug!(?entity, amount, hp_left = health.hp, "damaged");
        events.push(GameEvent::Damaged {
            entity: entity_id(entity),
            amount,
            hp_left: health.hp,
        });
    }
    false
}
