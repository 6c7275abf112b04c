//! Tank guns: firing projectiles and cooling down.

use hecs::{Entity, World};

use tankwar_core::components::*;
use tankwar_core::constants::*;
use tankwar_core::events::GameEvent;
use tankwar_core::types::Position;

use super::{entity_id, is_alive};
use crate::world_setup;

/// Gun cooldown after a shot: `speed * 60 ms`, rounded up to whole ticks.
pub fn reload_ticks(speed: i32, tick_rate: u32) -> u64 {
    let speed = speed.max(0) as u64;
    (speed * RELOAD_MS_PER_SPEED * tick_rate as u64).div_ceil(1000)
}

/// Fire one projectile from `tank` if its gun is ready.
///
/// The projectile starts one cell ahead of the tank, centred in that cell,
/// carrying the tank's damage and travelling one pixel per tick faster.
pub fn fire(
    world: &mut World,
    tank: Entity,
    tick_rate: u32,
    events: &mut Vec<GameEvent>,
) -> Option<Entity> {
    let (pos, facing, damage, speed, faction) = {
        let (pos, facing, damage, speed, health, membership, gun) = world
            .query_one_mut::<(
                &Position,
                &Facing,
                &Damage,
                &Speed,
                &Health,
                &Membership,
                &mut Gun,
            )>(tank)
            .ok()?;
        if gun.cooldown_ticks > 0 || !is_alive(health) {
            return None;
        }
        gun.cooldown_ticks = reload_ticks(speed.0, tick_rate);
        (*pos, facing.0, damage.0, speed.0, membership.0)
    };

    let ahead = pos.offset(facing, CELL_SIZE);
    let spawn_at = Position::new(
        ahead.x() + PROJECTILE_ALIGN_X,
        ahead.y() + PROJECTILE_ALIGN_Y,
    );
    let projectile = world_setup::spawn_projectile(
        world,
        tank,
        spawn_at,
        facing,
        damage,
        speed.saturating_add(PROJECTILE_SPEED_BONUS),
        faction,
    );

    tracing::debug!(?tank, ?projectile, "started firing");
    events.push(GameEvent::Fired {
        tank: entity_id(tank),
        projectile: entity_id(projectile),
    });
    Some(projectile)
}

/// Count every gun one tick closer to ready.
pub fn run(world: &mut World) {
    for (_entity, gun) in world.query_mut::<&mut Gun>() {
        gun.cooldown_ticks = gun.cooldown_ticks.saturating_sub(1);
    }
}
