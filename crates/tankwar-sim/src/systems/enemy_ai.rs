//! Enemy AI system: every idle enemy tank fires, then moves one cell.
//!
//! Decisions come from `tankwar_enemy_ai::pathing`; this system only reads
//! the world into an `EnemyContext` and applies the result.

use hecs::{Entity, World};
use rand::Rng;

use tankwar_core::components::*;
use tankwar_core::constants::CELL_SIZE;
use tankwar_core::enums::{EntityKind, Group};
use tankwar_core::events::GameEvent;
use tankwar_core::types::{Position, WorldBounds};
use tankwar_enemy_ai::pathing::{search_path, EnemyContext};
use tankwar_map::WorldGrid;

use super::{fire, is_alive, movement};

/// Run one decision for every visible, idle, live enemy tank.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    grid: &mut WorldGrid<Entity>,
    bounds: WorldBounds,
    player: Option<Entity>,
    tick_rate: u32,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let target_tank = player.and_then(|p| live_position(world, p));
    let base = first_base(world);

    let mut idle: Vec<Entity> = world
        .query::<(&EntityKind, &Motion, &Membership, &Visibility, &Health)>()
        .iter()
        .filter(|(_, (kind, motion, membership, visibility, health))| {
            **kind == EntityKind::EnemyTank
                && **motion == Motion::Idle
                && membership.0.contains(Group::EnemyTank)
                && !visibility.hidden
                && is_alive(health)
        })
        .map(|(entity, _)| entity)
        .collect();
    idle.sort();

    for enemy in idle {
        fire::fire(world, enemy, tick_rate, events);

        let Ok((pos, last_step, speed, brain)) =
            world.query_one_mut::<(&Position, &LastStep, &Speed, &mut EnemyBrain)>(enemy)
        else {
            continue;
        };
        let ctx = EnemyContext {
            position: *pos,
            last_step: last_step.0,
            stuck_count: brain.stuck_count,
            target_tank,
            base,
        };
        let decision = search_path(&ctx, rng);
        brain.stuck_count = decision.stuck_count;
        let speed = speed.0;

        if decision.escaped {
            tracing::debug!(?enemy, direction = ?decision.direction, "stuck, trying a random direction");
        }
        movement::begin_move(world, grid, bounds, enemy, decision.direction, speed, CELL_SIZE);
    }
}

fn live_position(world: &World, entity: Entity) -> Option<Position> {
    let mut query = world.query_one::<(&Position, &Health)>(entity).ok()?;
    let (pos, health) = query.get()?;
    is_alive(health).then_some(*pos)
}

/// The earliest-spawned base still standing.
fn first_base(world: &World) -> Option<Position> {
    world
        .query::<(&Position, &Membership)>()
        .iter()
        .filter(|(_, (_, membership))| membership.0.contains(Group::Base))
        .min_by_key(|(entity, _)| *entity)
        .map(|(_, (pos, _))| *pos)
}
