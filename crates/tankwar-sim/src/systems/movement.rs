//! Movement: move requests plus the per-tick advance of every `Motion`.
//!
//! A move is a small state machine (`Idle -> Bounded/Unbounded -> Idle`)
//! stepped once per tick, so the grid check for a bounded move happens only
//! when the move starts.

use hecs::{Entity, World};

use tankwar_core::components::*;
use tankwar_core::enums::{Direction, EntityKind};
use tankwar_core::events::GameEvent;
use tankwar_core::types::{Cell, Position, WorldBounds};
use tankwar_map::WorldGrid;

use super::{entity_id, is_alive};

/// Face `direction`. No physics.
pub fn turn(world: &mut World, entity: Entity, direction: Direction) {
    if let Ok(mut facing) = world.get::<&mut Facing>(entity) {
        facing.0 = direction;
    }
}

/// Snap back to the last confirmed grid-aligned position.
pub fn move_restore(world: &mut World, entity: Entity) {
    let Ok(last_step) = world.get::<&LastStep>(entity).map(|step| step.0) else {
        return;
    };
    if let Ok(mut pos) = world.get::<&mut Position>(entity) {
        *pos = last_step;
    }
}

/// Start a move. Returns whether motion actually began.
///
/// `displacement == 0` starts an unbounded move. Otherwise the destination is
/// checked once, here: an out-of-bounds destination or a cell held by another
/// visible entity aborts the move and leaves the mover where it was. The
/// mover turns to `direction` even when the move is refused. A mover that is
/// already in motion ignores the request entirely.
pub fn begin_move(
    world: &mut World,
    grid: &mut WorldGrid<Entity>,
    bounds: WorldBounds,
    entity: Entity,
    direction: Direction,
    speed: i32,
    displacement: i32,
) -> bool {
    let (pos, idle) = match world.query_one_mut::<(&Position, &Motion)>(entity) {
        Ok((pos, motion)) => (*pos, *motion == Motion::Idle),
        Err(_) => return false,
    };
    if !idle {
        return false;
    }

    turn(world, entity, direction);
    if pos.is_grid_aligned() {
        if let Ok(mut last_step) = world.get::<&mut LastStep>(entity) {
            last_step.0 = pos;
        }
    }
    if speed <= 0 {
        return false;
    }

    let motion = if displacement == 0 {
        Motion::Unbounded { direction, speed }
    } else {
        let destination = pos.offset(direction, displacement);
        if bounds.is_out_of_bounds(&destination) || is_blocked(world, grid, entity, destination) {
            move_restore(world, entity);
            return false;
        }
        grid.set(destination.cell(), Some(entity));
        Motion::Bounded {
            direction,
            speed,
            destination,
            remaining: displacement,
            origin: pos,
        }
    };

    tracing::debug!(?entity, ?direction, speed, "started moving");
    if let Ok(mut current) = world.get::<&mut Motion>(entity) {
        *current = motion;
    }
    true
}

/// Whether another live, visible entity holds the cell of `destination`.
fn is_blocked(world: &World, grid: &WorldGrid<Entity>, mover: Entity, destination: Position) -> bool {
    let Some(occupant) = grid.get(destination.cell()) else {
        return false;
    };
    if occupant == mover {
        return false;
    }
    world
        .get::<&Visibility>(occupant)
        .is_ok_and(|visibility| !visibility.hidden)
}

/// Give each freed cell to a resting, visible entity that sits in it.
///
/// A tank revealed onto a cell another tank holds is left off the grid; it
/// picks its cell up here once the other tank releases it.
pub fn reclaim_cells(world: &World, grid: &mut WorldGrid<Entity>, cells: &[Cell]) {
    for &cell in cells {
        if grid.get(cell).is_some() {
            continue;
        }
        let resting = world
            .query::<(&EntityKind, &Position, &Motion, &Visibility, &Health)>()
            .iter()
            .filter(|(_, (kind, pos, motion, visibility, health))| {
                **kind != EntityKind::Projectile
                    && **motion == Motion::Idle
                    && !visibility.hidden
                    && is_alive(health)
                    && pos.is_grid_aligned()
                    && pos.cell() == cell
            })
            .map(|(entity, _)| entity)
            .min_by_key(|entity| entity.id());
        if let Some(entity) = resting {
            grid.set(cell, Some(entity));
        }
    }
}

/// Advance every moving entity by one tick.
///
/// Bounded moves step `speed` pixels while more than `speed` remains, then
/// snap to the destination and release the origin cell. Unbounded moves stop
/// at the world edge by restoring the last in-bounds position; a projectile
/// that reaches the edge is destroyed.
pub fn run(
    world: &mut World,
    grid: &mut WorldGrid<Entity>,
    bounds: WorldBounds,
    events: &mut Vec<GameEvent>,
) {
    let mut released = Vec::new();
    for (entity, (kind, pos, motion, last_step, health, membership)) in world.query_mut::<(
        &EntityKind,
        &mut Position,
        &mut Motion,
        &mut LastStep,
        &mut Health,
        &mut Membership,
    )>() {
        match *motion {
            Motion::Idle => {}
            Motion::Bounded {
                direction,
                speed,
                destination,
                remaining,
                origin,
            } => {
                if remaining > speed {
                    *pos = pos.offset(direction, speed);
                    *motion = Motion::Bounded {
                        direction,
                        speed,
                        destination,
                        remaining: remaining - speed,
                        origin,
                    };
                } else {
                    *pos = destination;
                    grid.release(origin.cell(), entity);
                    released.push(origin.cell());
                    *motion = Motion::Idle;
                }
            }
            Motion::Unbounded { direction, speed } => {
                let next = pos.offset(direction, speed);
                if bounds.is_out_of_bounds(&next) {
                    *pos = last_step.0;
                    *motion = Motion::Idle;
                    if *kind == EntityKind::Projectile {
                        health.hp = 0;
                        membership.0.clear();
                        events.push(GameEvent::Destroyed {
                            entity: entity_id(entity),
                            kind: *kind,
                            position: *pos,
                        });
                    }
                } else {
                    *pos = next;
                    last_step.0 = next;
                }
            }
        }
    }

    reclaim_cells(world, grid, &released);
}
