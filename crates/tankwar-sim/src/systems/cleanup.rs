//! Cleanup system: removes dead entities from the grid and the world.

use hecs::{Entity, World};

use tankwar_core::components::Health;
use tankwar_map::WorldGrid;

use super::is_alive;
use super::movement::reclaim_cells;

/// Despawn every entity whose hit points reached zero and clear any grid
/// cell it still holds, handing the cell to a survivor resting there. Uses
/// a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, grid: &mut WorldGrid<Entity>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, health) in world.query_mut::<&Health>() {
        if !is_alive(health) {
            despawn_buffer.push(entity);
        }
    }
    if despawn_buffer.is_empty() {
        return;
    }

    let held: Vec<_> = grid
        .occupied()
        .filter(|(_, occupant)| despawn_buffer.contains(occupant))
        .collect();
    for &(cell, occupant) in &held {
        grid.release(cell, occupant);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    let freed: Vec<_> = held.into_iter().map(|(cell, _)| cell).collect();
    reclaim_cells(world, grid, &freed);
}
