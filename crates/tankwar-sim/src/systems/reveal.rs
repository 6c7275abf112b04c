//! Enemy reserve: hidden tanks join the battle one at a time.

use std::collections::VecDeque;

use hecs::{Entity, World};

use tankwar_core::components::{Membership, Visibility};
use tankwar_core::enums::Group;
use tankwar_core::events::GameEvent;
use tankwar_core::types::Position;
use tankwar_map::WorldGrid;

use super::entity_id;

/// Reveal the next reserved enemy in load order.
///
/// The tank leaves `HiddenEnemy`, joins `EnemyTank`, becomes visible and
/// takes its grid cell if the cell is free (otherwise it gets the cell when
/// the holder releases it, see [`super::movement::reclaim_cells`]). Returns `None` once the reserve
/// is exhausted.
pub fn reveal_next(
    world: &mut World,
    grid: &mut WorldGrid<Entity>,
    reserve: &mut VecDeque<Entity>,
    events: &mut Vec<GameEvent>,
) -> Option<Entity> {
    while let Some(entity) = reserve.pop_front() {
        let Ok((pos, visibility, membership)) =
            world.query_one_mut::<(&Position, &mut Visibility, &mut Membership)>(entity)
        else {
            continue;
        };
        visibility.hidden = false;
        membership.0.remove(Group::HiddenEnemy);
        membership.0.insert(Group::EnemyTank);

        let cell = pos.cell();
        if grid.get(cell).is_none() {
            grid.set(cell, Some(entity));
        }

        tracing::info!(?entity, remaining = reserve.len(), "enemy tank revealed");
        events.push(GameEvent::Revealed {
            entity: entity_id(entity),
        });
        return Some(entity);
    }
    None
}

/// Countdown to the next timed reveal. An interval of zero disables the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimer {
    interval_ticks: u64,
    remaining: u64,
}

impl RevealTimer {
    pub fn new(interval_ticks: u64) -> Self {
        Self {
            interval_ticks,
            remaining: interval_ticks,
        }
    }

    /// Count one tick; true when a reveal is due.
    pub fn tick(&mut self) -> bool {
        if self.interval_ticks == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = self.interval_ticks;
            true
        } else {
            false
        }
    }
}
