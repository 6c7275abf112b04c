//! Win/loss evaluation.

use hecs::{Entity, World};

use tankwar_core::components::{Health, Membership};
use tankwar_core::enums::{GamePhase, Group, Outcome};

/// Live members of `group`.
pub fn group_count(world: &World, group: Group) -> u32 {
    world
        .query::<&Membership>()
        .iter()
        .filter(|(_, membership)| membership.0.contains(group))
        .count() as u32
}

/// Phase after this tick.
///
/// Lost when the player tank is dead or gone, or when a map that started
/// with bases has none left. Won when no enemy is waiting in the reserve and
/// none is still fighting. A loss wins over a win in the same tick.
pub fn evaluate(world: &World, player: Option<Entity>, has_bases: bool) -> GamePhase {
    let player_dead = player
        .and_then(|p| world.get::<&Health>(p).ok().map(|h| h.hp == 0))
        .unwrap_or(true);
    let bases_gone = has_bases && group_count(world, Group::Base) == 0;
    if player_dead || bases_gone {
        return GamePhase::GameOver(Outcome::Lost);
    }

    let enemies_left =
        group_count(world, Group::HiddenEnemy) + group_count(world, Group::EnemyTank);
    if enemies_left == 0 {
        return GamePhase::GameOver(Outcome::Won);
    }
    GamePhase::Running
}
