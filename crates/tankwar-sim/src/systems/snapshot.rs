//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use tankwar_core::components::*;
use tankwar_core::enums::*;
use tankwar_core::events::GameEvent;
use tankwar_core::state::*;
use tankwar_core::types::{Position, SimTime, WorldBounds};

use super::entity_id;
use super::phase::group_count;

/// Static facts about the loaded map that every snapshot repeats.
pub struct MapInfo<'a> {
    pub name: &'a str,
    pub bounds: WorldBounds,
    pub loaded: &'a BTreeMap<String, u32>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    map: &MapInfo<'_>,
    player: Option<Entity>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        map_name: map.name.to_string(),
        bounds: map.bounds,
        entities: build_entities(world),
        player: player.and_then(|p| build_player(world, p)),
        counts: CountsView {
            loaded: map.loaded.clone(),
            enemies_hidden: group_count(world, Group::HiddenEnemy),
            enemies_active: group_count(world, Group::EnemyTank),
            bases: group_count(world, Group::Base),
            projectiles: group_count(world, Group::Projectile),
        },
        events,
    }
}

/// Visible entities, ordered by id.
fn build_entities(world: &World) -> Vec<EntityView> {
    let mut entities: Vec<EntityView> = world
        .query::<(
            &EntityKind,
            &Position,
            &Facing,
            &Health,
            &Motion,
            &Visibility,
            Option<&Icon>,
        )>()
        .iter()
        .filter(|(_, (_, _, _, _, _, visibility, _))| !visibility.hidden)
        .map(
            |(entity, (kind, pos, facing, health, motion, _, icon))| EntityView {
                id: entity_id(entity),
                kind: *kind,
                position: *pos,
                facing: facing.0,
                hp: health.hp,
                moving: *motion != Motion::Idle,
                icon: icon.map(|i| i.0.clone()),
            },
        )
        .collect();

    entities.sort_by_key(|e| e.id);
    entities
}

fn build_player(world: &World, player: Entity) -> Option<PlayerView> {
    let mut query = world
        .query_one::<(&Position, &Health, &Gun)>(player)
        .ok()?;
    let (pos, health, gun) = query.get()?;
    Some(PlayerView {
        id: entity_id(player),
        hp: health.hp,
        position: *pos,
        gun_ready: gun.cooldown_ticks == 0,
    })
}
