//! Entity spawn factories for setting up the simulation world.
//!
//! Turns a parsed map into ECS entities and spawns projectiles at fire time.

use std::collections::VecDeque;

use hecs::{Entity, EntityBuilder, World};

use tankwar_core::components::*;
use tankwar_core::constants::PROJECTILE_HP;
use tankwar_core::enums::{Direction, EntityKind, Group};
use tankwar_core::groups::GroupSet;
use tankwar_core::types::Position;
use tankwar_map::{Blueprint, ParsedMap, WorldGrid};

/// Handles produced by spawning a map.
pub struct SpawnedMap {
    /// Occupancy of every visible tank and static item.
    pub grid: WorldGrid<Entity>,
    /// First player tank in reading order.
    pub player: Option<Entity>,
    /// Hidden enemies in load order.
    pub reserve: VecDeque<Entity>,
    pub bases: usize,
}

/// Spawn every blueprint of `map`. Hidden entities stay off the grid until revealed.
pub fn spawn_map(world: &mut World, map: &ParsedMap) -> SpawnedMap {
    let entities: Vec<Entity> = map
        .blueprints
        .iter()
        .map(|blueprint| spawn_blueprint(world, blueprint))
        .collect();

    let mut grid = WorldGrid::new(map.grid.cols(), map.grid.rows());
    for (cell, index) in map.grid.occupied() {
        if !map.blueprints[index].hidden {
            grid.set(cell, Some(entities[index]));
        }
    }

    let mut player = None;
    let mut reserve = VecDeque::new();
    let mut bases = 0;
    for (blueprint, &entity) in map.blueprints.iter().zip(&entities) {
        match blueprint.kind {
            EntityKind::PlayerTank if player.is_none() => player = Some(entity),
            EntityKind::Base => bases += 1,
            _ => {}
        }
        if blueprint.hidden {
            reserve.push_back(entity);
        }
    }

    SpawnedMap {
        grid,
        player,
        reserve,
        bases,
    }
}

/// Spawn one entity with the component set its kind needs.
pub fn spawn_blueprint(world: &mut World, blueprint: &Blueprint) -> Entity {
    let mut builder = EntityBuilder::new();
    builder.add_bundle((
        blueprint.kind,
        blueprint.position,
        Health {
            hp: blueprint.hp,
            invulnerable: blueprint.hp < 0,
        },
        Damage(blueprint.damage),
        Speed(blueprint.speed),
        Facing::default(),
        LastStep(blueprint.position),
        Motion::Idle,
        Visibility {
            hidden: blueprint.hidden,
        },
        Membership(blueprint.groups),
    ));
    if blueprint.kind.is_tank() {
        builder.add(Gun::default());
    }
    if blueprint.kind == EntityKind::EnemyTank {
        builder.add(EnemyBrain::default());
    }
    if let Some(icon) = &blueprint.icon {
        builder.add(Icon(icon.clone()));
    }
    world.spawn(builder.build())
}

/// Spawn a projectile already travelling along `direction`.
pub fn spawn_projectile(
    world: &mut World,
    owner: Entity,
    position: Position,
    direction: Direction,
    damage: i32,
    speed: i32,
    faction: GroupSet,
) -> Entity {
    world.spawn((
        EntityKind::Projectile,
        position,
        Health {
            hp: PROJECTILE_HP,
            invulnerable: false,
        },
        Damage(damage),
        Speed(speed),
        Facing(direction),
        LastStep(position),
        Motion::Unbounded { direction, speed },
        Visibility { hidden: false },
        Membership(GroupSet::of(&[Group::Projectile])),
        Projectile {
            owner: crate::systems::entity_id(owner),
            faction,
        },
    ))
}
