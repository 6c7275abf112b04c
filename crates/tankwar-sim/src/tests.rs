//! Tests for the simulation engine: movement, combat, reveal, AI and phases.

use hecs::{Entity, World};
use proptest::prelude::*;

use tankwar_core::commands::PlayerCommand;
use tankwar_core::components::*;
use tankwar_core::enums::*;
use tankwar_core::events::GameEvent;
use tankwar_core::types::{Position, WorldBounds};
use tankwar_map::{parse_map, EntityRegistry, ParsedMap};

use crate::engine::{SimConfig, SimulationEngine};
use crate::systems::{collision, combat, entity_id, fire, movement};
use crate::world_setup;

/// `p` is the player, `i` an invulnerable player variant, `f` a second
/// friendly tank. `e` and `s` are enemy variants.
const HEADER: &str = r#"{"Wall": {"name": "w", "hp": 10, "damage": 1, "speed": 0}, "MetalWall": {"name": "m", "hp": -1, "damage": 1, "speed": 0}, "Base": {"name": "b", "hp": 10, "damage": 0, "speed": 0}, "FriendlyTank": [{"name": "p", "hp": 100, "damage": 50, "speed": 5}, {"name": "i", "hp": -1, "damage": 50, "speed": 5}, {"name": "f", "hp": 100, "damage": 50, "speed": 5}], "EnemyTank": [{"name": "e", "hp": 50, "damage": 50, "speed": 5}, {"name": "s", "hp": 100, "damage": 50, "speed": 7}]}"#;

fn parse(rows: &[&str]) -> ParsedMap {
    let text = std::iter::once(HEADER)
        .chain(rows.iter().copied())
        .collect::<Vec<_>>()
        .join("\n");
    parse_map("test", &text, &EntityRegistry::default()).unwrap()
}

/// Engine over `rows`. An interval of zero keeps the reserve hidden until `RevealNext`.
fn engine_for(rows: &[&str], reveal_interval_ticks: u64) -> SimulationEngine {
    SimulationEngine::new(
        SimConfig {
            seed: 7,
            reveal_interval_ticks,
            ..Default::default()
        },
        &parse(rows),
    )
}

fn entity_at(world: &World, kind: EntityKind, at: Position) -> Entity {
    world
        .query::<(&EntityKind, &Position)>()
        .iter()
        .find(|(_, (k, p))| **k == kind && **p == at)
        .map(|(entity, _)| entity)
        .unwrap()
}

fn position(world: &World, entity: Entity) -> Position {
    *world.get::<&Position>(entity).unwrap()
}

fn hp(world: &World, entity: Entity) -> i32 {
    world.get::<&Health>(entity).unwrap().hp
}

fn run_ticks(engine: &mut SimulationEngine, ticks: usize) {
    for _ in 0..ticks {
        engine.tick();
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let rows = ["e,.,s,.", ".,w,.,.", ".,.,.,.", "b,.,.,p"];
    let mut engine_a = engine_for(&rows, 20);
    let mut engine_b = engine_for(&rows, 20);

    for _ in 0..600 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

// ---- Movement ----

#[test]
fn test_bounded_move_steps_then_snaps() {
    let mut engine = engine_for(&["p,.,b", ".,.,e"], 0);
    let player = engine.player().unwrap();

    engine.queue_command(PlayerCommand::Move {
        direction: Direction::Right,
    });
    let snap = engine.tick();
    assert_eq!(position(engine.world(), player), Position::new(5, 0));
    assert!(snap.player.is_some());
    assert!(snap.entities.iter().any(|e| e.id == entity_id(player) && e.moving));

    // Destination is claimed up front.
    assert_eq!(engine.grid().get(Position::new(50, 0).cell()), Some(player));

    run_ticks(&mut engine, 9);
    assert_eq!(position(engine.world(), player), Position::new(50, 0));
    assert_eq!(*engine.world().get::<&Motion>(player).unwrap(), Motion::Idle);
    assert_eq!(engine.grid().get(Position::new(0, 0).cell()), None);
    assert_eq!(
        engine.world().get::<&Facing>(player).unwrap().0,
        Direction::Right
    );
}

#[test]
fn test_bounded_move_snaps_when_speed_does_not_divide() {
    // `s` moves at 7 px/tick: seven steps reach 49, the eighth tick snaps to 50.
    let map = parse(&["s,.,p", ".,.,b"]);
    let mut world = World::new();
    let spawned = world_setup::spawn_map(&mut world, &map);
    let mut grid = spawned.grid;
    let enemy = spawned.reserve[0];
    let bounds = map.bounds();
    let mut events = Vec::new();

    assert!(movement::begin_move(
        &mut world,
        &mut grid,
        bounds,
        enemy,
        Direction::Down,
        7,
        50
    ));
    for _ in 0..7 {
        movement::run(&mut world, &mut grid, bounds, &mut events);
    }
    assert_eq!(position(&world, enemy), Position::new(0, 49));
    movement::run(&mut world, &mut grid, bounds, &mut events);
    assert_eq!(position(&world, enemy), Position::new(0, 50));
    assert!(position(&world, enemy).is_grid_aligned());
}

#[test]
fn test_move_into_occupied_cell_is_refused() {
    let mut engine = engine_for(&["p,w,b", ".,.,e"], 0);
    let player = engine.player().unwrap();

    engine.queue_command(PlayerCommand::Move {
        direction: Direction::Right,
    });
    run_ticks(&mut engine, 15);

    assert_eq!(position(engine.world(), player), Position::new(0, 0));
    // The refused move still turns the tank.
    assert_eq!(
        engine.world().get::<&Facing>(player).unwrap().0,
        Direction::Right
    );
}

#[test]
fn test_move_into_invulnerable_cell_is_refused() {
    let mut engine = engine_for(&["p,m,b", ".,.,e"], 0);
    let player = engine.player().unwrap();

    engine.queue_command(PlayerCommand::Move {
        direction: Direction::Right,
    });
    run_ticks(&mut engine, 15);
    assert_eq!(position(engine.world(), player), Position::new(0, 0));
}

#[test]
fn test_move_out_of_bounds_is_refused() {
    let mut engine = engine_for(&["p,.,b", ".,.,e"], 0);
    let player = engine.player().unwrap();

    for direction in [Direction::Up, Direction::Left] {
        engine.queue_command(PlayerCommand::Move { direction });
        run_ticks(&mut engine, 12);
        assert_eq!(position(engine.world(), player), Position::new(0, 0));
    }
}

#[test]
fn test_move_while_moving_is_ignored() {
    let mut engine = engine_for(&["p,.,b", ".,.,e"], 0);
    let player = engine.player().unwrap();

    engine.queue_command(PlayerCommand::Move {
        direction: Direction::Right,
    });
    engine.tick();
    engine.queue_command(PlayerCommand::Move {
        direction: Direction::Down,
    });
    run_ticks(&mut engine, 12);

    assert_eq!(position(engine.world(), player), Position::new(50, 0));
    assert_eq!(
        engine.world().get::<&Facing>(player).unwrap().0,
        Direction::Right
    );
}

#[test]
fn test_unbounded_move_restores_at_edge() {
    let map = parse(&["p,.,.", ".,.,b"]);
    let mut world = World::new();
    let spawned = world_setup::spawn_map(&mut world, &map);
    let mut grid = spawned.grid;
    let player = spawned.player.unwrap();
    let bounds = map.bounds();
    let mut events = Vec::new();

    assert!(movement::begin_move(
        &mut world,
        &mut grid,
        bounds,
        player,
        Direction::Right,
        30,
        0
    ));
    for _ in 0..10 {
        movement::run(&mut world, &mut grid, bounds, &mut events);
    }
    // 150 px wide: x may not pass 101, so the tank stops at the last step before.
    assert_eq!(position(&world, player), Position::new(90, 0));
    assert_eq!(*world.get::<&Motion>(player).unwrap(), Motion::Idle);
    assert!(events.is_empty());
}

#[test]
fn test_move_restore_returns_to_last_step() {
    let map = parse(&["p,.", ".,b"]);
    let mut world = World::new();
    let spawned = world_setup::spawn_map(&mut world, &map);
    let player = spawned.player.unwrap();

    *world.get::<&mut Position>(player).unwrap() = Position::new(17, 3);
    movement::move_restore(&mut world, player);
    assert_eq!(position(&world, player), Position::new(0, 0));
    assert!(!WorldBounds::from_cells(2, 2).is_out_of_bounds(&Position::new(0, 0)));
}

// ---- Fire ----

#[test]
fn test_reload_ticks() {
    assert_eq!(fire::reload_ticks(5, 60), 18);
    assert_eq!(fire::reload_ticks(1, 60), 4);
    assert_eq!(fire::reload_ticks(0, 60), 0);
}

#[test]
fn test_gun_cools_down_between_shots() {
    let mut engine = engine_for(&[".,.,.", ".,p,.", "b,.,e"], 0);
    let player = engine.player().unwrap();

    engine.queue_commands([PlayerCommand::Fire, PlayerCommand::Fire]);
    let snap = engine.tick();
    let fired = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::Fired { .. }))
        .count();
    assert_eq!(fired, 1);
    assert_eq!(snap.player.as_ref().map(|p| p.gun_ready), Some(false));

    run_ticks(&mut engine, 17);
    assert_eq!(engine.world().get::<&Gun>(player).unwrap().cooldown_ticks, 0);
}

#[test]
fn test_projectile_spawns_centred_ahead() {
    let map = parse(&[".,.,.", ".,p,.", "b,.,."]);
    let mut world = World::new();
    let spawned = world_setup::spawn_map(&mut world, &map);
    let player = spawned.player.unwrap();
    let mut events = Vec::new();

    let projectile = fire::fire(&mut world, player, 60, &mut events).unwrap();
    assert_eq!(position(&world, projectile), Position::new(70, 15));
    assert_eq!(*world.get::<&Speed>(projectile).unwrap(), Speed(6));
    assert_eq!(*world.get::<&Damage>(projectile).unwrap(), Damage(50));
    assert_eq!(hp(&world, projectile), 1);
    assert_eq!(
        *world.get::<&Motion>(projectile).unwrap(),
        Motion::Unbounded {
            direction: Direction::Up,
            speed: 6
        }
    );
}

#[test]
fn test_projectile_destroyed_at_edge() {
    let mut engine = engine_for(&["p,.,.", ".,.,b", ".,.,e"], 0);

    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick();

    assert_eq!(snap.counts.projectiles, 0);
    assert!(snap.events.iter().any(|e| matches!(
        e,
        GameEvent::Destroyed {
            kind: EntityKind::Projectile,
            ..
        }
    )));
}

// ---- Combat ----

#[test]
fn test_projectile_hits_foe_both_damaged() {
    let mut engine = engine_for(&["p,.,b", "w,.,e", ".,.,."], 0);
    let player = engine.player().unwrap();
    let wall = entity_at(engine.world(), EntityKind::Wall, Position::new(0, 50));

    // Refused move turns the tank toward the wall.
    engine.queue_commands([
        PlayerCommand::Move {
            direction: Direction::Down,
        },
        PlayerCommand::Fire,
    ]);
    let snap = engine.tick();

    assert!(!engine.world().contains(wall));
    assert_eq!(snap.counts.projectiles, 0);
    assert_eq!(engine.grid().get(Position::new(0, 50).cell()), None);
    assert_eq!(hp(engine.world(), player), 100);

    // The cell is free now.
    engine.queue_command(PlayerCommand::Move {
        direction: Direction::Down,
    });
    run_ticks(&mut engine, 10);
    assert_eq!(position(engine.world(), player), Position::new(0, 50));
}

#[test]
fn test_projectile_hits_friend_only_itself() {
    let mut engine = engine_for(&["p,.,b", "f,.,e", ".,.,."], 0);
    let friend = entity_at(engine.world(), EntityKind::PlayerTank, Position::new(0, 50));

    engine.queue_commands([
        PlayerCommand::Move {
            direction: Direction::Down,
        },
        PlayerCommand::Fire,
    ]);
    let snap = engine.tick();

    assert_eq!(hp(engine.world(), friend), 100);
    assert_eq!(snap.counts.projectiles, 0);
    assert!(!snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::Damaged { entity, .. } if *entity == entity_id(friend))));
}

#[test]
fn test_projectile_against_metal_wall() {
    let mut engine = engine_for(&["p,.,b", "m,.,e", ".,.,."], 0);
    let metal = entity_at(engine.world(), EntityKind::MetalWall, Position::new(0, 50));

    engine.queue_commands([
        PlayerCommand::Move {
            direction: Direction::Down,
        },
        PlayerCommand::Fire,
    ]);
    let snap = engine.tick();

    assert_eq!(hp(engine.world(), metal), -1);
    assert_eq!(snap.counts.projectiles, 0);
    assert!(snap
        .events
        .iter()
        .any(|e| *e == GameEvent::Invulnerable { entity: entity_id(metal) }));
}

#[test]
fn test_shared_group_never_damages() {
    let map = parse(&["e,s", "p,b"]);
    let mut world = World::new();
    let spawned = world_setup::spawn_map(&mut world, &map);
    let (a, b) = (spawned.reserve[0], spawned.reserve[1]);
    for enemy in [a, b] {
        world.get::<&mut Visibility>(enemy).unwrap().hidden = false;
    }
    let mut events = Vec::new();

    combat::attack(&mut world, a, b, &mut events);
    combat::attack(&mut world, b, a, &mut events);

    assert_eq!(hp(&world, a), 50);
    assert_eq!(hp(&world, b), 100);
    assert!(events.is_empty());
}

#[test]
fn test_hidden_entities_ignore_attacks() {
    let map = parse(&["e,p", ".,b"]);
    let mut world = World::new();
    let spawned = world_setup::spawn_map(&mut world, &map);
    let (enemy, player) = (spawned.reserve[0], spawned.player.unwrap());
    let mut events = Vec::new();

    combat::attack(&mut world, player, enemy, &mut events);
    assert_eq!(hp(&world, enemy), 50);
    assert_eq!(hp(&world, player), 100);
}

#[test]
fn test_tank_collision_damages_both() {
    let map = parse(&["e,p", ".,b"]);
    let mut world = World::new();
    let spawned = world_setup::spawn_map(&mut world, &map);
    let (enemy, player) = (spawned.reserve[0], spawned.player.unwrap());
    world.get::<&mut Visibility>(enemy).unwrap().hidden = false;
    *world.get::<&mut Position>(enemy).unwrap() = Position::new(30, 0);
    let mut events = Vec::new();

    let pairs = collision::detect(&world);
    assert_eq!(pairs, vec![(enemy, player)]);
    collision::run(&mut world, &mut events);

    assert_eq!(hp(&world, player), 50);
    assert_eq!(hp(&world, enemy), 0);
    assert!(world.get::<&Membership>(enemy).unwrap().0.is_empty());
}

#[test]
fn test_touching_edges_do_not_collide() {
    let map = parse(&["p,w", ".,b"]);
    let mut world = World::new();
    world_setup::spawn_map(&mut world, &map);
    assert!(collision::detect(&world).is_empty());
}

#[test]
fn test_player_killed_by_two_hits_loses() {
    let mut engine = engine_for(&["p,.,b", ".,.,e"], 0);
    let player = engine.player().unwrap();
    let mut events = Vec::new();

    assert!(!combat::apply_damage(engine.world_mut(), player, 50, &mut events));
    assert_eq!(hp(engine.world(), player), 50);
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::Running);

    combat::apply_damage(engine.world_mut(), player, 50, &mut events);
    assert_eq!(hp(engine.world(), player), 0);
    let snap = engine.tick();

    assert_eq!(engine.phase(), GamePhase::GameOver(Outcome::Lost));
    assert!(snap.player.is_none());
    assert!(snap
        .events
        .contains(&GameEvent::PhaseChanged { phase: GamePhase::GameOver(Outcome::Lost) }));
}

#[test]
fn test_base_destroyed_loses() {
    let mut engine = engine_for(&["p,.,b", ".,.,e"], 0);
    let base = entity_at(engine.world(), EntityKind::Base, Position::new(100, 0));
    let mut events = Vec::new();

    combat::apply_damage(engine.world_mut(), base, 999, &mut events);
    let snap = engine.tick();

    assert_eq!(engine.phase(), GamePhase::GameOver(Outcome::Lost));
    assert_eq!(snap.player.map(|p| p.hp), Some(100));
    assert_eq!(snap.counts.bases, 0);
}

#[test]
fn test_extreme_damage_amounts_clamp() {
    let mut engine = engine_for(&["p,.,b", ".,.,e"], 0);
    let player = engine.player().unwrap();
    let mut events = Vec::new();

    // A negative hit never heals.
    assert!(!combat::apply_damage(engine.world_mut(), player, i32::MIN, &mut events));
    assert_eq!(hp(engine.world(), player), 100);

    combat::apply_damage(engine.world_mut(), player, i32::MAX, &mut events);
    assert_eq!(hp(engine.world(), player), 0);
    assert!(matches!(events.last(), Some(GameEvent::Destroyed { .. })));
}

#[test]
fn test_max_speed_tank_fires() {
    let text = [
        r#"{"Base": {"name": "b", "hp": 10, "damage": 0, "speed": 0}, "FriendlyTank": {"name": "p", "hp": 100, "damage": 2147483647, "speed": 2147483647}, "EnemyTank": [{"name": "e", "hp": 50, "damage": 50, "speed": 5}]}"#,
        "p,.,b",
        ".,.,e",
    ]
    .join("\n");
    let map = parse_map("fast", &text, &EntityRegistry::default()).unwrap();
    let mut engine = SimulationEngine::new(
        SimConfig {
            reveal_interval_ticks: 0,
            ..Default::default()
        },
        &map,
    );
    let player = engine.player().unwrap();
    assert_eq!(
        engine.world().get::<&Speed>(player).unwrap().0,
        tankwar_core::constants::STAT_LIMIT
    );

    engine.queue_command(PlayerCommand::Move {
        direction: Direction::Right,
    });
    engine.tick();
    assert_eq!(position(engine.world(), player), Position::new(50, 0));

    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick();
    assert!(snap.events.iter().any(|e| matches!(e, GameEvent::Fired { .. })));
    // The shot leaves the world on its first step.
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::Destroyed { kind: EntityKind::Projectile, .. })));
    assert!(!snap.entities.iter().any(|e| e.kind == EntityKind::Projectile));
}

proptest! {
    #[test]
    fn prop_damage_never_below_zero(
        start in 1..10_000i32,
        hits in prop::collection::vec(any::<i32>(), 0..20),
    ) {
        let mut world = World::new();
        let entity = world.spawn((
            EntityKind::Wall,
            Position::default(),
            Health { hp: start, invulnerable: false },
            Membership::default(),
        ));
        let mut events = Vec::new();
        for hit in hits {
            combat::apply_damage(&mut world, entity, hit, &mut events);
            prop_assert!(hp(&world, entity) >= 0);
        }
    }

    #[test]
    fn prop_invulnerable_never_loses_hp(
        start in -1_000..0i32,
        hits in prop::collection::vec(0..5_000i32, 1..20),
    ) {
        let mut world = World::new();
        let entity = world.spawn((
            EntityKind::MetalWall,
            Position::default(),
            Health { hp: start, invulnerable: true },
            Membership::default(),
        ));
        let mut events = Vec::new();
        for hit in hits {
            prop_assert!(combat::apply_damage(&mut world, entity, hit, &mut events));
        }
        prop_assert_eq!(hp(&world, entity), start);
    }
}

// ---- Reveal and phases ----

#[test]
fn test_no_enemies_wins_immediately() {
    let mut engine = engine_for(&["p,.,b"], 60);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::GameOver(Outcome::Won));

    // Terminal: time stops and commands are dropped.
    engine.queue_command(PlayerCommand::Move {
        direction: Direction::Right,
    });
    let after = engine.tick();
    assert_eq!(after.time.tick, snap.time.tick);
    assert_eq!(after.player.map(|p| p.position), Some(Position::new(0, 0)));
}

#[test]
fn test_timed_reveal_in_load_order() {
    let mut engine = engine_for(&["e,.,s", ".,.,.", "b,.,p"], 3);
    let first = entity_at(engine.world(), EntityKind::EnemyTank, Position::new(0, 0));

    let snap = engine.tick();
    assert_eq!(snap.counts.enemies_hidden, 2);
    assert!(snap.entities.iter().all(|e| e.kind != EntityKind::EnemyTank));

    engine.tick();
    let snap = engine.tick();
    assert!(snap.events.contains(&GameEvent::Revealed {
        entity: entity_id(first)
    }));
    assert_eq!(snap.counts.enemies_hidden, 1);
    assert_eq!(snap.counts.enemies_active, 1);
    assert_eq!(engine.reserve_len(), 1);
    assert!(!engine.world().get::<&Visibility>(first).unwrap().hidden);
}

#[test]
fn test_reveal_next_command() {
    let mut engine = engine_for(&["e,.,s", ".,.,.", "b,.,p"], 0);
    engine.queue_command(PlayerCommand::RevealNext);
    let snap = engine.tick();
    assert_eq!(snap.counts.enemies_active, 1);
    assert_eq!(snap.counts.loaded.get("EnemyTank"), Some(&2));
}

#[test]
fn test_win_requires_revealed_enemies_dead() {
    let mut engine = engine_for(&["e,.,.", ".,.,.", "b,.,p"], 0);
    let enemy = entity_at(engine.world(), EntityKind::EnemyTank, Position::new(0, 0));
    engine.queue_command(PlayerCommand::RevealNext);
    engine.tick();
    assert_eq!(engine.reserve_len(), 0);
    assert_eq!(engine.phase(), GamePhase::Running);

    let mut events = Vec::new();
    combat::apply_damage(engine.world_mut(), enemy, 1_000, &mut events);
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::GameOver(Outcome::Won));
}

// ---- Enemy AI ----

#[test]
fn test_enclosed_enemy_escapes_after_three_stuck_decisions() {
    let mut engine = engine_for(&["m,m,m,p", "m,e,m,.", "m,m,m,b"], 0);
    let enemy = entity_at(engine.world(), EntityKind::EnemyTank, Position::new(50, 50));

    engine.queue_command(PlayerCommand::RevealNext);
    let mut stuck = Vec::new();
    for _ in 0..3 {
        engine.tick();
        stuck.push(engine.world().get::<&EnemyBrain>(enemy).unwrap().stuck_count);
        assert_eq!(position(engine.world(), enemy), Position::new(50, 50));
    }
    assert_eq!(stuck, vec![1, 2, 0]);
}

#[test]
fn test_enemy_heads_for_nearer_base() {
    let mut engine = engine_for(&["e,.,.,.", ".,.,.,.", "b,.,.,.", ".,.,.,.", ".,.,.,i"], 0);
    let enemy = entity_at(engine.world(), EntityKind::EnemyTank, Position::new(0, 0));

    engine.queue_command(PlayerCommand::RevealNext);
    run_ticks(&mut engine, 10);
    assert_eq!(position(engine.world(), enemy), Position::new(0, 50));
    assert_eq!(
        engine.world().get::<&Facing>(enemy).unwrap().0,
        Direction::Down
    );

    // Parked next to the base, the enemy shoots it down.
    for _ in 0..1_200 {
        if engine.phase().is_over() {
            break;
        }
        engine.tick();
    }
    assert_eq!(engine.phase(), GamePhase::GameOver(Outcome::Lost));
    let player = engine.player().unwrap();
    assert_eq!(hp(engine.world(), player), -1);
}

#[test]
fn test_enemy_revealed_onto_held_cell_takes_it_when_freed() {
    let text = [
        r#"{"FriendlyTank": {"name": "z", "hp": 100, "damage": 0, "speed": 50}, "EnemyTank": [{"name": "q", "hp": 50, "damage": 0, "speed": 0}]}"#,
        "z,.",
        "q,.",
        ".,.",
    ]
    .join("\n");
    let map = parse_map("shared", &text, &EntityRegistry::default()).unwrap();
    let mut engine = SimulationEngine::new(
        SimConfig {
            reveal_interval_ticks: 0,
            ..Default::default()
        },
        &map,
    );
    let player = engine.player().unwrap();
    let cell = Position::new(0, 50).cell();

    // The hidden enemy is off the grid, so the player can drive onto it.
    engine.queue_command(PlayerCommand::Move {
        direction: Direction::Down,
    });
    engine.tick();
    assert_eq!(engine.grid().get(cell), Some(player));

    engine.queue_command(PlayerCommand::RevealNext);
    engine.tick();
    let enemy = entity_at(engine.world(), EntityKind::EnemyTank, Position::new(0, 50));
    assert_eq!(engine.grid().get(cell), Some(player));

    engine.queue_command(PlayerCommand::Move {
        direction: Direction::Right,
    });
    engine.tick();
    assert_eq!(position(engine.world(), player), Position::new(50, 50));
    assert_eq!(engine.grid().get(cell), Some(enemy));

    // The cell stays blocked while the enemy sits in it.
    engine.queue_command(PlayerCommand::Move {
        direction: Direction::Left,
    });
    engine.tick();
    assert_eq!(position(engine.world(), player), Position::new(50, 50));
}
