//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world for one map, processes player
//! commands, runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless (no I/O), enabling deterministic testing.

use std::collections::{BTreeMap, VecDeque};

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use tankwar_core::commands::PlayerCommand;
use tankwar_core::components::Speed;
use tankwar_core::constants::{CELL_SIZE, REVEAL_INTERVAL_TICKS, TICK_RATE};
use tankwar_core::enums::GamePhase;
use tankwar_core::events::GameEvent;
use tankwar_core::state::GameStateSnapshot;
use tankwar_core::types::{SimTime, WorldBounds};
use tankwar_map::{ParsedMap, WorldGrid};

use crate::systems;
use crate::systems::reveal::RevealTimer;
use crate::systems::snapshot::MapInfo;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Ticks between timed enemy reveals. Zero leaves reveals to `RevealNext`.
    pub reveal_interval_ticks: u64,
    /// Ticks per second, used to convert gun reload times into ticks.
    pub tick_rate: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            reveal_interval_ticks: REVEAL_INTERVAL_TICKS,
            tick_rate: TICK_RATE,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state for one map.
pub struct SimulationEngine {
    world: World,
    grid: WorldGrid<Entity>,
    bounds: WorldBounds,
    map_name: String,
    loaded_counts: BTreeMap<String, u32>,
    player: Option<Entity>,
    reserve: VecDeque<Entity>,
    has_bases: bool,
    time: SimTime,
    phase: GamePhase,
    tick_rate: u32,
    reveal_timer: RevealTimer,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine with `map` spawned and ready to run.
    pub fn new(config: SimConfig, map: &ParsedMap) -> Self {
        let mut world = World::new();
        let spawned = world_setup::spawn_map(&mut world, map);
        tracing::info!(
            map = %map.name,
            enemies = spawned.reserve.len(),
            bases = spawned.bases,
            "simulation ready"
        );

        Self {
            world,
            grid: spawned.grid,
            bounds: map.bounds(),
            map_name: map.name.clone(),
            loaded_counts: map.counts.clone(),
            player: spawned.player,
            reserve: spawned.reserve,
            has_bases: spawned.bases > 0,
            time: SimTime::default(),
            phase: GamePhase::default(),
            tick_rate: config.tick_rate,
            reveal_timer: RevealTimer::new(config.reveal_interval_ticks),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Once the map is over, ticks only drain the command queue and repeat
    /// the final state.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if !self.phase.is_over() {
            self.run_systems();
            self.time.advance();
            self.update_phase();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &MapInfo {
                name: &self.map_name,
                bounds: self.bounds,
                loaded: &self.loaded_counts,
            },
            self.player,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn map_name(&self) -> &str {
        &self.map_name
    }

    /// The player tank, while it exists.
    pub fn player(&self) -> Option<Entity> {
        self.player.filter(|p| self.world.contains(*p))
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the occupancy grid.
    pub fn grid(&self) -> &WorldGrid<Entity> {
        &self.grid
    }

    /// Enemies still waiting in the reserve.
    pub fn reserve_len(&self) -> usize {
        self.reserve.len()
    }

    /// Mutable world access for tests that stage collisions by hand.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands. Commands arriving after the map ended are dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if !self.phase.is_over() {
                self.handle_command(command);
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Move { direction } => {
                let Some(player) = self.player else {
                    return;
                };
                let Ok(speed) = self.world.get::<&Speed>(player).map(|s| s.0) else {
                    return;
                };
                systems::movement::begin_move(
                    &mut self.world,
                    &mut self.grid,
                    self.bounds,
                    player,
                    direction,
                    speed,
                    CELL_SIZE,
                );
            }
            PlayerCommand::Fire => {
                if let Some(player) = self.player {
                    systems::fire::fire(&mut self.world, player, self.tick_rate, &mut self.events);
                }
            }
            PlayerCommand::RevealNext => {
                systems::reveal::reveal_next(
                    &mut self.world,
                    &mut self.grid,
                    &mut self.reserve,
                    &mut self.events,
                );
            }
            // Map sequencing belongs to the driver.
            PlayerCommand::Dismiss | PlayerCommand::Quit => {}
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Timed reveal
        if self.reveal_timer.tick() {
            systems::reveal::reveal_next(
                &mut self.world,
                &mut self.grid,
                &mut self.reserve,
                &mut self.events,
            );
        }
        // 2. Enemy AI (fire, then pick a direction and start moving)
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.grid,
            self.bounds,
            self.player,
            self.tick_rate,
            &mut self.rng,
            &mut self.events,
        );
        // 3. Movement advance
        systems::movement::run(&mut self.world, &mut self.grid, self.bounds, &mut self.events);
        // 4. Gun cooldown
        systems::fire::run(&mut self.world);
        // 5. Collision and combat
        systems::collision::run(&mut self.world, &mut self.events);
        // 6. Cleanup (dead entities)
        systems::cleanup::run(&mut self.world, &mut self.grid, &mut self.despawn_buffer);
    }

    fn update_phase(&mut self) {
        let phase = systems::phase::evaluate(&self.world, self.player, self.has_bases);
        if phase != self.phase {
            tracing::info!(map = %self.map_name, ?phase, "phase changed");
            self.phase = phase;
            self.events.push(GameEvent::PhaseChanged { phase });
        }
    }
}
