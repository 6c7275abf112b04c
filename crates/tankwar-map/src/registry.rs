//! Named entity constructors.
//!
//! Header kinds are resolved through this table instead of being evaluated,
//! so a map can only ever produce the entity kinds registered here.

use std::collections::HashMap;

use tankwar_core::enums::{EntityKind, Group};
use tankwar_core::groups::GroupSet;
use tankwar_core::types::Position;

/// Stats copied from a header token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitStats {
    pub hp: i32,
    pub damage: i32,
    pub speed: i32,
    pub icon: Option<String>,
}

/// Everything needed to spawn one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub kind: EntityKind,
    pub position: Position,
    pub hp: i32,
    pub damage: i32,
    pub speed: i32,
    pub groups: GroupSet,
    pub hidden: bool,
    pub icon: Option<String>,
}

type Constructor = Box<dyn Fn(&UnitStats, Position) -> Blueprint + Send + Sync>;

/// Kind name -> constructor.
pub struct EntityRegistry {
    constructors: HashMap<String, Constructor>,
}

impl Default for EntityRegistry {
    /// Registry with the built-in kinds: `Wall`, `MetalWall`, `Base`,
    /// `FriendlyTank` and `EnemyTank`.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("Wall", |stats, position| {
            static_item(EntityKind::Wall, Group::Wall, stats, position)
        });
        registry.register("MetalWall", |stats, position| {
            static_item(EntityKind::MetalWall, Group::MetalWall, stats, position)
        });
        registry.register("Base", |stats, position| {
            static_item(EntityKind::Base, Group::Base, stats, position)
        });
        registry.register("FriendlyTank", |stats, position| Blueprint {
            kind: EntityKind::PlayerTank,
            position,
            hp: stats.hp,
            damage: stats.damage,
            speed: stats.speed,
            groups: GroupSet::of(&[Group::FriendlyTank]),
            hidden: false,
            icon: stats.icon.clone(),
        });
        // Enemies start in the reserve and stay out of play until revealed.
        registry.register("EnemyTank", |stats, position| Blueprint {
            kind: EntityKind::EnemyTank,
            position,
            hp: stats.hp,
            damage: stats.damage,
            speed: stats.speed,
            groups: GroupSet::of(&[Group::HiddenEnemy]),
            hidden: true,
            icon: stats.icon.clone(),
        });
        registry
    }
}

impl EntityRegistry {
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Add or replace a constructor.
    pub fn register<F>(&mut self, name: &str, constructor: F)
    where
        F: Fn(&UnitStats, Position) -> Blueprint + Send + Sync + 'static,
    {
        self.constructors
            .insert(name.to_string(), Box::new(constructor));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Build a blueprint, or `None` for an unregistered kind.
    pub fn build(&self, name: &str, stats: &UnitStats, position: Position) -> Option<Blueprint> {
        self.constructors
            .get(name)
            .map(|constructor| constructor(stats, position))
    }
}

/// Walls and bases never move, whatever speed the header gives them.
fn static_item(kind: EntityKind, group: Group, stats: &UnitStats, position: Position) -> Blueprint {
    Blueprint {
        kind,
        position,
        hp: stats.hp,
        damage: stats.damage,
        speed: 0,
        groups: GroupSet::of(&[group]),
        hidden: false,
        icon: stats.icon.clone(),
    }
}
