//! Enumeration types used throughout the simulation.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Cardinal facing / travel direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order the random escape draws from.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in screen space (y grows downward).
    pub fn unit(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Named faction / category an entity belongs to.
/// Shared membership means friendly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Group {
    FriendlyTank,
    EnemyTank,
    /// Enemy reserve: loaded but not revealed yet.
    HiddenEnemy,
    Wall,
    MetalWall,
    Base,
    Projectile,
}

impl Group {
    pub const ALL: [Group; 7] = [
        Group::FriendlyTank,
        Group::EnemyTank,
        Group::HiddenEnemy,
        Group::Wall,
        Group::MetalWall,
        Group::Base,
        Group::Projectile,
    ];

    pub(crate) fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Behavioural kind of an entity, dispatched by `match` in the systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Wall,
    MetalWall,
    Base,
    PlayerTank,
    EnemyTank,
    Projectile,
}

impl EntityKind {
    pub fn is_tank(self) -> bool {
        matches!(self, EntityKind::PlayerTank | EntityKind::EnemyTank)
    }
}

/// How a finished map ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Game phase (top-level state). `GameOver` is terminal for the current map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    GameOver(Outcome),
}

impl GamePhase {
    pub fn is_over(self) -> bool {
        matches!(self, GamePhase::GameOver(_))
    }
}
