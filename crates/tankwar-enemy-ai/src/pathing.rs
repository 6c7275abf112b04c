//! Enemy direction choice.
//!
//! Pure functions over plain data. The simulation builds an [`EnemyContext`]
//! per idle enemy and writes the returned stuck counter back.

use glam::IVec2;
use rand::seq::SliceRandom;
use rand::Rng;

use tankwar_core::constants::STUCK_THRESHOLD;
use tankwar_core::enums::Direction;
use tankwar_core::types::Position;

/// Input to the decision for a single enemy.
#[derive(Debug, Clone, Copy)]
pub struct EnemyContext {
    pub position: Position,
    /// Where the previous move started from.
    pub last_step: Position,
    pub stuck_count: u32,
    /// Player tank, if still alive.
    pub target_tank: Option<Position>,
    /// First live base, if any.
    pub base: Option<Position>,
}

/// Output of the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyDecision {
    pub direction: Direction,
    pub stuck_count: u32,
    /// The direction was drawn at random to escape a stall.
    pub escaped: bool,
}

/// What the enemy is heading for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Base,
    Tank,
    Nothing,
}

/// Choose the next move direction for an enemy tank.
///
/// A tank that has not moved since its last decision counts as stuck; after
/// [`STUCK_THRESHOLD`] consecutive stuck decisions the counter resets and a
/// uniformly random direction is returned.
pub fn search_path<R: Rng + ?Sized>(ctx: &EnemyContext, rng: &mut R) -> EnemyDecision {
    let mut stuck_count = if ctx.position == ctx.last_step {
        ctx.stuck_count + 1
    } else {
        0
    };

    if stuck_count >= STUCK_THRESHOLD {
        stuck_count = 0;
        let direction = *Direction::ALL
            .choose(rng)
            .unwrap_or(&Direction::default());
        return EnemyDecision {
            direction,
            stuck_count,
            escaped: true,
        };
    }

    let (_, offset) = choose_target(ctx);
    EnemyDecision {
        direction: direction_for_offset(offset),
        stuck_count,
        escaped: false,
    }
}

/// Pick the nearer target by Manhattan distance. Ties go to the base.
pub fn choose_target(ctx: &EnemyContext) -> (Target, IVec2) {
    let to_base = ctx.base.map(|b| ctx.position.delta_to(&b));
    let to_tank = ctx.target_tank.map(|t| ctx.position.delta_to(&t));

    match (to_base, to_tank) {
        (Some(base), Some(tank)) => {
            if manhattan(base) <= manhattan(tank) {
                (Target::Base, base)
            } else {
                (Target::Tank, tank)
            }
        }
        (Some(base), None) => (Target::Base, base),
        (None, Some(tank)) => (Target::Tank, tank),
        (None, None) => (Target::Nothing, IVec2::ZERO),
    }
}

/// Vertical offset first, then horizontal. A zero offset falls through to `Right`.
pub fn direction_for_offset(offset: IVec2) -> Direction {
    if offset.y < 0 {
        Direction::Up
    } else if offset.y > 0 {
        Direction::Down
    } else if offset.x < 0 {
        Direction::Left
    } else {
        Direction::Right
    }
}

fn manhattan(v: IVec2) -> i32 {
    v.x.abs() + v.y.abs()
}
