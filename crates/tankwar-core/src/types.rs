//! Fundamental geometric and simulation types.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{CELL_MARGIN, CELL_SIZE, TICK_RATE};
use crate::enums::Direction;

/// Top-left pixel coordinate of an entity. x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position(pub IVec2);

/// Integer grid coordinate (column, row).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

/// Pixel extent of the playable world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: i32,
    pub height: i32,
}

/// Axis-aligned box used for overlap tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub min: IVec2,
    pub size: IVec2,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    /// Whether the position sits exactly on a cell corner.
    pub fn is_grid_aligned(&self) -> bool {
        self.0.x % CELL_SIZE == 0 && self.0.y % CELL_SIZE == 0
    }

    /// Cell containing this position (floor division, so negatives map outside the grid).
    pub fn cell(&self) -> Cell {
        Cell {
            col: self.0.x.div_euclid(CELL_SIZE),
            row: self.0.y.div_euclid(CELL_SIZE),
        }
    }

    /// Position shifted `distance` pixels along `direction`.
    pub fn offset(&self, direction: Direction, distance: i32) -> Self {
        let unit = direction.unit();
        Self(IVec2::new(
            self.0.x.saturating_add(unit.x.saturating_mul(distance)),
            self.0.y.saturating_add(unit.y.saturating_mul(distance)),
        ))
    }

    /// Manhattan offset vector from self to `other`.
    pub fn delta_to(&self, other: &Position) -> IVec2 {
        other.0 - self.0
    }
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Top-left pixel of this cell.
    pub fn origin(&self) -> Position {
        Position::new(self.col * CELL_SIZE, self.row * CELL_SIZE)
    }
}

impl WorldBounds {
    /// Bounds covering `cols` x `rows` cells.
    pub fn from_cells(cols: usize, rows: usize) -> Self {
        Self {
            width: cols as i32 * CELL_SIZE,
            height: rows as i32 * CELL_SIZE,
        }
    }

    /// True if the top-left coordinate falls outside
    /// `[0, width - CELL_MARGIN] x [0, height - CELL_MARGIN]`.
    pub fn is_out_of_bounds(&self, pos: &Position) -> bool {
        pos.y() > self.height - CELL_MARGIN
            || pos.x() > self.width - CELL_MARGIN
            || pos.x() < 0
            || pos.y() < 0
    }
}

impl Aabb {
    pub fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.min + self.size;
        let b_max = other.min + other.size;
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Stable entity handle exposed outside the ECS (bit pattern of a hecs entity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);
