//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Grid ---

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE: i32 = 50;

/// Slack subtracted from the world extent in bounds checks.
/// A top-left coordinate past `extent - CELL_MARGIN` is out of bounds.
pub const CELL_MARGIN: i32 = CELL_SIZE - 1;

/// Largest magnitude accepted for a map stat (hp, damage, speed).
/// Header values beyond it are clamped when the map is read.
pub const STAT_LIMIT: i32 = 1_000_000;

// --- Projectiles ---

/// Hit points of every projectile.
pub const PROJECTILE_HP: i32 = 1;

/// Projectile box along its direction of travel (pixels).
pub const PROJECTILE_LENGTH: i32 = 20;

/// Projectile box across its direction of travel (pixels).
pub const PROJECTILE_WIDTH: i32 = 10;

/// Horizontal offset that centres a projectile inside its spawn cell.
pub const PROJECTILE_ALIGN_X: i32 = 20;

/// Vertical offset that centres a projectile inside its spawn cell.
pub const PROJECTILE_ALIGN_Y: i32 = 15;

/// Projectiles travel this much faster than the tank that fired them.
pub const PROJECTILE_SPEED_BONUS: i32 = 1;

/// Gun reload per point of tank speed, in milliseconds.
pub const RELOAD_MS_PER_SPEED: u64 = 60;

// --- Enemy AI ---

/// Consecutive stationary decisions before an enemy picks a random direction.
pub const STUCK_THRESHOLD: u32 = 3;

// --- Reveal schedule ---

/// Default ticks between enemy reveals (1 Hz).
pub const REVEAL_INTERVAL_TICKS: u64 = TICK_RATE as u64;
