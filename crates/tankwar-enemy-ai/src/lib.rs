//! Enemy AI for TANKWAR.
//!
//! Greedy Manhattan pursuit of the nearer of the player tank and the base,
//! with a random escape when a tank stops making progress.

pub mod pathing;

pub use tankwar_core as core;
