//! TANKWAR driver.
//!
//! This crate wires together the simulation crates and connects them to an
//! external renderer and input source through JSON lines on stdio.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod ipc;
pub mod state;

pub use error::AppError;
pub use tankwar_core as core;
