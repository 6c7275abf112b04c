//! Map descriptions for TANKWAR.
//!
//! Parses the text map format into entity blueprints placed on a
//! column-major grid, through a registry of named constructors.

pub use tankwar_core as core;

pub mod error;
pub mod grid;
pub mod header;
pub mod loader;
pub mod registry;

// Re-export key types for convenience.
pub use error::MapError;
pub use grid::WorldGrid;
pub use loader::{discover_maps, load_map, parse_map, ParsedMap};
pub use registry::{Blueprint, EntityRegistry, UnitStats};
