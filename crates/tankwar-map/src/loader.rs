//! Map file loader.
//!
//! File layout: one header line (see [`crate::header`]) followed by grid rows.
//! Each row is a comma-separated list of tokens; rows are read top to bottom.
//! Tokens not named in the header produce empty cells.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use tankwar_core::constants::CELL_SIZE;
use tankwar_core::enums::EntityKind;
use tankwar_core::types::{Position, WorldBounds};

use crate::error::{MapError, Result};
use crate::grid::WorldGrid;
use crate::header::{parse_header, TokenSpec};
use crate::registry::{Blueprint, EntityRegistry, UnitStats};

/// A parsed map, ready to be spawned into a simulation.
#[derive(Debug, Clone)]
pub struct ParsedMap {
    pub name: String,
    /// Entities in reading order (row by row, left to right).
    pub blueprints: Vec<Blueprint>,
    /// Index into `blueprints` for every occupied cell.
    pub grid: WorldGrid<usize>,
    /// Tokens placed per header kind. Every header kind is present, even at zero.
    pub counts: BTreeMap<String, u32>,
}

impl ParsedMap {
    pub fn bounds(&self) -> WorldBounds {
        self.grid.bounds()
    }

    /// Count for a header kind, zero when the kind is absent.
    pub fn count(&self, kind: &str) -> u32 {
        self.counts.get(kind).copied().unwrap_or(0)
    }
}

/// Read and parse a map file. The map is named after the file stem.
pub fn load_map(path: &Path, registry: &EntityRegistry) -> Result<ParsedMap> {
    let text = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let map = parse_map(&name, &text, registry)?;
    tracing::info!(
        "Map <{}> init success, has {} walls, {} metal walls and {} enemy tanks.",
        path.display(),
        map.count("Wall"),
        map.count("MetalWall"),
        map.count("EnemyTank"),
    );
    Ok(map)
}

/// Parse map text.
pub fn parse_map(name: &str, text: &str, registry: &EntityRegistry) -> Result<ParsedMap> {
    let mut lines = text.lines();
    let header_line = lines
        .by_ref()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| MapError::Empty(name.to_string()))?;

    let header = parse_header(header_line).map_err(|source| MapError::InvalidHeader {
        name: name.to_string(),
        source,
    })?;

    let mut counts = BTreeMap::new();
    let mut tokens: HashMap<&str, (&str, &TokenSpec)> = HashMap::new();
    for (kind, spec) in &header {
        counts.insert(kind.clone(), 0);
        if !registry.contains(kind) {
            tracing::warn!("map {name}: unknown entity kind {kind:?}, its tokens stay empty");
            continue;
        }
        for token in spec.tokens() {
            if tokens.contains_key(token.name.as_str()) {
                tracing::warn!("map {name}: token {:?} defined twice, keeping the first", token.name);
                continue;
            }
            tokens.insert(token.name.as_str(), (kind.as_str(), token));
        }
    }

    let mut blueprints = Vec::new();
    let mut rows: Vec<Vec<Option<usize>>> = Vec::new();
    for line in lines.filter(|line| !line.trim().is_empty()) {
        let y = rows.len() as i32;
        let row = line
            .split(',')
            .enumerate()
            .map(|(x, token)| {
                let (kind, spec) = tokens.get(token.trim())?;
                let stats = UnitStats {
                    hp: spec.hp,
                    damage: spec.damage,
                    speed: spec.speed,
                    icon: spec.image.clone(),
                };
                let position = Position::new(x as i32 * CELL_SIZE, y * CELL_SIZE);
                let blueprint = registry.build(kind, &stats, position)?;
                if let Some(count) = counts.get_mut(*kind) {
                    *count += 1;
                }
                blueprints.push(blueprint);
                Some(blueprints.len() - 1)
            })
            .collect();
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(MapError::NoRows(name.to_string()));
    }
    if !blueprints.iter().any(|b| b.kind == EntityKind::PlayerTank) {
        return Err(MapError::NoPlayerTank(name.to_string()));
    }

    Ok(ParsedMap {
        name: name.to_string(),
        blueprints,
        grid: WorldGrid::from_rows(rows),
        counts,
    })
}

/// Map files in `dir` with the given extension, sorted by file name.
pub fn discover_maps(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let io_err = |source| MapError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut maps = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            maps.push(path);
        }
    }
    maps.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(maps)
}
