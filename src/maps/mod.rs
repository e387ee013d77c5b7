//! Built-in map catalog and JSON map files

mod park;

use crate::error::MapError;
use crate::grid::GridMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Names of the built-in maps.
pub const CATALOG: &[&str] = &["Park"];

/// Resolve a built-in map by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Result<GridMap, MapError> {
    if name.eq_ignore_ascii_case("Park") {
        let layout: Vec<&[u8]> = park::LAYOUT.iter().map(|row| row.as_slice()).collect();
        return GridMap::from_codes("Park", &layout, &park::ENTRANCES, &park::EXITS);
    }
    Err(MapError::Unmapped {
        name: name.to_string(),
        known: CATALOG.join(", "),
    })
}

/// On-disk map description.
///
/// ```json
/// {"name": "Tiny", "layout": [[2, 0, 3]], "entrances": [[[0, 0], 0]], "exits": [[[0, 2], 0]]}
/// ```
#[derive(Debug, Deserialize)]
struct MapFile {
    name: String,
    layout: Vec<Vec<u8>>,
    entrances: Vec<((usize, usize), usize)>,
    exits: Vec<((usize, usize), usize)>,
}

/// Load and validate a map from a JSON file.
pub fn load_map_file(path: &Path) -> Result<GridMap, MapError> {
    let data = fs::read(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: MapFile = serde_json::from_slice(&data).map_err(|source| MapError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let layout: Vec<&[u8]> = file.layout.iter().map(Vec::as_slice).collect();
    GridMap::from_codes(file.name, &layout, &file.entrances, &file.exits)
}
