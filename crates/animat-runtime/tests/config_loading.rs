//! Building grids from TOML configuration files.

use animat_core::prelude::*;
use animat_runtime::prelude::*;
use std::io::Write;

#[test]
fn grid_from_config_file_paints_layout() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
extent = 8
mode = 2
node_bias = 0.5

[[layout]]
mode = 2
rules = [{{ shape = "column", x = 0, kind = "water" }}]

[[layout]]
mode = 1
rules = [{{ shape = "row", y = 0, kind = "stone" }}]
"#
    )
    .unwrap();

    let config = GridConfig::load(file.path()).unwrap();
    let mut grid = Grid::from_config(&config).unwrap();

    assert_eq!(grid.extent(), 8);
    assert!(grid.lookup(Coordinate::new(8, 8)).is_some());
    assert!(grid.lookup(Coordinate::new(9, 0)).is_none());

    // Mode 2 is active: column 0 is water, row 0 is untouched.
    assert_eq!(grid.lookup(Coordinate::new(0, 4)).map(|e| e.kind), Some(TerrainKind::Water));
    assert_eq!(grid.lookup(Coordinate::new(4, 0)).map(|e| e.kind), Some(TerrainKind::Grass));

    let node = grid.node(Coordinate::new(0, 4)).unwrap();
    assert_eq!(node.bias, 0.5);
    assert_eq!(node.weight, 1.0);
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GridConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, GridError::Config(_)));
}

#[test]
fn invalid_extent_is_rejected_before_allocation() {
    let config = GridConfig::default().with_extent(MAX_EXTENT + 1);
    let err = Grid::with_config(&config, PassThrough).unwrap_err();
    assert!(matches!(err, GridError::InvalidConfig { .. }));
}
