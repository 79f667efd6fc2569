//! Grid statistics and snapshots.
//!
//! A snapshot lists every occupied cell together with the state of its
//! compute node, suitable for visualisation or debugging dumps.

use crate::grid::Grid;
use animat_core::error::Result;
use animat_core::space::ConfigurationSpace;
use animat_core::types::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary counts for a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridStats {
    pub extent: i32,
    pub mode: GenerationMode,
    pub occupied: usize,
    pub nodes: usize,
    pub by_kind: BTreeMap<TerrainKind, usize>,
}

impl GridStats {
    pub fn count_of(&self, kind: TerrainKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

/// One occupied cell and its node state.
#[derive(Debug, Clone, Serialize)]
pub struct CellSnapshot {
    pub entity: Entity,
    pub weight: f64,
    pub bias: f64,
    pub current_value: f64,
    pub activation: f64,
    pub receptive_field: Vec<Coordinate>,
}

/// Serializable view of a whole grid.
#[derive(Debug, Clone, Serialize)]
pub struct GridSnapshot {
    pub extent: i32,
    pub mode: GenerationMode,
    pub cells: Vec<CellSnapshot>,
}

impl GridSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Count occupied cells, nodes, and cells per terrain kind.
pub fn stats(grid: &Grid) -> GridStats {
    let mut by_kind = BTreeMap::new();
    for (entity, _) in grid.cells() {
        *by_kind.entry(entity.kind).or_insert(0) += 1;
    }
    GridStats {
        extent: grid.extent(),
        mode: grid.mode(),
        occupied: grid.occupied_count(),
        nodes: grid.node_count(),
        by_kind,
    }
}

/// Capture every occupied cell in row-major storage order.
pub fn snapshot(grid: &Grid) -> GridSnapshot {
    let cells = grid
        .cells()
        .filter_map(|(entity, node)| {
            node.map(|n| CellSnapshot {
                entity: *entity,
                weight: n.weight,
                bias: n.bias,
                current_value: n.current_value,
                activation: n.activation,
                receptive_field: n.receptive_field().to_vec(),
            })
        })
        .collect();
    GridSnapshot {
        extent: grid.extent(),
        mode: grid.mode(),
        cells,
    }
}

impl Grid {
    pub fn stats(&self) -> GridStats {
        stats(self)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::PassThrough;

    #[test]
    fn stats_count_kinds() {
        let mut g = Grid::new(PassThrough, GenerationMode::new(1));
        g.place(Entity::new(TerrainKind::Water, 1, 1));
        g.place(Entity::new(TerrainKind::Water, 2, 1));
        g.place(Entity::new(TerrainKind::Stone, 3, 1));

        let stats = g.stats();
        assert_eq!(stats.occupied, 3);
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.count_of(TerrainKind::Water), 2);
        assert_eq!(stats.count_of(TerrainKind::Trap), 0);
    }

    #[test]
    fn snapshot_serializes_cells_with_node_state() {
        let mut g = Grid::new(PassThrough, GenerationMode::new(1));
        g.place(Entity::new(TerrainKind::Resource, 4, 4));
        g.set_node_value(Coordinate::new(4, 4), 0.75).unwrap();

        let json = g.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["extent"], 20);
        assert_eq!(value["mode"], 1);
        assert_eq!(value["cells"][0]["entity"]["kind"], "resource");
        assert_eq!(value["cells"][0]["current_value"], 0.75);
    }
}
