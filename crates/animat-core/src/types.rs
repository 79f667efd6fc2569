//! Shared types used across the configuration space, generators, and animats.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an animat exploring a configuration space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimatId(pub Uuid);

impl AnimatId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnimatId {
    fn default() -> Self {
        Self::new()
    }
}

/// An integer cell position.
///
/// Signed so that callers can ask about cells just past the border
/// (e.g. `x - 1` at the left edge) without wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`, saturating at the `i32` bounds.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The 3×3 Moore offsets in row-major order, center included.
///
/// `dx` is the outer loop and `dy` the inner one, so the sequence runs
/// `(-1,-1), (-1,0), (-1,1), (0,-1), …, (1,1)`.
pub const MOORE_OFFSETS: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Maximum size of a receptive field (all eight neighbors of an interior cell).
pub const MAX_RECEPTIVE_FIELD: usize = 8;

/// The closed catalog of terrain kinds an entity can be.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TerrainKind {
    #[default]
    Grass,
    Water,
    Stone,
    /// Trail marker left behind by a replayed journey.
    Path,
    Trap,
    Resource,
}

impl TerrainKind {
    /// Every kind, in declaration order.
    pub const ALL: [TerrainKind; 6] = [
        TerrainKind::Grass,
        TerrainKind::Water,
        TerrainKind::Stone,
        TerrainKind::Path,
        TerrainKind::Trap,
        TerrainKind::Resource,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TerrainKind::Grass => "grass",
            TerrainKind::Water => "water",
            TerrainKind::Stone => "stone",
            TerrainKind::Path => "path",
            TerrainKind::Trap => "trap",
            TerrainKind::Resource => "resource",
        }
    }
}

impl std::fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stimulus value a freshly constructed entity carries.
pub const DEFAULT_IOTA: f64 = 0.0;

/// A typed terrain object occupying one cell.
///
/// Entities are plain values: copying one is the whole clone, and
/// reclassifying one keeps its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: TerrainKind,
    pub position: Coordinate,
    /// Scalar stimulus carried by this cell.
    pub iota: f64,
}

impl Entity {
    pub fn new(kind: TerrainKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            position: Coordinate::new(x, y),
            iota: DEFAULT_IOTA,
        }
    }

    pub fn at(kind: TerrainKind, position: Coordinate) -> Self {
        Self::new(kind, position.x, position.y)
    }

    /// A fresh entity of another kind at the same position (iota reset).
    pub fn reclassify(&self, kind: TerrainKind) -> Self {
        Self::at(kind, self.position)
    }

    /// The same entity moved to another cell.
    pub fn relocate(&self, position: Coordinate) -> Self {
        Self { position, ..*self }
    }

    pub fn with_iota(mut self, iota: f64) -> Self {
        self.iota = iota;
        self
    }
}

/// Identifier of the terrain-generation policy active on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationMode(pub u8);

impl GenerationMode {
    /// Modes a generator is consulted for.
    pub const RECOGNIZED: [GenerationMode; 3] =
        [GenerationMode(1), GenerationMode(2), GenerationMode(3)];

    pub fn new(id: u8) -> Self {
        Self(id)
    }

    /// Whether placements under this mode go through the generator.
    pub fn is_recognized(&self) -> bool {
        Self::RECOGNIZED.contains(self)
    }
}

impl Default for GenerationMode {
    fn default() -> Self {
        GenerationMode(1)
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mode-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moore_offsets_are_row_major_with_center_in_the_middle() {
        assert_eq!(MOORE_OFFSETS[0], (-1, -1));
        assert_eq!(MOORE_OFFSETS[4], (0, 0));
        assert_eq!(MOORE_OFFSETS[8], (1, 1));
        let mut sorted = MOORE_OFFSETS;
        sorted.sort();
        assert_eq!(sorted, MOORE_OFFSETS);
    }

    #[test]
    fn reclassify_keeps_position_and_resets_iota() {
        let water = Entity::new(TerrainKind::Water, 4, 7).with_iota(0.7);
        let stone = water.reclassify(TerrainKind::Stone);
        assert_eq!(stone.kind, TerrainKind::Stone);
        assert_eq!(stone.position, Coordinate::new(4, 7));
        assert_eq!(stone.iota, DEFAULT_IOTA);
    }

    #[test]
    fn relocate_keeps_kind_and_iota() {
        let e = Entity::new(TerrainKind::Resource, 1, 1).with_iota(0.3);
        let moved = e.relocate(Coordinate::new(2, 5));
        assert_eq!(moved.kind, TerrainKind::Resource);
        assert_eq!(moved.iota, 0.3);
        assert_eq!(moved.position, Coordinate::new(2, 5));
    }

    #[test]
    fn only_modes_one_to_three_are_recognized() {
        assert!(!GenerationMode::new(0).is_recognized());
        assert!(GenerationMode::new(1).is_recognized());
        assert!(GenerationMode::new(3).is_recognized());
        assert!(!GenerationMode::new(4).is_recognized());
    }

    #[test]
    fn terrain_kind_serializes_snake_case() {
        let json = serde_json::to_string(&TerrainKind::Resource).unwrap();
        assert_eq!(json, "\"resource\"");
        let back: TerrainKind = serde_json::from_str("\"water\"").unwrap();
        assert_eq!(back, TerrainKind::Water);
    }
}
