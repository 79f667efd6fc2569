//! Reference terrain generators.
//!
//! - [`PassThrough`] keeps every candidate as it is.
//! - [`LayoutGenerator`] paints fixed terrain (single cells, whole rows,
//!   whole columns) per generation mode, driven by config.
//!
//! Layout rules only repaint *baseline* candidates, i.e. cells the grid is
//! materializing on its own. An explicit placement of any other kind
//! (a trail marker, a placed water tile) is left alone.

use animat_core::generator::TerrainGenerator;
use animat_core::types::*;
use serde::{Deserialize, Serialize};

/// Identity generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl TerrainGenerator for PassThrough {
    fn transform(&self, candidate: Entity, _mode: GenerationMode) -> Entity {
        candidate
    }
}

/// One painting rule of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum LayoutRule {
    /// A single cell.
    Cell { x: i32, y: i32, kind: TerrainKind },
    /// Every cell with this `y`.
    Row { y: i32, kind: TerrainKind },
    /// Every cell with this `x`.
    Column { x: i32, kind: TerrainKind },
}

impl LayoutRule {
    /// The kind this rule paints at `at`, if it covers that cell.
    pub fn paint(&self, at: Coordinate) -> Option<TerrainKind> {
        match *self {
            LayoutRule::Cell { x, y, kind } if at.x == x && at.y == y => Some(kind),
            LayoutRule::Row { y, kind } if at.y == y => Some(kind),
            LayoutRule::Column { x, kind } if at.x == x => Some(kind),
            _ => None,
        }
    }
}

/// The rules applied under one generation mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeLayout {
    pub mode: GenerationMode,
    #[serde(default)]
    pub rules: Vec<LayoutRule>,
}

/// Paints configured terrain onto baseline cells as they materialize.
#[derive(Debug, Clone, Default)]
pub struct LayoutGenerator {
    baseline: TerrainKind,
    layouts: Vec<ModeLayout>,
}

impl LayoutGenerator {
    pub fn new(baseline: TerrainKind) -> Self {
        Self {
            baseline,
            layouts: Vec::new(),
        }
    }

    pub fn from_layouts(baseline: TerrainKind, layouts: Vec<ModeLayout>) -> Self {
        Self { baseline, layouts }
    }

    /// Append a rule to a mode's layout.
    pub fn with_rule(mut self, mode: GenerationMode, rule: LayoutRule) -> Self {
        match self.layouts.iter_mut().find(|l| l.mode == mode) {
            Some(layout) => layout.rules.push(rule),
            None => self.layouts.push(ModeLayout {
                mode,
                rules: vec![rule],
            }),
        }
        self
    }

    pub fn layouts(&self) -> &[ModeLayout] {
        &self.layouts
    }

    /// The kind painted at `at` under `mode`. Later rules win.
    fn painted(&self, at: Coordinate, mode: GenerationMode) -> Option<TerrainKind> {
        self.layouts
            .iter()
            .filter(|l| l.mode == mode)
            .flat_map(|l| l.rules.iter())
            .filter_map(|r| r.paint(at))
            .last()
    }
}

impl TerrainGenerator for LayoutGenerator {
    fn transform(&self, candidate: Entity, mode: GenerationMode) -> Entity {
        if candidate.kind != self.baseline {
            return candidate;
        }
        match self.painted(candidate.position, mode) {
            Some(kind) => candidate.reclassify(kind),
            None => candidate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grass(x: i32, y: i32) -> Entity {
        Entity::new(TerrainKind::Grass, x, y)
    }

    #[test]
    fn pass_through_is_identity() {
        let e = Entity::new(TerrainKind::Trap, 2, 2).with_iota(0.5);
        assert_eq!(PassThrough.transform(e, GenerationMode::new(1)), e);
    }

    #[test]
    fn row_rule_paints_only_its_row_and_mode() {
        let gen = LayoutGenerator::new(TerrainKind::Grass).with_rule(
            GenerationMode::new(1),
            LayoutRule::Row { y: 2, kind: TerrainKind::Water },
        );

        let m1 = GenerationMode::new(1);
        assert_eq!(gen.transform(grass(7, 2), m1).kind, TerrainKind::Water);
        assert_eq!(gen.transform(grass(7, 3), m1).kind, TerrainKind::Grass);
        assert_eq!(
            gen.transform(grass(7, 2), GenerationMode::new(2)).kind,
            TerrainKind::Grass
        );
    }

    #[test]
    fn later_rules_paint_over_earlier_ones() {
        let m = GenerationMode::new(3);
        let gen = LayoutGenerator::new(TerrainKind::Grass)
            .with_rule(m, LayoutRule::Column { x: 4, kind: TerrainKind::Stone })
            .with_rule(m, LayoutRule::Cell { x: 4, y: 4, kind: TerrainKind::Resource });

        assert_eq!(gen.transform(grass(4, 4), m).kind, TerrainKind::Resource);
        assert_eq!(gen.transform(grass(4, 5), m).kind, TerrainKind::Stone);
        assert_eq!(gen.layouts().len(), 1);
    }

    #[test]
    fn explicit_kinds_are_not_repainted() {
        let m = GenerationMode::new(1);
        let gen = LayoutGenerator::new(TerrainKind::Grass)
            .with_rule(m, LayoutRule::Row { y: 0, kind: TerrainKind::Water });

        let trail = Entity::new(TerrainKind::Path, 3, 0);
        assert_eq!(gen.transform(trail, m), trail);
    }

    #[test]
    fn rules_deserialize_from_tagged_tables() {
        let json = r#"{"mode":2,"rules":[{"shape":"row","y":1,"kind":"trap"}]}"#;
        let layout: ModeLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.mode, GenerationMode::new(2));
        assert_eq!(
            layout.rules,
            vec![LayoutRule::Row { y: 1, kind: TerrainKind::Trap }]
        );
    }
}
