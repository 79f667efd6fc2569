//! Concrete implementation of the ConfigurationSpace trait.
//!
//! The grid stores its two layers as flat `Vec`s of `(extent + 1)²` slots,
//! indexed `y * side + x`. A slot in the entity layer is occupied exactly
//! when the same slot in the node layer is, and the node's mirrored entity
//! always equals the stored one.

use crate::config::GridConfig;
use crate::generators::LayoutGenerator;
use animat_core::animat::Animat;
use animat_core::error::{GridError, Result};
use animat_core::generator::TerrainGenerator;
use animat_core::journey;
use animat_core::node::ComputeNode;
use animat_core::space::ConfigurationSpace;
use animat_core::types::*;
use tracing::{debug, trace};

/// In-memory configuration space.
///
/// Owns the entity layer, the node layer, and the terrain generator that
/// decides what newly placed cells become under the active mode.
pub struct Grid {
    extent: i32,
    side: usize,
    entities: Vec<Option<Entity>>,
    nodes: Vec<Option<ComputeNode>>,
    mode: GenerationMode,
    generator: Box<dyn TerrainGenerator>,
    baseline: TerrainKind,
    node_weight: f64,
    node_bias: f64,
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("extent", &self.extent)
            .field("mode", &self.mode)
            .field("baseline", &self.baseline)
            .field("occupied", &self.occupied_count())
            .finish_non_exhaustive()
    }
}

impl Grid {
    /// A grid with default settings, the given generator, and mode.
    pub fn new(generator: impl TerrainGenerator + 'static, mode: GenerationMode) -> Self {
        let config = GridConfig::default().with_mode(mode);
        Self::build(&config, Box::new(generator))
    }

    /// A grid shaped by `config`, using an explicit generator.
    pub fn with_config(
        config: &GridConfig,
        generator: impl TerrainGenerator + 'static,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, Box::new(generator)))
    }

    /// A grid shaped by `config`, painting terrain with its layout rules.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        let generator = LayoutGenerator::from_layouts(config.baseline, config.layout.clone());
        Self::with_config(config, generator)
    }

    fn build(config: &GridConfig, generator: Box<dyn TerrainGenerator>) -> Self {
        let side = config.extent as usize + 1;
        Self {
            extent: config.extent,
            side,
            entities: vec![None; side * side],
            nodes: vec![None; side * side],
            mode: config.mode,
            generator,
            baseline: config.baseline,
            node_weight: config.node_weight,
            node_bias: config.node_bias,
        }
    }

    /// Switch the generation mode used by later placements.
    pub fn set_mode(&mut self, mode: GenerationMode) {
        debug!(from = %self.mode, to = %mode, "generation mode changed");
        self.mode = mode;
    }

    pub fn baseline(&self) -> TerrainKind {
        self.baseline
    }

    fn index(&self, at: Coordinate) -> Option<usize> {
        if self.in_range(at) {
            Some(at.y as usize * self.side + at.x as usize)
        } else {
            None
        }
    }

    /// Index of `at` if it is in range and empty on both layers.
    fn vacant_index(&self, at: Coordinate) -> Option<usize> {
        self.index(at)
            .filter(|&i| self.entities[i].is_none() && self.nodes[i].is_none())
    }

    /// Write an entity and a fresh node bound to it.
    fn write(&mut self, idx: usize, entity: Entity) {
        self.entities[idx] = Some(entity);
        self.nodes[idx] = Some(ComputeNode::bound_to(
            entity,
            self.node_weight,
            self.node_bias,
        ));
    }

    /// The node at `at`: `Ok(None)` off the grid, `MissingNode` for an
    /// in-range cell that has none.
    fn node_mut(&mut self, at: Coordinate) -> Result<Option<&mut ComputeNode>> {
        let Some(idx) = self.index(at) else {
            return Ok(None);
        };
        match self.nodes[idx].as_mut() {
            Some(node) => Ok(Some(node)),
            None => Err(GridError::missing_node(at.x, at.y)),
        }
    }

    // --- Lookup ---

    /// Lookup that materializes: the entity at `at`, generated on first sight.
    pub fn lookup(&mut self, at: Coordinate) -> Option<Entity> {
        self.ensure_materialized(at)
    }

    // --- Placement ---

    /// Overwrite the entity at its position and re-bind the node there,
    /// skipping the occupancy check and the generator.
    ///
    /// The cell must already have a node; off-grid entities are ignored.
    pub fn set_entity_at(&mut self, entity: Entity) -> Result<()> {
        let Some(node) = self.node_mut(entity.position)? else {
            return Ok(());
        };
        node.set_entity(Some(entity));
        if let Some(idx) = self.index(entity.position) {
            self.entities[idx] = Some(entity);
        }
        Ok(())
    }

    /// Bulk-load entities straight into both layers.
    ///
    /// Bypasses the generator and overwrites whatever was there; entities
    /// outside the grid are skipped. Returns the number stored.
    pub fn load_layout(&mut self, entities: impl IntoIterator<Item = Entity>) -> usize {
        let mut loaded = 0usize;
        for entity in entities {
            if let Some(idx) = self.index(entity.position) {
                self.write(idx, entity);
                loaded += 1;
            }
        }
        debug!(loaded, mode = %self.mode, "layout loaded");
        loaded
    }

    // --- Receptive field ---

    /// Rebuild the receptive field of the node at `at`.
    ///
    /// Walks the eight surrounding offsets in row-major order, generating
    /// terrain where a neighbor is still empty, and records each neighbor
    /// node until the field holds eight entries. Off the grid there is no
    /// node to rebuild and `Ok(None)` is returned.
    pub fn build_receptive_field(&mut self, at: Coordinate) -> Result<Option<&ComputeNode>> {
        if !self.in_range(at) {
            return Ok(None);
        }
        if self.node(at).is_none() {
            return Err(GridError::missing_node(at.x, at.y));
        }

        let mut field = Vec::with_capacity(MAX_RECEPTIVE_FIELD);
        for &(dx, dy) in MOORE_OFFSETS.iter() {
            if (dx, dy) == (0, 0) {
                continue;
            }
            let neighbor = at.offset(dx, dy);
            if self.ensure_materialized(neighbor).is_some() && self.node(neighbor).is_some() {
                field.push(neighbor);
            }
            if field.len() == MAX_RECEPTIVE_FIELD {
                break;
            }
        }

        let Some(node) = self.node_mut(at)? else {
            return Ok(None);
        };
        node.clear_receptive_field();
        for neighbor in field {
            node.add_to_receptive_field(neighbor);
        }
        Ok(Some(&*node))
    }

    // --- Stimulus ---

    /// Set the iota of every entity of `kind` in the 3×3 block around `at`
    /// (center included), mirroring it into the node's input value.
    ///
    /// Returns how many cells were updated.
    pub fn set_iota_for_neighbors_of_type(
        &mut self,
        kind: TerrainKind,
        value: f64,
        at: Coordinate,
    ) -> usize {
        let mut updated = 0usize;
        for &(dx, dy) in MOORE_OFFSETS.iter() {
            let Some(idx) = self.index(at.offset(dx, dy)) else {
                continue;
            };
            let Some(entity) = self.entities[idx].as_mut() else {
                continue;
            };
            if entity.kind != kind {
                continue;
            }
            entity.iota = value;
            if let Some(node) = self.nodes[idx].as_mut() {
                node.set_iota(value);
            }
            updated += 1;
        }
        trace!(%kind, value, center = %at, updated, "iota propagated");
        updated
    }

    pub fn set_node_value(&mut self, at: Coordinate, value: f64) -> Result<()> {
        if let Some(node) = self.node_mut(at)? {
            node.current_value = value;
        }
        Ok(())
    }

    pub fn set_node_bias(&mut self, at: Coordinate, bias: f64) -> Result<()> {
        if let Some(node) = self.node_mut(at)? {
            node.bias = bias;
        }
        Ok(())
    }

    pub fn set_node_weight(&mut self, at: Coordinate, weight: f64) -> Result<()> {
        if let Some(node) = self.node_mut(at)? {
            node.weight = weight;
        }
        Ok(())
    }

    /// Run the activation rule of the node at `at` and return its output,
    /// or `None` off the grid.
    pub fn activate(&mut self, at: Coordinate) -> Result<Option<f64>> {
        Ok(self.node_mut(at)?.map(|node| node.activate()))
    }

    // --- Journey ---

    /// Turn an animat's visited cells into trail markers on its own grid.
    pub fn replay_journey<A>(animat: &mut A) -> &mut Grid
    where
        A: Animat<Space = Grid>,
    {
        journey::replay_journey(animat)
    }

    // --- Inspection ---

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_some()).count()
    }

    /// Number of compute nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// All occupied cells with their nodes, in row-major storage order.
    pub fn cells(&self) -> impl Iterator<Item = (&Entity, Option<&ComputeNode>)> + '_ {
        self.entities
            .iter()
            .zip(self.nodes.iter())
            .filter_map(|(e, n)| e.as_ref().map(|e| (e, n.as_ref())))
    }
}

impl ConfigurationSpace for Grid {
    fn extent(&self) -> i32 {
        self.extent
    }

    fn mode(&self) -> GenerationMode {
        self.mode
    }

    fn place(&mut self, entity: Entity) -> bool {
        if self.vacant_index(entity.position).is_none() {
            trace!(at = %entity.position, kind = %entity.kind, "placement absorbed");
            return false;
        }

        let entity = if self.mode.is_recognized() {
            self.generator.transform(entity, self.mode)
        } else {
            entity
        };

        // The generator may have moved the entity; re-check where it landed.
        let Some(idx) = self.vacant_index(entity.position) else {
            trace!(at = %entity.position, kind = %entity.kind, "generated placement absorbed");
            return false;
        };
        self.write(idx, entity);
        trace!(at = %entity.position, kind = %entity.kind, "entity placed");
        true
    }

    fn remove_at(&mut self, at: Coordinate) -> Option<Entity> {
        let idx = self.index(at)?;
        self.nodes[idx] = None;
        let removed = self.entities[idx].take();
        if let Some(entity) = &removed {
            debug!(at = %at, kind = %entity.kind, "entity removed");
        }
        removed
    }

    fn peek(&self, at: Coordinate) -> Option<&Entity> {
        self.index(at).and_then(|i| self.entities[i].as_ref())
    }

    fn ensure_materialized(&mut self, at: Coordinate) -> Option<Entity> {
        if !self.in_range(at) {
            return None;
        }
        if let Some(entity) = self.peek(at) {
            return Some(*entity);
        }
        self.place(Entity::at(self.baseline, at));
        self.peek(at).copied()
    }

    fn node(&self, at: Coordinate) -> Option<&ComputeNode> {
        self.index(at).and_then(|i| self.nodes[i].as_ref())
    }
}
