//! ConfigurationSpace: the bounded world an animat explores.
//!
//! A configuration space holds two layers keyed by the same coordinates:
//! the terrain entities and the compute nodes that mirror them. Both
//! layers are always written and cleared together.

use crate::node::ComputeNode;
use crate::types::*;

/// The shared environment an animat senses and modifies.
///
/// Coordinates outside `[0, extent] × [0, extent]` are never stored.
/// Every method absorbs them: reads return nothing, writes do nothing.
pub trait ConfigurationSpace {
    /// Largest valid coordinate on either axis (inclusive).
    fn extent(&self) -> i32;

    /// The generation mode consulted when new entities are placed.
    fn mode(&self) -> GenerationMode;

    /// Whether `at` lies inside the space.
    fn in_range(&self, at: Coordinate) -> bool {
        let n = self.extent();
        (0..=n).contains(&at.x) && (0..=n).contains(&at.y)
    }

    // --- Placement ---

    /// Place an entity on an empty cell, binding a fresh node to it.
    ///
    /// Returns `false` when the call was absorbed (out of range or occupied).
    fn place(&mut self, entity: Entity) -> bool;

    /// Clear both layers at `at`, returning the entity that was there.
    fn remove_at(&mut self, at: Coordinate) -> Option<Entity>;

    /// Clear both layers at the entity's position.
    fn remove(&mut self, entity: &Entity) -> Option<Entity> {
        self.remove_at(entity.position)
    }

    // --- Lookup ---

    /// Read a cell without side effects.
    fn peek(&self, at: Coordinate) -> Option<&Entity>;

    /// Return the entity at `at`, generating baseline terrain there first
    /// if the in-range cell is still empty.
    fn ensure_materialized(&mut self, at: Coordinate) -> Option<Entity>;

    /// The compute node at `at`, if any.
    fn node(&self, at: Coordinate) -> Option<&ComputeNode>;

    // --- Neighborhood ---

    /// The 3×3 Moore neighborhood around `at`, center included, in
    /// row-major offset order. Out-of-range cells are left out; empty
    /// in-range cells appear as `None`.
    fn neighborhood(&self, at: Coordinate) -> Vec<Option<Entity>> {
        MOORE_OFFSETS
            .iter()
            .map(|&(dx, dy)| at.offset(dx, dy))
            .filter(|c| self.in_range(*c))
            .map(|c| self.peek(c).copied())
            .collect()
    }

    /// Like [`neighborhood`](Self::neighborhood), but materializes every
    /// in-range cell first, so the agent sees terrain everywhere it looks.
    fn explore_neighborhood(&mut self, at: Coordinate) -> Vec<Entity> {
        let mut seen = Vec::with_capacity(MOORE_OFFSETS.len());
        for &(dx, dy) in MOORE_OFFSETS.iter() {
            let c = at.offset(dx, dy);
            if let Some(entity) = self.ensure_materialized(c) {
                seen.push(entity);
            }
        }
        seen
    }
}
