//! TerrainGenerator: decides what a newly placed entity becomes.

use crate::types::*;

/// Transforms a candidate entity under a generation mode.
///
/// The returned entity is trusted as the final placement: the space reads
/// its kind and its position from it. Implementations must not reach back
/// into the space.
pub trait TerrainGenerator {
    fn transform(&self, candidate: Entity, mode: GenerationMode) -> Entity;
}

impl<F> TerrainGenerator for F
where
    F: Fn(Entity, GenerationMode) -> Entity,
{
    fn transform(&self, candidate: Entity, mode: GenerationMode) -> Entity {
        self(candidate, mode)
    }
}
