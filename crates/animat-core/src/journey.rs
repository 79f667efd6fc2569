//! Journey replay: bake an animat's path into its terrain.

use crate::animat::Animat;
use crate::space::ConfigurationSpace;
use crate::types::*;
use tracing::debug;

/// Pop every visited entity off the animat's history (most recent first)
/// and replace the cell it occupied with a [`TerrainKind::Path`] marker.
///
/// The history is empty afterwards. Returns the animat's mutated space.
pub fn replay_journey<A: Animat>(animat: &mut A) -> &mut A::Space {
    let id = animat.id();
    let (history, space) = animat.journey_mut();
    let mut marked = 0usize;

    while let Some(visited) = history.pop() {
        space.remove(&visited);
        if space.place(Entity::at(TerrainKind::Path, visited.position)) {
            marked += 1;
        }
    }

    debug!(animat = ?id.0, marked, "replayed journey into trail");
    space
}
